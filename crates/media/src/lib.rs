//! Media host integration for listing images.
//!
//! [`MediaUploader`] is the seam the apartment service depends on: hand it a
//! file, get back a publicly addressable URL. [`CloudinaryUploader`] is the
//! production implementation.

pub mod cloudinary;
pub mod uploader;

pub use cloudinary::{CloudinaryConfig, CloudinaryUploader, SignatureAlgorithm};
pub use uploader::{upload_all, MediaUploader, UploadError, UploadFile};
