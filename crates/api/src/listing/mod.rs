//! Apartment resource: request body reading and the service that
//! coordinates validation, image uploads and persistence.

pub mod form;
pub mod service;

pub use form::ApartmentSubmission;
pub use service::ApartmentService;
