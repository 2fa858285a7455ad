//! Uploader trait, upload input/error types and sequential batch upload.

use async_trait::async_trait;

/// A file received from a client, ready to be pushed to the media host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Original client-side file name, if the client sent one.
    pub file_name: Option<String>,
    /// MIME type as declared by the client.
    pub content_type: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: Option<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name,
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Name used in logs and multipart bodies when the client sent none.
    pub fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("upload")
    }
}

/// Errors from a single file upload.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The file has no content; nothing was sent to the host.
    #[error("File {0:?} is empty")]
    EmptyFile(String),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The media host returned a non-2xx status code.
    #[error("Media host error ({status}): {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The media host answered 2xx but without a usable URL.
    #[error("Media host response is missing a URL: {0}")]
    MalformedResponse(String),
}

/// Pushes a single file to a media host and returns its public URL.
///
/// Implementations are invoked one file at a time; callers must not assume
/// any batching or concurrency support.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, file: &UploadFile) -> Result<String, UploadError>;
}

/// Upload `files` strictly one after another, returning URLs in submission
/// order.
///
/// Stops at the first failure. URLs obtained before the failure are dropped;
/// the hosted copies are not removed.
pub async fn upload_all(
    uploader: &dyn MediaUploader,
    files: &[UploadFile],
) -> Result<Vec<String>, UploadError> {
    let mut urls = Vec::with_capacity(files.len());
    for (index, file) in files.iter().enumerate() {
        match uploader.upload(file).await {
            Ok(url) => urls.push(url),
            Err(e) => {
                tracing::warn!(
                    index,
                    file = file.display_name(),
                    uploaded = urls.len(),
                    error = %e,
                    "Image upload failed, aborting batch",
                );
                return Err(e);
            }
        }
    }
    Ok(urls)
}
