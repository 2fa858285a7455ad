//! Request body reading for apartment create and update requests.
//!
//! Three encodings are accepted: `multipart/form-data` (text fields plus
//! `images` files), `application/json` and
//! `application/x-www-form-urlencoded`. Only multipart can carry images.

use axum::extract::multipart::Field;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use estate_core::apartment::{ApartmentForm, FIELD_IMAGES};
use estate_media::UploadFile;

use crate::error::{AppError, AppResult};

/// Content type assumed for file parts that do not declare one.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Everything a client submitted in one apartment form.
#[derive(Debug, Default)]
pub struct ApartmentSubmission {
    /// Text fields, raw.
    pub form: ApartmentForm,
    /// Files sent under the `images` field, in submission order.
    pub files: Vec<UploadFile>,
}

/// Request body encodings an apartment submission may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Multipart,
    Json,
    UrlEncoded,
}

impl BodyKind {
    fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        match mime.as_str() {
            "multipart/form-data" => Some(Self::Multipart),
            "application/x-www-form-urlencoded" => Some(Self::UrlEncoded),
            "application/json" => Some(Self::Json),
            other if other.starts_with("application/") && other.ends_with("+json") => {
                Some(Self::Json)
            }
            _ => None,
        }
    }
}

impl<S> FromRequest<S> for ApartmentSubmission
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(BodyKind::from_content_type);

        match kind {
            Some(BodyKind::Multipart) => {
                let multipart = Multipart::from_request(req, state).await?;
                read_multipart(multipart).await
            }
            Some(BodyKind::Json) => {
                let Json(body) = Json::<serde_json::Value>::from_request(req, state).await?;
                Ok(Self {
                    form: ApartmentForm::from_json(&body)?,
                    files: Vec::new(),
                })
            }
            Some(BodyKind::UrlEncoded) => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
                let mut form = ApartmentForm::default();
                for (name, value) in pairs {
                    set_text_field(&mut form, name, value);
                }
                Ok(Self {
                    form,
                    files: Vec::new(),
                })
            }
            None => Err(AppError::BadRequest(
                "Expected a multipart/form-data, application/json or \
                 application/x-www-form-urlencoded body."
                    .to_string(),
            )),
        }
    }
}

/// Drain a multipart body into an [`ApartmentSubmission`].
///
/// Unknown fields are ignored. A file input left empty by the browser (no
/// file name, no bytes) is skipped rather than treated as an upload.
async fn read_multipart(mut multipart: Multipart) -> AppResult<ApartmentSubmission> {
    let mut submission = ApartmentSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        if name == FIELD_IMAGES {
            if let Some(file) = read_file(field).await? {
                submission.files.push(file);
            }
            continue;
        }

        let value = field.text().await?;
        set_text_field(&mut submission.form, name, value);
    }

    Ok(submission)
}

fn set_text_field(form: &mut ApartmentForm, name: String, value: String) {
    if !form.set_field(&name, value) {
        tracing::debug!(field = %name, "Ignoring unknown form field");
    }
}

async fn read_file(field: Field<'_>) -> AppResult<Option<UploadFile>> {
    let file_name = field
        .file_name()
        .filter(|n| !n.is_empty())
        .map(str::to_string);
    let content_type = field
        .content_type()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();
    let bytes = field.bytes().await?;

    if file_name.is_none() && bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(UploadFile::new(file_name, content_type, bytes.to_vec())))
}
