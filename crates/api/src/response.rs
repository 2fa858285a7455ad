//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` confirmation body for operations without a payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
