use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid {entity} identifier: {id:?}")]
    InvalidIdentifier { entity: &'static str, id: String },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// One human-readable message per violated field or rule.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

