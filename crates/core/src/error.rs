#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The id may be a BIGSERIAL key or a client-generated session id,
    /// so it is carried as a string.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
