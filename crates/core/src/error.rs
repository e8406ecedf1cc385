/// Domain-level failures raised before or around a store call.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Client-supplied input is missing or malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The endpoint does not accept the request method.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}
