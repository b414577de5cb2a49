// errors.rs
use thiserror::Error;

/// Errors raised while routing or rendering a request.
/// Catalog fetch failures never reach this type; they are logged and the
/// page renders whatever catalog is currently held.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::InternalError => 500,
        }
    }
}
