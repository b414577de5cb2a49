use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Catalog API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
