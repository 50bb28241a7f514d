use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("http request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("invalid token response: {0}")]
    InvalidResponse(String),
}
