use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("A submission is already in flight")]
    AlreadySubmitting,

    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
