use thiserror::Error;

pub mod gitlab;
pub mod secret;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unexpected response status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Request failed: {0}")]
    Transport(anyhow::Error),
    #[error("Invalid response: {0}")]
    Decode(anyhow::Error),
    #[error("Secret '{name}' is not available: {reason}")]
    Secret { name: String, reason: String },
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
