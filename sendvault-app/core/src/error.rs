use thiserror::Error;

#[derive(Error, Debug)]
pub enum SendVaultError {
    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("Decryption error: {0}")]
    Decryption(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Send not found: {0}")]
    SendNotFound(String),

    #[error("Send has no identifier")]
    MissingId,

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Channel closed")]
    ChannelClosed,
}

impl SendVaultError {
    /// Whether the user can reasonably retry the operation that produced this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Service(_))
    }
}

impl serde::Serialize for SendVaultError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SendVaultError>;
