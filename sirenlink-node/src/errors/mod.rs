use sirenlink_api::identity::{IdentityError, RegistryError};
use sirenlink_api::wire::WireError;

#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error("Settings error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("Sender rejected: {0}")]
    UnknownSender(#[from] RegistryError),

    #[error("Frame rejected: {0}")]
    Wire(#[from] WireError),
}

pub type Result<T> = std::result::Result<T, NodeError>;
