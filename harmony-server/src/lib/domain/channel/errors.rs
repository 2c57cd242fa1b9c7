use thiserror::Error;

use crate::domain::channel::models::ChannelId;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChannelIdError {
    #[error("'{0}' is not a valid UUID")]
    InvalidFormat(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChannelNameError {
    #[error("must not be empty")]
    Empty,

    #[error("must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChannelTypeError {
    #[error("expected 'text' or 'voice', got '{0}'")]
    Unknown(String),
}

#[derive(Debug, Clone, Error)]
pub enum ChannelError {
    #[error("Invalid channel id: {0}")]
    InvalidChannelId(#[from] ChannelIdError),

    #[error("Invalid channel name: {0}")]
    InvalidChannelName(#[from] ChannelNameError),

    #[error("Invalid channel type: {0}")]
    InvalidChannelType(#[from] ChannelTypeError),

    #[error("Channel {0} not found")]
    NotFound(ChannelId),

    #[error("Storage failure: {0}")]
    DatabaseError(String),
}
