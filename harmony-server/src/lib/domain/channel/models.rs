use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::channel::errors::ChannelIdError;
use crate::domain::channel::errors::ChannelNameError;
use crate::domain::channel::errors::ChannelTypeError;

/// Channel unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(pub Uuid);

impl ChannelId {
    /// Generate a new random channel ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a channel ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ChannelIdError> {
        Uuid::parse_str(s)
            .map(ChannelId)
            .map_err(|e| ChannelIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ChannelId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Channel name value object (1-100 characters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelName(String);

impl ChannelName {
    const MAX_LENGTH: usize = 100;

    /// Create a validated channel name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, ChannelNameError> {
        let length = name.chars().count();
        if length == 0 {
            Err(ChannelNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(ChannelNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Kind of conversation a channel carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelType {
    Text,
    Voice,
}

impl ChannelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelType::Text => "text",
            ChannelType::Voice => "voice",
        }
    }

    /// Parse the lowercase wire name.
    ///
    /// # Errors
    /// * `Unknown` - Anything other than `text` or `voice`
    pub fn parse(s: &str) -> Result<Self, ChannelTypeError> {
        match s {
            "text" => Ok(ChannelType::Text),
            "voice" => Ok(ChannelType::Voice),
            other => Err(ChannelTypeError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for ChannelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel aggregate root.
#[derive(Debug, Clone)]
pub struct Channel {
    pub id: ChannelId,
    pub name: ChannelName,
    pub channel_type: ChannelType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Command to create a channel with validated fields
#[derive(Debug)]
pub struct CreateChannelCommand {
    pub name: ChannelName,
    pub channel_type: ChannelType,
}

impl CreateChannelCommand {
    pub fn new(name: ChannelName, channel_type: ChannelType) -> Self {
        Self { name, channel_type }
    }
}
