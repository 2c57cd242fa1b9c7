use std::fmt;

use serde::Deserialize;
use zeroize::Zeroize;
use zeroize::ZeroizeOnDrop;

/// Owned sensitive string (raw password, password digest, signing secret).
///
/// The buffer is wiped on drop and `Debug` never prints the contents.
/// Deserialize only: it can be read from a request body but never written
/// into a response.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop, Deserialize)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
    /// Wrap a sensitive value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Borrow the raw value.
    ///
    /// Callers must not log or persist the returned slice anywhere other
    /// than the store it is meant for.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}
