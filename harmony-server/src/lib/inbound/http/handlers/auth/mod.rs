use serde::Serialize;

use crate::domain::auth::models::TokenPair;

pub mod login;
pub mod refresh;
pub mod register;

pub use login::login;
pub use refresh::refresh;
pub use register::register;

/// Token pair as returned by login and refresh.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct TokenPairData {
    pub access_token: String,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenPairData {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}
