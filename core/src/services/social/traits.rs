//! Provider abstraction for social login.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Supported identity providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Facebook => "facebook",
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for provider names outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown social provider: {0}")]
pub struct UnknownProvider(pub String);

impl FromStr for SocialProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Self::Google),
            "facebook" => Ok(Self::Facebook),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}

/// Profile fields returned by a provider for a valid access token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialProfile {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Failure modes when talking to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SocialFetchError {
    /// The provider rejected the access token.
    #[error("access token rejected by provider")]
    InvalidToken,

    /// The provider responded with something unusable.
    #[error("provider error: {0}")]
    Provider(String),
}

/// Resolves a provider access token into a profile.
#[async_trait]
pub trait SocialProfileFetcher: Send + Sync {
    async fn fetch_profile(
        &self,
        provider: SocialProvider,
        access_token: &str,
    ) -> Result<SocialProfile, SocialFetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_parses_known_names() {
        assert_eq!("google".parse::<SocialProvider>().unwrap(), SocialProvider::Google);
        assert_eq!("facebook".parse::<SocialProvider>().unwrap(), SocialProvider::Facebook);
        assert!("github".parse::<SocialProvider>().is_err());
    }

    #[test]
    fn provider_display_matches_wire_name() {
        assert_eq!(SocialProvider::Google.to_string(), "google");
        assert_eq!(SocialProvider::Facebook.to_string(), "facebook");
    }
}
