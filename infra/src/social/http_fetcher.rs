//! Provider profile lookup using each provider's userinfo endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use ob_core::services::social::{SocialFetchError, SocialProfile, SocialProfileFetcher, SocialProvider};

const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";
const FACEBOOK_USERINFO_URL: &str = "https://graph.facebook.com/me";

/// Fetches profiles from Google and Facebook with a bearer access token.
pub struct HttpProfileFetcher {
    client: Client,
}

#[derive(Deserialize)]
struct GoogleUserInfo {
    email: String,
    #[serde(default)]
    given_name: String,
    #[serde(default)]
    family_name: String,
}

#[derive(Deserialize)]
struct FacebookUserInfo {
    email: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
}

impl HttpProfileFetcher {
    pub fn new() -> Result<Self, SocialFetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| SocialFetchError::Provider(e.to_string()))?;

        Ok(Self { client })
    }

    async fn fetch_google(&self, access_token: &str) -> Result<SocialProfile, SocialFetchError> {
        let response = self
            .client
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| SocialFetchError::Provider(e.to_string()))?;

        let info: GoogleUserInfo = decode_userinfo(response).await?;
        Ok(SocialProfile {
            email: info.email,
            first_name: info.given_name,
            last_name: info.family_name,
        })
    }

    async fn fetch_facebook(&self, access_token: &str) -> Result<SocialProfile, SocialFetchError> {
        let response = self
            .client
            .get(FACEBOOK_USERINFO_URL)
            .query(&[
                ("fields", "email,first_name,last_name"),
                ("access_token", access_token),
            ])
            .send()
            .await
            .map_err(|e| SocialFetchError::Provider(e.to_string()))?;

        let info: FacebookUserInfo = decode_userinfo(response).await?;
        Ok(SocialProfile {
            email: info.email,
            first_name: info.first_name,
            last_name: info.last_name,
        })
    }
}

async fn decode_userinfo<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, SocialFetchError> {
    match response.status() {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SocialFetchError::InvalidToken),
        status if !status.is_success() => Err(SocialFetchError::Provider(format!(
            "userinfo endpoint returned {}",
            status
        ))),
        _ => response
            .json::<T>()
            .await
            .map_err(|e| SocialFetchError::Provider(format!("malformed userinfo body: {}", e))),
    }
}

#[async_trait]
impl SocialProfileFetcher for HttpProfileFetcher {
    async fn fetch_profile(
        &self,
        provider: SocialProvider,
        access_token: &str,
    ) -> Result<SocialProfile, SocialFetchError> {
        let profile = match provider {
            SocialProvider::Google => self.fetch_google(access_token).await?,
            SocialProvider::Facebook => self.fetch_facebook(access_token).await?,
        };

        if profile.email.is_empty() {
            return Err(SocialFetchError::Provider(
                "provider returned no email address".to_string(),
            ));
        }

        Ok(profile)
    }
}
