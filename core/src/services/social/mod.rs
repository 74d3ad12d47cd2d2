//! Social login: exchanging a provider access token for a session.

mod service;
mod traits;

pub use service::SocialLoginService;
pub use traits::{SocialFetchError, SocialProfile, SocialProfileFetcher, SocialProvider};
