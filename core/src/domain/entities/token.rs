//! JWT claims for session tokens.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT issuer
pub const JWT_ISSUER: &str = "onboardly";

/// JWT audience
pub const JWT_AUDIENCE: &str = "onboardly-api";

/// Claims structure for the session JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Account email
    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID, unique per issued token; revocation is keyed on it
    pub jti: String,
}

impl Claims {
    /// Creates claims for a session token valid for `expiry_minutes`.
    pub fn new_session(user_id: Uuid, email: &str, expiry_minutes: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::minutes(expiry_minutes);

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Expiration instant as a `DateTime`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_claims_carry_identity() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_session(user_id, "a@x.com", 60);

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.iss, JWT_ISSUER);
        assert_eq!(claims.aud, JWT_AUDIENCE);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn each_token_gets_a_fresh_jti() {
        let user_id = Uuid::new_v4();
        let a = Claims::new_session(user_id, "a@x.com", 60);
        let b = Claims::new_session(user_id, "a@x.com", 60);
        assert_ne!(a.jti, b.jti);
    }
}
