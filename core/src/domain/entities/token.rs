//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who a token was issued to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Customer, restaurant admin or superuser
    User,
    /// Cashier signed in with a PIN
    Cashier,
}

/// Distinguishes short-lived access tokens from refresh tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID or cashier ID)
    pub sub: String,

    /// Access or refresh
    pub token_type: TokenType,

    /// Role of the subject
    pub role: Role,

    /// Restaurant the cashier works at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<String>,

    /// Cashier display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    fn base(sub: String, role: Role, token_type: TokenType, lifetime: Duration, issuer: &str) -> Self {
        let now = Utc::now();
        Self {
            sub,
            token_type,
            role,
            restaurant_id: None,
            name: None,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Claims for a user token
    pub fn for_user(user_id: Uuid, token_type: TokenType, lifetime: Duration, issuer: &str) -> Self {
        Self::base(user_id.to_string(), Role::User, token_type, lifetime, issuer)
    }

    /// Claims for a cashier token carrying the restaurant and display name
    pub fn for_cashier(
        cashier_id: Uuid,
        restaurant_id: Uuid,
        name: &str,
        token_type: TokenType,
        lifetime: Duration,
        issuer: &str,
    ) -> Self {
        let mut claims = Self::base(cashier_id.to_string(), Role::Cashier, token_type, lifetime, issuer);
        claims.restaurant_id = Some(restaurant_id.to_string());
        claims.name = Some(name.to_string());
        claims
    }

    /// Fresh claims for the same subject with a new type and lifetime
    pub fn reissue(&self, token_type: TokenType, lifetime: Duration) -> Self {
        let mut claims = Self::base(self.sub.clone(), self.role, token_type, lifetime, &self.iss);
        claims.restaurant_id = self.restaurant_id.clone();
        claims.name = self.name.clone();
        claims
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Parses the subject as a UUID
    pub fn subject_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }

    /// Parses the restaurant claim of a cashier token
    pub fn restaurant_uuid(&self) -> Option<Uuid> {
        self.restaurant_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok())
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access: String,

    /// JWT refresh token
    pub refresh: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}
