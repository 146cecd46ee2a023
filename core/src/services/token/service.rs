//! Main token service implementation

use chrono::Duration;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use cg_shared::config::JwtConfig;

use crate::domain::entities::cashier::Cashier;
use crate::domain::entities::token::{Claims, Role, TokenPair, TokenType};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};

/// Service issuing and verifying JWT access and refresh tokens
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Secret, lifetimes and issuer
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    fn access_lifetime(&self) -> Duration {
        Duration::seconds(self.config.access_token_expiry)
    }

    fn refresh_lifetime(&self) -> Duration {
        Duration::seconds(self.config.refresh_token_expiry)
    }

    /// Generates an access/refresh pair for a user
    pub fn generate_user_tokens(&self, user: &User) -> Result<TokenPair, DomainError> {
        let access = Claims::for_user(
            user.id,
            TokenType::Access,
            self.access_lifetime(),
            &self.config.issuer,
        );
        let refresh = Claims::for_user(
            user.id,
            TokenType::Refresh,
            self.refresh_lifetime(),
            &self.config.issuer,
        );
        self.pair(&access, &refresh)
    }

    /// Generates an access/refresh pair for a cashier
    ///
    /// Both tokens carry the cashier's restaurant and display name.
    pub fn generate_cashier_tokens(&self, cashier: &Cashier) -> Result<TokenPair, DomainError> {
        let access = Claims::for_cashier(
            cashier.id,
            cashier.restaurant_id,
            &cashier.name,
            TokenType::Access,
            self.access_lifetime(),
            &self.config.issuer,
        );
        let refresh = Claims::for_cashier(
            cashier.id,
            cashier.restaurant_id,
            &cashier.name,
            TokenType::Refresh,
            self.refresh_lifetime(),
            &self.config.issuer,
        );
        self.pair(&access, &refresh)
    }

    fn pair(&self, access: &Claims, refresh: &Claims) -> Result<TokenPair, DomainError> {
        Ok(TokenPair {
            access: self.encode_jwt(access)?,
            refresh: self.encode_jwt(refresh)?,
            access_expires_in: self.config.access_token_expiry,
            refresh_expires_in: self.config.refresh_token_expiry,
        })
    }

    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Decodes a token and checks it is of the expected type
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - Token is expired, tampered with, malformed or of
    ///   the other type
    pub fn verify_token(&self, token: &str, expected: TokenType) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| DomainError::Token(map_jwt_error(e.kind())))?;

        if token_data.claims.token_type != expected {
            return Err(DomainError::Token(TokenError::WrongTokenType));
        }
        if token_data.claims.subject_id().is_err() {
            return Err(DomainError::Token(TokenError::InvalidClaims));
        }
        if token_data.claims.role == Role::Cashier && token_data.claims.restaurant_uuid().is_none() {
            return Err(DomainError::Token(TokenError::InvalidClaims));
        }

        Ok(token_data.claims)
    }

    /// Verifies an access token
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify_token(token, TokenType::Access)
    }

    /// Exchanges a refresh token for a new access token
    ///
    /// The new token keeps the subject, role and cashier claims of the
    /// refresh token. The refresh token itself stays valid until it expires.
    pub fn refresh_access_token(&self, refresh_token: &str) -> Result<String, DomainError> {
        let refresh = self.verify_token(refresh_token, TokenType::Refresh)?;
        let access = refresh.reissue(TokenType::Access, self.access_lifetime());

        tracing::debug!(
            subject = %access.sub,
            role = ?access.role,
            event = "token_refreshed",
            "Issued access token from refresh token"
        );

        self.encode_jwt(&access)
    }
}

fn map_jwt_error(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::ImmatureSignature => TokenError::TokenNotYetValid,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        ErrorKind::InvalidIssuer | ErrorKind::MissingRequiredClaim(_) => TokenError::InvalidClaims,
        _ => TokenError::InvalidTokenFormat,
    }
}
