//! Bearer token issuance and validation.

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Account;
use crate::error::AppError;

/// Default token lifetime in seconds.
pub const DEFAULT_TOKEN_TTL_SECONDS: u64 = 15_000;

/// Claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Number of the account the token is bound to.
    pub account_number: i64,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: u64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: u64,
}

/// Service for issuing and verifying signed bearer tokens.
///
/// Tokens are HS256 JWTs. Verification is stateless: only the signature and
/// the `exp` claim are checked, no session store is consulted. The signing
/// secret is supplied once at construction and never re-read.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_seconds: u64,
    has_secret: bool,
    scoped_to_account: bool,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    ///
    /// - `secret` - HMAC key shared by issuance and validation
    /// - `ttl_seconds` - lifetime of issued tokens
    pub fn new(secret: &str, ttl_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.set_required_spec_claims(&["exp"]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_seconds,
            has_secret: !secret.is_empty(),
            scoped_to_account: false,
        }
    }

    /// Requires tokens to be bound to the account they access.
    ///
    /// See [`Self::authorize`].
    pub fn with_account_scope(mut self, scoped: bool) -> Self {
        self.scoped_to_account = scoped;
        self
    }

    /// Returns whether tokens are scoped to the account they access.
    pub fn is_scoped_to_account(&self) -> bool {
        self.scoped_to_account
    }

    /// Issues a token bound to the account's number.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Signing`] if no secret is configured or encoding fails.
    pub fn issue(&self, account: &Account) -> Result<String, AppError> {
        if !self.has_secret {
            return Err(AppError::signing("token signing secret is not configured"));
        }

        let now = Utc::now().timestamp().max(0) as u64;
        let claims = TokenClaims {
            account_number: account.number,
            iat: now,
            exp: now.saturating_add(self.ttl_seconds),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::signing(format!("failed to sign token: {e}")))
    }

    /// Parses and verifies a token.
    ///
    /// Only HMAC-signed tokens are accepted. A token whose header names any
    /// other algorithm is rejected before its signature is looked at.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidToken`] on malformed input, signature
    /// mismatch, unexpected algorithm, expiry, or a missing secret.
    pub fn validate(&self, token: &str) -> Result<TokenClaims, AppError> {
        if !self.has_secret {
            return Err(AppError::invalid_token("token signing secret is not configured"));
        }

        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "expired".to_string(),
                    ErrorKind::InvalidAlgorithm => "unexpected signing algorithm".to_string(),
                    ErrorKind::InvalidSignature => "signature mismatch".to_string(),
                    _ => format!("malformed token: {e}"),
                };
                AppError::invalid_token(reason)
            })
    }

    /// Checks that validated claims may access `account`.
    ///
    /// When account scoping is disabled every validated token is accepted for
    /// every account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidToken`] if scoping is enabled and the token
    /// is bound to a different account number.
    pub fn authorize(&self, claims: &TokenClaims, account: &Account) -> Result<(), AppError> {
        if self.scoped_to_account && claims.account_number != account.number {
            return Err(AppError::invalid_token(format!(
                "token bound to account number {} used for account {}",
                claims.account_number, account.id
            )));
        }

        Ok(())
    }
}
