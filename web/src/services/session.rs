//! Session token inspection
//!
//! The backend issues signed JWTs; the client only *reads* them. The payload
//! segment is base64url-decoded without signature verification (the signing
//! key never leaves the server) to recover the user's identity and expiry.
//! A token whose expiry is not in the future never becomes a session.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::Deserialize;
use thiserror::Error;

use shared::dto::auth::ProfileUpdateRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token has expired")]
    Expired,
}

/// Claims carried in the token payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default, rename = "profileImage")]
    pub profile_image: Option<String>,
    /// Expiry, Unix seconds.
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
}

/// In-memory session: the decoded identity plus the raw token it came from.
///
/// Invariant: a `Session` value only exists if its expiry was in the future
/// at the moment it was built.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub profile_image: Option<String>,
    /// Expiry, Unix seconds.
    pub expires_at: i64,
    pub token: String,
}

impl Session {
    /// Decode and validate a token against the given wall-clock time
    /// (milliseconds since the Unix epoch).
    pub fn from_token(token: &str, now_ms: i64) -> Result<Self, TokenError> {
        let claims = decode_token(token)?;
        if claims.exp.saturating_mul(1000) <= now_ms {
            return Err(TokenError::Expired);
        }
        Ok(Session {
            user_id: claims.id,
            username: claims.username,
            email: claims.email,
            profile_image: claims.profile_image,
            expires_at: claims.exp,
            token: token.to_string(),
        })
    }

    /// Shallow-merge submitted profile fields into the session without
    /// touching the token or expiry. Used when a profile update succeeds
    /// but the backend did not issue a fresh token.
    pub fn merge_profile(&mut self, update: &ProfileUpdateRequest) {
        if let Some(username) = &update.username {
            self.username = username.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
    }
}

/// Decode the payload segment of a JWT without verifying its signature.
pub fn decode_token(token: &str) -> Result<Claims, TokenError> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return Err(TokenError::Malformed),
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::Malformed)
}

/// Classification of the persisted token at startup.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredToken {
    /// Nothing persisted.
    Absent,
    /// Undecodable or expired; the caller must clear persistent storage.
    Invalid(TokenError),
    /// Structurally valid with a future expiry.
    Active(Session),
}

/// Evaluate the persisted token against the current wall clock. The store
/// never holds a session known to be expired, so `Invalid` also covers
/// expiry.
pub fn evaluate_stored_token(stored: Option<&str>, now_ms: i64) -> StoredToken {
    match stored {
        None => StoredToken::Absent,
        Some(token) => match Session::from_token(token, now_ms) {
            Ok(session) => StoredToken::Active(session),
            Err(err) => StoredToken::Invalid(err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forge_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.signature")
    }

    fn user_token(exp: i64) -> String {
        forge_token(&format!(
            r#"{{"id":"u1","username":"ada","email":"ada@example.com","exp":{exp},"iat":1}}"#
        ))
    }

    #[test]
    fn test_future_expiry_yields_session() {
        let token = user_token(2_000);
        let session = Session::from_token(&token, 1_999_999).unwrap();
        assert_eq!(session.user_id, "u1");
        assert_eq!(session.username, "ada");
        assert_eq!(session.email, "ada@example.com");
        assert_eq!(session.expires_at, 2_000);
        assert_eq!(session.token, token);
    }

    #[test]
    fn test_past_or_present_expiry_is_rejected() {
        let token = user_token(1_000);
        assert_eq!(
            Session::from_token(&token, 1_000_000),
            Err(TokenError::Expired)
        );
        assert_eq!(
            Session::from_token(&token, 5_000_000),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        assert_eq!(decode_token("").unwrap_err(), TokenError::Malformed);
        assert_eq!(decode_token("a.b").unwrap_err(), TokenError::Malformed);
        assert_eq!(decode_token("a.b.c.d").unwrap_err(), TokenError::Malformed);
        assert_eq!(
            decode_token("x.not-base64!.y").unwrap_err(),
            TokenError::Malformed
        );
        let not_json = forge_token("plain text");
        assert_eq!(decode_token(&not_json).unwrap_err(), TokenError::Malformed);
    }

    #[test]
    fn test_mongo_style_id_alias() {
        let token = forge_token(
            r#"{"_id":"64f1c09e","username":"ada","email":"ada@example.com","exp":2000}"#,
        );
        let claims = decode_token(&token).unwrap();
        assert_eq!(claims.id, "64f1c09e");
        assert_eq!(claims.iat, None);
    }

    #[test]
    fn test_evaluate_stored_token() {
        assert_eq!(evaluate_stored_token(None, 0), StoredToken::Absent);

        let expired = user_token(10);
        assert_eq!(
            evaluate_stored_token(Some(&expired), 1_000_000),
            StoredToken::Invalid(TokenError::Expired)
        );

        assert_eq!(
            evaluate_stored_token(Some("garbage"), 0),
            StoredToken::Invalid(TokenError::Malformed)
        );

        let live = user_token(2_000);
        match evaluate_stored_token(Some(&live), 1_000_000) {
            StoredToken::Active(session) => assert_eq!(session.username, "ada"),
            other => panic!("expected active session, got {other:?}"),
        }
    }

    #[test]
    fn test_merge_profile_preserves_token_and_expiry() {
        let token = user_token(2_000);
        let mut session = Session::from_token(&token, 0).unwrap();
        session.merge_profile(&ProfileUpdateRequest {
            username: Some("grace".to_string()),
            ..Default::default()
        });
        assert_eq!(session.username, "grace");
        assert_eq!(session.email, "ada@example.com");
        assert_eq!(session.expires_at, 2_000);
        assert_eq!(session.token, token);
    }
}
