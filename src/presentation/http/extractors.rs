// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, presentation::http::state::HttpState};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use sha2::{Digest, Sha256};
use std::fmt;

use super::error::HttpError;

/// Digest of the configured admin bearer token. The plain token is not kept.
#[derive(Clone)]
pub struct AdminToken {
    digest: [u8; 32],
}

impl AdminToken {
    pub fn new(secret: &str) -> Self {
        Self {
            digest: Sha256::digest(secret.as_bytes()).into(),
        }
    }

    /// Constant-time comparison of fixed-size digests.
    pub fn verify(&self, candidate: &str) -> bool {
        let candidate: [u8; 32] = Sha256::digest(candidate.as_bytes()).into();
        candidate
            .iter()
            .zip(self.digest.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminToken(..)")
    }
}

/// Present in a handler's arguments means the request carried the admin token.
#[derive(Debug, Clone, Copy)]
pub struct AdminAuthenticated;

impl<S> FromRequestParts<S> for AdminAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure("application state missing"))
            })?;

        let expected = app_state.admin_token.as_ref().ok_or_else(|| {
            HttpError::from_error(ApplicationError::unauthorized("admin access is disabled"))
        })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized("missing Authorization header"))
            })?;

        if !expected.verify(header.token()) {
            tracing::warn!(path = %parts.uri.path(), "rejected admin token");
            return Err(HttpError::from_error(ApplicationError::unauthorized(
                "invalid admin token",
            )));
        }

        Ok(Self)
    }
}
