//! # Admin Authorization
//!
//! The core stores perform no authentication - admin gating is a
//! gateway concern, injected at the boundary so it can be swapped for a
//! real capability system without touching catalog or registry code.
//!
//! ## Current Scope
//! A single shared static secret, sent in the `x-admin-token` header
//! and compared case-sensitively. No hashing, no expiry: this guards a
//! back-office form, not an internet login.

use axum::http::HeaderMap;

use crate::error::ApiError;

/// Header carrying the admin secret.
pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Authorization check for admin operations (add spice, edit prices).
///
/// Trait object so the gateway can be wired with a different policy in
/// tests or future deployments.
pub trait AdminGate: Send + Sync + 'static {
    /// Returns true when the presented token authorizes admin actions.
    fn authorize(&self, token: Option<&str>) -> bool;
}

/// Shared static secret, compared exactly (case-sensitive).
#[derive(Debug, Clone)]
pub struct StaticToken {
    secret: String,
}

impl StaticToken {
    pub fn new(secret: impl Into<String>) -> Self {
        StaticToken {
            secret: secret.into(),
        }
    }
}

impl AdminGate for StaticToken {
    fn authorize(&self, token: Option<&str>) -> bool {
        token == Some(self.secret.as_str())
    }
}

/// Rejects the request unless the admin header passes the gate.
pub fn require_admin(gate: &dyn AdminGate, headers: &HeaderMap) -> Result<(), ApiError> {
    let token = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());
    if gate.authorize(token) {
        Ok(())
    } else {
        Err(ApiError::unauthorized())
    }
}
