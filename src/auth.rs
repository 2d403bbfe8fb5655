//! SSWS token authentication
//!
//! Okta authenticates API requests with an `Authorization: SSWS <token>`
//! header. The token is resolved from the command line or the environment;
//! whether a missing token is fatal is the caller's decision, not this
//! module's.

use reqwest::header::AUTHORIZATION;
use reqwest::RequestBuilder;

/// Environment variable consulted when no token is passed explicitly
pub const TOKEN_ENV_VAR: &str = "OKTA_API_TOKEN";

/// An Okta SSWS API token
#[derive(Clone, PartialEq, Eq)]
pub struct SswsToken(String);

impl SswsToken {
    /// Create a token from a raw string
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Resolve a token: an explicit value wins, otherwise `OKTA_API_TOKEN`.
    /// Unset or empty sources yield `None`.
    pub fn resolve(explicit: Option<&str>) -> Option<Self> {
        match explicit {
            Some(token) if !token.is_empty() => Some(Self::new(token)),
            _ => Self::from_env(TOKEN_ENV_VAR),
        }
    }

    /// Read a token from an environment variable. Empty counts as absent.
    pub fn from_env(var: &str) -> Option<Self> {
        match std::env::var(var) {
            Ok(value) if !value.is_empty() => Some(Self(value)),
            _ => None,
        }
    }

    /// Decorate a request with the `Authorization: SSWS <token>` header
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.header(AUTHORIZATION, format!("SSWS {}", self.0))
    }
}

// Token values must never reach logs or error messages.
impl std::fmt::Debug for SswsToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SswsToken(***)")
    }
}
