//! Bearer-token verification configuration.
//!
//! Tokens are issued by the external identity provider; this server only
//! verifies them.

use serde::{Deserialize, Serialize};

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC secret used to verify token signatures.
    pub jwt_secret: String,
    /// Expected token issuer. Empty disables issuer validation.
    #[serde(default)]
    pub issuer: String,
    /// Allowed clock skew in seconds when validating expiry.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

fn default_leeway() -> u64 {
    5
}
