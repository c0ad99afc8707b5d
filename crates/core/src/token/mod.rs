//! Access token lifecycle: validation, caching, and issuance.
//!
//! Every administrative call authenticates with a bearer token obtained from
//! [`AccessTokenProvider::access_token`]. The provider serves the cached
//! credential while it is still fresh and runs a client-credentials exchange
//! otherwise, persisting the replacement before handing it out.

pub mod cache;
pub mod claims;
pub mod issuer;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RealmctlConfig;
use crate::error::Result;

pub use cache::TokenCache;
pub use issuer::TokenIssuer;

/// A credential as returned by the token endpoint and stored in the cache.
///
/// `expires_in` is the issuer's lifetime hint at issuance time and is
/// informational only; freshness decisions read the `exp` claim inside
/// `access_token`, which stays meaningful across process restarts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CredentialRecord {
    pub access_token: String,
    /// Round-tripped through the cache but never used for renewal; renewal
    /// is always a fresh client-credentials exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: u64,
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
}

/// Serves access tokens for administrative calls.
pub struct AccessTokenProvider {
    cache: TokenCache,
    issuer: TokenIssuer,
}

impl AccessTokenProvider {
    pub fn new(cache: TokenCache, issuer: TokenIssuer) -> Self {
        Self { cache, issuer }
    }

    /// Build a provider from the `[keycloak]` and `[token_cache]` config sections.
    pub fn from_config(config: &RealmctlConfig) -> Result<Self> {
        let cache = TokenCache::new(&config.token_cache.path);
        let issuer = TokenIssuer::new(
            &config.keycloak.base_url,
            &config.keycloak.auth_realm,
            &config.keycloak.client_id,
            &config.keycloak.client_secret,
        )?;
        Ok(Self::new(cache, issuer))
    }

    /// Return a bearer token that was not yet expired at the moment of the check.
    ///
    /// A fresh cached credential is served without touching the network.
    /// Otherwise a new credential is issued and stored before its token is
    /// returned. Issuance failures propagate and leave the cache untouched;
    /// a cache file that exists but cannot be parsed is an error, not a miss.
    pub async fn access_token(&self) -> Result<String> {
        if let Some(record) = self.cache.load().await? {
            if claims::is_fresh(&record) {
                debug!("Serving cached access token");
                return Ok(record.access_token);
            }
            debug!("Cached access token expired, re-issuing");
        } else {
            debug!("No cached access token, issuing");
        }

        let record = self.issuer.issue().await?;
        self.cache.store(&record).await?;
        Ok(record.access_token)
    }
}
