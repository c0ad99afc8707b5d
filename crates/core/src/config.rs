//! TOML-based configuration system for realmctl.

use crate::error::{RealmctlError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level realmctl configuration, deserialized from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealmctlConfig {
    pub keycloak: KeycloakConfig,
    #[serde(default)]
    pub token_cache: TokenCacheConfig,
}

/// Identity service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeycloakConfig {
    /// Root URL of the identity service, e.g. `https://id.example.com`.
    pub base_url: String,
    /// Realm the service account authenticates against.
    #[serde(default = "default_auth_realm")]
    pub auth_realm: String,
    /// Realm being administered. May differ from `auth_realm`.
    pub realm: String,
    /// Service account credentials. Not validated locally: empty values
    /// surface as an issuance failure from the identity service.
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
}

/// Location of the cached access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenCacheConfig {
    #[serde(default = "default_cache_path")]
    pub path: PathBuf,
}

impl Default for TokenCacheConfig {
    fn default() -> Self {
        Self {
            path: default_cache_path(),
        }
    }
}

fn default_auth_realm() -> String {
    "master".into()
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("/tmp/realmctl-token.json")
}

impl RealmctlConfig {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| RealmctlError::Config(format!("failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Validate the configuration, returning an error for invalid combinations.
    ///
    /// Client credentials are deliberately not checked here; an empty
    /// `client_id` or `client_secret` fails at the token endpoint instead.
    pub fn validate(&self) -> Result<()> {
        if self.keycloak.base_url.is_empty() {
            return Err(RealmctlError::Config(
                "keycloak.base_url must not be empty".into(),
            ));
        }

        if self.keycloak.auth_realm.is_empty() {
            return Err(RealmctlError::Config(
                "keycloak.auth_realm must not be empty".into(),
            ));
        }

        if self.keycloak.realm.is_empty() {
            return Err(RealmctlError::Config(
                "keycloak.realm must not be empty".into(),
            ));
        }

        if self.token_cache.path.as_os_str().is_empty() {
            return Err(RealmctlError::Config(
                "token_cache.path must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Generate a sensible default configuration.
    pub fn generate_default() -> Self {
        Self {
            keycloak: KeycloakConfig {
                base_url: "https://id.example.com".into(),
                auth_realm: default_auth_realm(),
                realm: "example".into(),
                client_id: "realmctl".into(),
                client_secret: String::new(),
            },
            token_cache: TokenCacheConfig::default(),
        }
    }
}
