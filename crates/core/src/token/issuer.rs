//! Client-credentials token issuance.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use super::CredentialRecord;
use crate::error::{RealmctlError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Exchanges service-account credentials for an access token at the
/// authentication realm's OpenID Connect token endpoint.
pub struct TokenIssuer {
    token_url: String,
    client_id: String,
    client_secret: String,
    http: Client,
}

impl TokenIssuer {
    /// Build an issuer for
    /// `{base_url}/realms/{auth_realm}/protocol/openid-connect/token`.
    pub fn new(
        base_url: &str,
        auth_realm: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Self> {
        let token_url = format!(
            "{}/realms/{auth_realm}/protocol/openid-connect/token",
            base_url.trim_end_matches('/')
        );
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            token_url,
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            http,
        })
    }

    pub fn token_url(&self) -> &str {
        &self.token_url
    }

    /// Run one client-credentials exchange.
    ///
    /// No retries: a non-success status becomes [`RealmctlError::Issuance`]
    /// with the response body attached.
    pub async fn issue(&self) -> Result<CredentialRecord> {
        debug!(url = %self.token_url, client_id = %self.client_id, "Requesting access token");

        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Token issuance failed");
            return Err(RealmctlError::Issuance { status, body });
        }

        let record: CredentialRecord = response.json().await.map_err(|e| {
            RealmctlError::Serialization(format!("failed to parse token response: {e}"))
        })?;

        debug!("Access token issued");
        Ok(record)
    }
}
