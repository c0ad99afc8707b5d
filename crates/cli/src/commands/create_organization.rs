use std::path::Path;

use realmctl_core::config::RealmctlConfig;
use realmctl_core::token::AccessTokenProvider;
use realmctl_keycloak::client::KeycloakAdminClient;
use realmctl_keycloak::organizations;
use tracing::info;

/// Run the `create-organization` command.
pub async fn run(config_path: &str, name: &str, domains: &[String]) -> anyhow::Result<()> {
    let config = RealmctlConfig::load(Path::new(config_path))?;
    config.validate()?;

    let provider = AccessTokenProvider::from_config(&config)?;
    let token = provider.access_token().await?;
    let client =
        KeycloakAdminClient::new(&config.keycloak.base_url, &config.keycloak.realm, &token)?;

    info!(name, domains = domains.len(), "Creating organization");

    organizations::create_organization(&client, name, domains).await?;
    println!("Created organization {name}");

    Ok(())
}
