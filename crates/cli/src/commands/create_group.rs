use std::path::Path;

use realmctl_core::config::RealmctlConfig;
use realmctl_core::token::AccessTokenProvider;
use realmctl_keycloak::client::KeycloakAdminClient;
use realmctl_keycloak::groups;
use tracing::info;

/// Run the `create-group` command.
pub async fn run(config_path: &str, name: &str) -> anyhow::Result<()> {
    let config = RealmctlConfig::load(Path::new(config_path))?;
    config.validate()?;

    let provider = AccessTokenProvider::from_config(&config)?;
    let token = provider.access_token().await?;
    let client =
        KeycloakAdminClient::new(&config.keycloak.base_url, &config.keycloak.realm, &token)?;

    info!(name, realm = %config.keycloak.realm, "Creating group");

    groups::create_group(&client, name).await?;
    println!("Created group {name}");

    Ok(())
}
