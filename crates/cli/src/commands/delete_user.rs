use std::path::Path;

use realmctl_core::config::RealmctlConfig;
use realmctl_core::token::AccessTokenProvider;
use realmctl_keycloak::client::KeycloakAdminClient;
use realmctl_keycloak::users;
use tracing::info;

/// Run the `delete-user` command: remove an account by username.
pub async fn run(config_path: &str, username: &str) -> anyhow::Result<()> {
    let config = RealmctlConfig::load(Path::new(config_path))?;
    config.validate()?;

    let provider = AccessTokenProvider::from_config(&config)?;
    let token = provider.access_token().await?;
    let client =
        KeycloakAdminClient::new(&config.keycloak.base_url, &config.keycloak.realm, &token)?;

    info!(username, realm = %config.keycloak.realm, "Deleting user");

    users::delete_user_by_name(&client, username).await?;
    println!("Deleted user {username}");

    Ok(())
}
