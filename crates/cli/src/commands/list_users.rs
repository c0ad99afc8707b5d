use std::path::Path;

use realmctl_core::config::RealmctlConfig;
use realmctl_core::token::AccessTokenProvider;
use realmctl_keycloak::client::KeycloakAdminClient;
use realmctl_keycloak::users;
use tracing::info;

/// Run the `list-users` command: print every user in the realm.
pub async fn run(config_path: &str) -> anyhow::Result<()> {
    let config = RealmctlConfig::load(Path::new(config_path))?;
    config.validate()?;

    let provider = AccessTokenProvider::from_config(&config)?;
    let token = provider.access_token().await?;
    let client =
        KeycloakAdminClient::new(&config.keycloak.base_url, &config.keycloak.realm, &token)?;

    info!(realm = %config.keycloak.realm, "Listing users");

    let users = users::list_all_users(&client).await?;

    println!("Users in realm {}", config.keycloak.realm);
    println!("====================");
    for user in &users {
        let email = user.email.as_deref().unwrap_or("-");
        let disabled = if user.enabled == Some(false) {
            " (disabled)"
        } else {
            ""
        };
        println!("  {:<24} {email}{disabled}", user.username);
    }
    println!();
    println!("Total: {}", users.len());

    Ok(())
}
