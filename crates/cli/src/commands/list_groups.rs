use std::path::Path;

use realmctl_core::config::RealmctlConfig;
use realmctl_core::token::AccessTokenProvider;
use realmctl_keycloak::client::KeycloakAdminClient;
use realmctl_keycloak::groups;
use tracing::info;

/// Run the `list-groups` command.
pub async fn run(config_path: &str, search: Option<&str>) -> anyhow::Result<()> {
    let config = RealmctlConfig::load(Path::new(config_path))?;
    config.validate()?;

    let provider = AccessTokenProvider::from_config(&config)?;
    let token = provider.access_token().await?;
    let client =
        KeycloakAdminClient::new(&config.keycloak.base_url, &config.keycloak.realm, &token)?;

    info!(realm = %config.keycloak.realm, "Listing groups");

    let found = match search {
        Some(needle) => client.list_groups(Some(needle), None, None).await?,
        None => groups::list_all_groups(&client).await?,
    };

    println!("Groups in realm {}", config.keycloak.realm);
    println!("=================================");
    for group in &found {
        let path = group.path.as_deref().unwrap_or("-");
        println!("{:<24} {}", group.name, path);
    }
    println!();
    println!("Total: {}", found.len());

    Ok(())
}
