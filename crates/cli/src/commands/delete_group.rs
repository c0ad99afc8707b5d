use std::path::Path;

use realmctl_core::config::RealmctlConfig;
use realmctl_core::token::AccessTokenProvider;
use realmctl_keycloak::client::KeycloakAdminClient;
use realmctl_keycloak::groups;
use tracing::info;

/// Run the `delete-group` command. Deletes either a single named group or,
/// with `--all`, every group in the realm.
pub async fn run(config_path: &str, name: Option<&str>, all: bool) -> anyhow::Result<()> {
    if name.is_none() && !all {
        anyhow::bail!("specify a group name or pass --all");
    }

    let config = RealmctlConfig::load(Path::new(config_path))?;
    config.validate()?;

    let provider = AccessTokenProvider::from_config(&config)?;
    let token = provider.access_token().await?;
    let client =
        KeycloakAdminClient::new(&config.keycloak.base_url, &config.keycloak.realm, &token)?;

    if all {
        info!(realm = %config.keycloak.realm, "Deleting all groups");
        let deleted = groups::delete_all_groups(&client).await?;
        println!("Deleted {deleted} groups");
        return Ok(());
    }

    // Guarded above.
    let name = name.unwrap_or_default();
    info!(name, realm = %config.keycloak.realm, "Deleting group");
    groups::delete_group_by_name(&client, name).await?;
    println!("Deleted group {name}");

    Ok(())
}
