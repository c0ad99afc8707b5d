use std::path::Path;

use realmctl_core::config::RealmctlConfig;
use realmctl_core::token::AccessTokenProvider;
use realmctl_keycloak::client::KeycloakAdminClient;
use realmctl_keycloak::users;
use tracing::info;

/// Run the `update-user-groups` command: ensure a user belongs to each of
/// the named groups.
pub async fn run(config_path: &str, username: &str, groups: &[String]) -> anyhow::Result<()> {
    let config = RealmctlConfig::load(Path::new(config_path))?;
    config.validate()?;

    let provider = AccessTokenProvider::from_config(&config)?;
    let token = provider.access_token().await?;
    let client =
        KeycloakAdminClient::new(&config.keycloak.base_url, &config.keycloak.realm, &token)?;

    info!(username, groups = groups.len(), "Updating user groups");

    let user = users::find_user_by_username(&client, username)
        .await?
        .ok_or_else(|| anyhow::anyhow!("user not found: {username}"))?;
    let id = user
        .id
        .ok_or_else(|| anyhow::anyhow!("user {username} listed without an id"))?;

    let summary = users::update_user_groups(&client, &id, groups).await?;

    println!("Group membership for {username}");
    println!("==============================");
    println!("Added:          {}", summary.added.len());
    println!("Already member: {}", summary.already_member.len());
    println!("Unknown:        {}", summary.unknown.len());
    if !summary.added.is_empty() {
        println!();
        println!("Joined: {}", summary.added.join(", "));
    }
    if !summary.unknown.is_empty() {
        println!();
        println!("No such groups: {}", summary.unknown.join(", "));
    }

    Ok(())
}
