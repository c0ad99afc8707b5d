use std::path::Path;

use realmctl_core::config::RealmctlConfig;
use realmctl_core::token::AccessTokenProvider;
use realmctl_keycloak::client::KeycloakAdminClient;
use realmctl_keycloak::{organizations, users};
use tracing::info;

/// Run the `add-org-members` command: add each named user to an
/// organization. All usernames are resolved before any membership is
/// created, so a typo fails the whole run instead of half of it.
pub async fn run(config_path: &str, org_name: &str, usernames: &[String]) -> anyhow::Result<()> {
    let config = RealmctlConfig::load(Path::new(config_path))?;
    config.validate()?;

    let provider = AccessTokenProvider::from_config(&config)?;
    let token = provider.access_token().await?;
    let client =
        KeycloakAdminClient::new(&config.keycloak.base_url, &config.keycloak.realm, &token)?;

    info!(org = org_name, users = usernames.len(), "Adding organization members");

    let org = organizations::find_organization_by_name(&client, org_name)
        .await?
        .ok_or_else(|| anyhow::anyhow!("organization not found: {org_name}"))?;
    let org_id = org
        .id
        .ok_or_else(|| anyhow::anyhow!("organization {org_name} listed without an id"))?;

    let mut user_ids = Vec::with_capacity(usernames.len());
    for username in usernames {
        let user = users::find_user_by_username(&client, username)
            .await?
            .ok_or_else(|| anyhow::anyhow!("user not found: {username}"))?;
        let id = user
            .id
            .ok_or_else(|| anyhow::anyhow!("user {username} listed without an id"))?;
        user_ids.push(id);
    }

    let added = organizations::add_members(&client, &org_id, &user_ids).await?;
    println!("Added {added} members to organization {org_name}");

    Ok(())
}
