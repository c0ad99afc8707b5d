use std::path::Path;

use realmctl_core::config::RealmctlConfig;
use realmctl_core::models::UserRepresentation;
use realmctl_core::token::AccessTokenProvider;
use realmctl_keycloak::client::KeycloakAdminClient;
use realmctl_keycloak::users::{self, CreateOutcome};
use tracing::info;

/// Run the `create-user` command: idempotently create an account, then join
/// any requested groups.
pub async fn run(
    config_path: &str,
    username: &str,
    email: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
    groups: &[String],
) -> anyhow::Result<()> {
    let config = RealmctlConfig::load(Path::new(config_path))?;
    config.validate()?;

    let provider = AccessTokenProvider::from_config(&config)?;
    let token = provider.access_token().await?;
    let client =
        KeycloakAdminClient::new(&config.keycloak.base_url, &config.keycloak.realm, &token)?;

    info!(username, realm = %config.keycloak.realm, "Creating user");

    let mut user = UserRepresentation::new_enabled(username, email);
    user.first_name = first_name.map(str::to_string);
    user.last_name = last_name.map(str::to_string);

    match users::create_user_if_absent(&client, &user).await? {
        CreateOutcome::Created => println!("Created user {username}"),
        CreateOutcome::AlreadyExists => {
            println!("User {username} already exists, nothing to create")
        }
    }

    if !groups.is_empty() {
        let created = users::find_user_by_username(&client, username)
            .await?
            .ok_or_else(|| anyhow::anyhow!("user {username} not visible after create"))?;
        let id = created
            .id
            .ok_or_else(|| anyhow::anyhow!("user {username} listed without an id"))?;

        let summary = users::update_user_groups(&client, &id, groups).await?;
        println!(
            "Groups: {} added, {} already member, {} unknown",
            summary.added.len(),
            summary.already_member.len(),
            summary.unknown.len()
        );
        if !summary.unknown.is_empty() {
            println!("Unknown groups: {}", summary.unknown.join(", "));
        }
    }

    Ok(())
}
