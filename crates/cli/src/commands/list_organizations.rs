use std::path::Path;

use realmctl_core::config::RealmctlConfig;
use realmctl_core::token::AccessTokenProvider;
use realmctl_keycloak::client::KeycloakAdminClient;
use tracing::info;

/// Run the `list-organizations` command.
pub async fn run(config_path: &str) -> anyhow::Result<()> {
    let config = RealmctlConfig::load(Path::new(config_path))?;
    config.validate()?;

    let provider = AccessTokenProvider::from_config(&config)?;
    let token = provider.access_token().await?;
    let client =
        KeycloakAdminClient::new(&config.keycloak.base_url, &config.keycloak.realm, &token)?;

    info!(realm = %config.keycloak.realm, "Listing organizations");

    let orgs = client.list_organizations(None, false).await?;

    println!("Organizations in realm {}", config.keycloak.realm);
    println!("========================================");
    for org in &orgs {
        let domains = org
            .domains
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let domains = if domains.is_empty() {
            "-".to_string()
        } else {
            domains
        };
        println!("{:<24} {}", org.name, domains);
    }
    println!();
    println!("Total: {}", orgs.len());

    Ok(())
}
