//! Organization operations on the administered realm.

use realmctl_core::error::{RealmctlError, Result};
use realmctl_core::models::OrganizationRepresentation;
use tracing::info;

use crate::client::KeycloakAdminClient;

/// Exact-match lookup by organization name.
pub async fn find_organization_by_name(
    client: &KeycloakAdminClient,
    name: &str,
) -> Result<Option<OrganizationRepresentation>> {
    let matches = client.list_organizations(Some(name), true).await?;
    Ok(matches.into_iter().find(|o| o.name == name))
}

/// Create an enabled organization with the given domains.
///
/// An organization with the same name already existing is an error; there
/// is no idempotent skip here, unlike user creation.
pub async fn create_organization(
    client: &KeycloakAdminClient,
    name: &str,
    domains: &[String],
) -> Result<()> {
    if find_organization_by_name(client, name).await?.is_some() {
        return Err(RealmctlError::Admin(format!(
            "organization {name} already exists"
        )));
    }

    client
        .create_organization(&OrganizationRepresentation::new_enabled(name, domains))
        .await?;
    info!(name = %name, realm = %client.realm(), "Organization created");
    Ok(())
}

/// Add each user id as a member of the organization, one call per user.
///
/// The first failed add aborts and propagates.
pub async fn add_members(
    client: &KeycloakAdminClient,
    org_id: &str,
    user_ids: &[String],
) -> Result<usize> {
    let mut added = 0;

    for user_id in user_ids {
        client.add_organization_member(org_id, user_id).await?;
        added += 1;
    }

    info!(org_id = %org_id, added, "Added organization members");
    Ok(added)
}
