//! User operations on the administered realm.

use std::collections::{HashMap, HashSet};

use realmctl_core::error::{RealmctlError, Result};
use realmctl_core::models::UserRepresentation;
use tracing::{debug, info, warn};

use crate::client::{KeycloakAdminClient, UserQuery};
use crate::groups;

pub(crate) const PAGE_SIZE: u32 = 100;

/// Outcome of an idempotent create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

/// Result of reconciling a user's group memberships.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupUpdateSummary {
    pub added: Vec<String>,
    pub already_member: Vec<String>,
    /// Requested names that match no group in the realm.
    pub unknown: Vec<String>,
}

/// Fetch every user in the realm, one page at a time.
pub async fn list_all_users(client: &KeycloakAdminClient) -> Result<Vec<UserRepresentation>> {
    let mut users = Vec::new();
    let mut first: u32 = 0;

    loop {
        let page = client
            .list_users(&UserQuery {
                first: Some(first),
                max: Some(PAGE_SIZE),
                ..UserQuery::default()
            })
            .await?;
        let page_len = page.len() as u32;
        if page_len == 0 {
            break;
        }
        users.extend(page);
        if page_len < PAGE_SIZE {
            debug!(page_len, "Last page received");
            break;
        }
        first += PAGE_SIZE;
    }

    Ok(users)
}

/// Exact-match lookup by username.
pub async fn find_user_by_username(
    client: &KeycloakAdminClient,
    username: &str,
) -> Result<Option<UserRepresentation>> {
    let matches = client
        .list_users(&UserQuery {
            username: Some(username.to_string()),
            exact: true,
            brief_representation: Some(false),
            ..UserQuery::default()
        })
        .await?;
    Ok(matches.into_iter().next())
}

/// Create `user` unless an account with the same username already exists.
pub async fn create_user_if_absent(
    client: &KeycloakAdminClient,
    user: &UserRepresentation,
) -> Result<CreateOutcome> {
    if find_user_by_username(client, &user.username).await?.is_some() {
        info!(username = %user.username, "User already exists, skipping create");
        return Ok(CreateOutcome::AlreadyExists);
    }

    client.create_user(user).await?;
    info!(username = %user.username, realm = %client.realm(), "User created");
    Ok(CreateOutcome::Created)
}

/// Delete the account with the given username.
///
/// A username that matches no account is [`RealmctlError::NotFound`].
pub async fn delete_user_by_name(client: &KeycloakAdminClient, username: &str) -> Result<()> {
    let user = find_user_by_username(client, username)
        .await?
        .ok_or_else(|| RealmctlError::NotFound(format!("user {username}")))?;

    let id = user
        .id
        .ok_or_else(|| RealmctlError::Admin(format!("user {username} listed without an id")))?;

    client.delete_user(&id).await?;
    info!(username = %username, "User deleted");
    Ok(())
}

/// Ensure the user is a member of every named group.
///
/// Names that match no group in the realm are collected into the summary and
/// logged; they do not fail the rest of the reconciliation.
pub async fn update_user_groups(
    client: &KeycloakAdminClient,
    user_id: &str,
    group_names: &[String],
) -> Result<GroupUpdateSummary> {
    let current: HashSet<String> = client
        .list_user_groups(user_id)
        .await?
        .into_iter()
        .map(|g| g.name)
        .collect();

    let id_by_name: HashMap<String, String> = groups::list_all_groups(client)
        .await?
        .into_iter()
        .filter_map(|g| g.id.map(|id| (g.name, id)))
        .collect();

    let mut summary = GroupUpdateSummary::default();
    for name in group_names {
        if current.contains(name) {
            summary.already_member.push(name.clone());
            continue;
        }
        match id_by_name.get(name) {
            Some(group_id) => {
                client.add_user_to_group(user_id, group_id).await?;
                info!(user_id = %user_id, group = %name, "Added user to group");
                summary.added.push(name.clone());
            }
            None => {
                warn!(group = %name, "No group with this name in the realm");
                summary.unknown.push(name.clone());
            }
        }
    }

    Ok(summary)
}
