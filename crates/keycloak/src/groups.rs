//! Group operations on the administered realm.

use realmctl_core::error::{RealmctlError, Result};
use realmctl_core::models::GroupRepresentation;
use tracing::{debug, info, warn};

use crate::client::KeycloakAdminClient;
use crate::users::PAGE_SIZE;

/// Fetch every top-level group in the realm, one page at a time.
pub async fn list_all_groups(client: &KeycloakAdminClient) -> Result<Vec<GroupRepresentation>> {
    let mut groups = Vec::new();
    let mut first: u32 = 0;

    loop {
        let page = client
            .list_groups(None, Some(first), Some(PAGE_SIZE))
            .await?;
        let page_len = page.len() as u32;
        if page_len == 0 {
            break;
        }
        groups.extend(page);
        if page_len < PAGE_SIZE {
            debug!(page_len, "Last page received");
            break;
        }
        first += PAGE_SIZE;
    }

    Ok(groups)
}

/// Exact-match lookup by group name.
///
/// The server-side `search` filter matches substrings, so the result is
/// narrowed to an exact name match here.
pub async fn find_group_by_name(
    client: &KeycloakAdminClient,
    name: &str,
) -> Result<Option<GroupRepresentation>> {
    let matches = client.list_groups(Some(name), None, None).await?;
    Ok(matches.into_iter().find(|g| g.name == name))
}

/// Create a top-level group with the given name.
///
/// A name the realm already has comes back as a conflict from the server
/// and propagates.
pub async fn create_group(client: &KeycloakAdminClient, name: &str) -> Result<()> {
    client
        .create_group(&GroupRepresentation::named(name))
        .await?;
    info!(name = %name, realm = %client.realm(), "Group created");
    Ok(())
}

/// Delete the group with the given name.
///
/// A name that matches no group is [`RealmctlError::NotFound`].
pub async fn delete_group_by_name(client: &KeycloakAdminClient, name: &str) -> Result<()> {
    let group = find_group_by_name(client, name)
        .await?
        .ok_or_else(|| RealmctlError::NotFound(format!("group {name}")))?;

    let id = group
        .id
        .ok_or_else(|| RealmctlError::Admin(format!("group {name} listed without an id")))?;

    client.delete_group(&id).await?;
    info!(name = %name, "Group deleted");
    Ok(())
}

/// Delete every top-level group in the realm, returning how many went.
///
/// The first failed delete aborts the sweep and propagates.
pub async fn delete_all_groups(client: &KeycloakAdminClient) -> Result<usize> {
    let groups = list_all_groups(client).await?;
    let mut deleted = 0;

    for group in groups {
        let id = match group.id {
            Some(id) => id,
            None => {
                warn!(name = %group.name, "Group listed without an id, skipping");
                continue;
            }
        };
        client.delete_group(&id).await?;
        deleted += 1;
    }

    info!(deleted, realm = %client.realm(), "Deleted all groups");
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, KeycloakAdminClient) {
        let server = MockServer::start().await;
        let client = KeycloakAdminClient::new(&server.uri(), "edu", "test-token").unwrap();
        (server, client)
    }

    #[tokio::test]
    async fn find_group_narrows_substring_matches() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/admin/realms/edu/groups"))
            .and(query_param("search", "teachers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "g1", "name": "teachers"},
                {"id": "g2", "name": "substitute-teachers"}
            ])))
            .mount(&server)
            .await;

        let group = find_group_by_name(&client, "teachers").await.unwrap();
        assert_eq!(group.unwrap().id.as_deref(), Some("g1"));
    }

    #[tokio::test]
    async fn find_group_substring_only_is_none() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/admin/realms/edu/groups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "g2", "name": "substitute-teachers"}
            ])))
            .mount(&server)
            .await;

        let group = find_group_by_name(&client, "teachers").await.unwrap();
        assert!(group.is_none());
    }

    #[tokio::test]
    async fn create_group_propagates_conflict() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/admin/realms/edu/groups"))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_string(r#"{"errorMessage":"Top level group named 'staff' already exists."}"#),
            )
            .mount(&server)
            .await;

        let err = create_group(&client, "staff").await.unwrap_err();
        assert!(err.to_string().contains("409"));
    }

    #[tokio::test]
    async fn delete_group_by_name_deletes_match() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/admin/realms/edu/groups"))
            .and(query_param("search", "staff"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"id": "g9", "name": "staff"}])))
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/admin/realms/edu/groups/g9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        delete_group_by_name(&client, "staff").await.unwrap();
    }

    #[tokio::test]
    async fn delete_group_by_name_missing_is_not_found() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/admin/realms/edu/groups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let err = delete_group_by_name(&client, "ghost").await.unwrap_err();
        assert!(matches!(err, RealmctlError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_all_groups_sweeps_each() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/admin/realms/edu/groups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "g1", "name": "alpha"},
                {"id": "g2", "name": "beta"}
            ])))
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/admin/realms/edu/groups/g1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/admin/realms/edu/groups/g2"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let deleted = delete_all_groups(&client).await.unwrap();
        assert_eq!(deleted, 2);
    }

    #[tokio::test]
    async fn delete_all_groups_aborts_on_failure() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/admin/realms/edu/groups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "g1", "name": "alpha"},
                {"id": "g2", "name": "beta"}
            ])))
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/admin/realms/edu/groups/g1"))
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/admin/realms/edu/groups/g2"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let err = delete_all_groups(&client).await.unwrap_err();
        assert!(err.to_string().contains("403"));
    }
}
