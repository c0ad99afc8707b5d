//! Typed reqwest wrapper for the Keycloak Admin REST API.

use std::time::Duration;

use realmctl_core::error::{RealmctlError, Result};
use realmctl_core::models::{GroupRepresentation, OrganizationRepresentation, UserRepresentation};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Query parameters for user listings.
#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub username: Option<String>,
    pub email: Option<String>,
    /// Zero-based offset of the first result.
    pub first: Option<u32>,
    pub max: Option<u32>,
    /// Match `username`/`email` exactly instead of by substring.
    pub exact: bool,
    pub brief_representation: Option<bool>,
}

/// HTTP client for Admin REST operations on a single realm.
pub struct KeycloakAdminClient {
    http: reqwest::Client,
    base_url: String,
    realm: String,
    access_token: String,
}

impl KeycloakAdminClient {
    /// Create a client for `{base_url}/admin/realms/{realm}` with the given
    /// bearer token.
    pub fn new(base_url: &str, realm: &str, access_token: &str) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            realm: realm.to_string(),
            access_token: access_token.to_string(),
        })
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    fn users_url(&self) -> String {
        format!("{}/admin/realms/{}/users", self.base_url, self.realm)
    }

    fn user_url(&self, user_id: &str) -> String {
        format!("{}/admin/realms/{}/users/{user_id}", self.base_url, self.realm)
    }

    fn user_groups_url(&self, user_id: &str) -> String {
        format!(
            "{}/admin/realms/{}/users/{user_id}/groups",
            self.base_url, self.realm
        )
    }

    fn user_group_url(&self, user_id: &str, group_id: &str) -> String {
        format!(
            "{}/admin/realms/{}/users/{user_id}/groups/{group_id}",
            self.base_url, self.realm
        )
    }

    fn groups_url(&self) -> String {
        format!("{}/admin/realms/{}/groups", self.base_url, self.realm)
    }

    fn group_url(&self, group_id: &str) -> String {
        format!(
            "{}/admin/realms/{}/groups/{group_id}",
            self.base_url, self.realm
        )
    }

    fn organizations_url(&self) -> String {
        format!("{}/admin/realms/{}/organizations", self.base_url, self.realm)
    }

    fn organization_members_url(&self, org_id: &str) -> String {
        format!(
            "{}/admin/realms/{}/organizations/{org_id}/members",
            self.base_url, self.realm
        )
    }

    /// List users matching the query.
    pub async fn list_users(&self, query: &UserQuery) -> Result<Vec<UserRepresentation>> {
        let mut req = self
            .http
            .get(self.users_url())
            .bearer_auth(&self.access_token);

        if let Some(ref username) = query.username {
            req = req.query(&[("username", username.as_str())]);
        }
        if let Some(ref email) = query.email {
            req = req.query(&[("email", email.as_str())]);
        }
        if let Some(first) = query.first {
            req = req.query(&[("first", first)]);
        }
        if let Some(max) = query.max {
            req = req.query(&[("max", max)]);
        }
        if query.exact {
            req = req.query(&[("exact", true)]);
        }
        if let Some(brief) = query.brief_representation {
            req = req.query(&[("briefRepresentation", brief)]);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| RealmctlError::Admin(format!("list users request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RealmctlError::Admin(format!(
                "list users failed ({status}): {body}"
            )));
        }

        resp.json::<Vec<UserRepresentation>>()
            .await
            .map_err(|e| RealmctlError::Admin(format!("list users parse failed: {e}")))
    }

    /// Create a user account. The server derives the id.
    pub async fn create_user(&self, user: &UserRepresentation) -> Result<()> {
        let resp = self
            .http
            .post(self.users_url())
            .bearer_auth(&self.access_token)
            .json(user)
            .send()
            .await
            .map_err(|e| RealmctlError::Admin(format!("create user request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RealmctlError::Admin(format!(
                "create user failed ({status}): {body}"
            )));
        }

        Ok(())
    }

    /// Delete a user account by id.
    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(self.user_url(user_id))
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| RealmctlError::Admin(format!("delete user request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RealmctlError::Admin(format!(
                "delete user failed ({status}): {body}"
            )));
        }

        Ok(())
    }

    /// List the groups a user belongs to.
    pub async fn list_user_groups(&self, user_id: &str) -> Result<Vec<GroupRepresentation>> {
        let resp = self
            .http
            .get(self.user_groups_url(user_id))
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| RealmctlError::Admin(format!("list user groups request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RealmctlError::Admin(format!(
                "list user groups failed ({status}): {body}"
            )));
        }

        resp.json::<Vec<GroupRepresentation>>()
            .await
            .map_err(|e| RealmctlError::Admin(format!("list user groups parse failed: {e}")))
    }

    /// Add a user to a group. Idempotent on the server side.
    pub async fn add_user_to_group(&self, user_id: &str, group_id: &str) -> Result<()> {
        let resp = self
            .http
            .put(self.user_group_url(user_id, group_id))
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| RealmctlError::Admin(format!("add user to group request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RealmctlError::Admin(format!(
                "add user to group failed ({status}): {body}"
            )));
        }

        Ok(())
    }

    /// List top-level groups, optionally filtered by a substring search.
    pub async fn list_groups(
        &self,
        search: Option<&str>,
        first: Option<u32>,
        max: Option<u32>,
    ) -> Result<Vec<GroupRepresentation>> {
        let mut req = self
            .http
            .get(self.groups_url())
            .bearer_auth(&self.access_token);

        if let Some(search) = search {
            req = req.query(&[("search", search)]);
        }
        if let Some(first) = first {
            req = req.query(&[("first", first)]);
        }
        if let Some(max) = max {
            req = req.query(&[("max", max)]);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| RealmctlError::Admin(format!("list groups request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RealmctlError::Admin(format!(
                "list groups failed ({status}): {body}"
            )));
        }

        resp.json::<Vec<GroupRepresentation>>()
            .await
            .map_err(|e| RealmctlError::Admin(format!("list groups parse failed: {e}")))
    }

    /// Create a top-level group.
    pub async fn create_group(&self, group: &GroupRepresentation) -> Result<()> {
        let resp = self
            .http
            .post(self.groups_url())
            .bearer_auth(&self.access_token)
            .json(group)
            .send()
            .await
            .map_err(|e| RealmctlError::Admin(format!("create group request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RealmctlError::Admin(format!(
                "create group failed ({status}): {body}"
            )));
        }

        Ok(())
    }

    /// Delete a group by id.
    pub async fn delete_group(&self, group_id: &str) -> Result<()> {
        let resp = self
            .http
            .delete(self.group_url(group_id))
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| RealmctlError::Admin(format!("delete group request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RealmctlError::Admin(format!(
                "delete group failed ({status}): {body}"
            )));
        }

        Ok(())
    }

    /// List organizations, optionally filtered by name.
    pub async fn list_organizations(
        &self,
        search: Option<&str>,
        exact: bool,
    ) -> Result<Vec<OrganizationRepresentation>> {
        let mut req = self
            .http
            .get(self.organizations_url())
            .bearer_auth(&self.access_token);

        if let Some(search) = search {
            req = req.query(&[("search", search)]);
        }
        if exact {
            req = req.query(&[("exact", true)]);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| RealmctlError::Admin(format!("list organizations request failed: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RealmctlError::Admin(format!(
                "list organizations failed ({status}): {body}"
            )));
        }

        resp.json::<Vec<OrganizationRepresentation>>()
            .await
            .map_err(|e| RealmctlError::Admin(format!("list organizations parse failed: {e}")))
    }

    /// Create an organization.
    pub async fn create_organization(&self, org: &OrganizationRepresentation) -> Result<()> {
        let resp = self
            .http
            .post(self.organizations_url())
            .bearer_auth(&self.access_token)
            .json(org)
            .send()
            .await
            .map_err(|e| {
                RealmctlError::Admin(format!("create organization request failed: {e}"))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RealmctlError::Admin(format!(
                "create organization failed ({status}): {body}"
            )));
        }

        Ok(())
    }

    /// Add one user to an organization. The member endpoint takes the raw
    /// user id as the request body, one user per call.
    pub async fn add_organization_member(&self, org_id: &str, user_id: &str) -> Result<()> {
        let resp = self
            .http
            .post(self.organization_members_url(org_id))
            .bearer_auth(&self.access_token)
            .body(user_id.to_string())
            .send()
            .await
            .map_err(|e| {
                RealmctlError::Admin(format!("add organization member request failed: {e}"))
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(RealmctlError::Admin(format!(
                "add organization member failed ({status}): {body}"
            )));
        }

        Ok(())
    }
}
