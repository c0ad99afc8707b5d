//! realmctl Keycloak — typed Admin REST client and realm entity operations.
//!
//! This crate wraps the Admin REST API for a single realm: user accounts,
//! groups and membership, and organizations. Every call authenticates with
//! a bearer token obtained from the core crate's access token provider.

pub mod client;
pub mod groups;
pub mod organizations;
pub mod users;
