//! Wire representations for the Admin REST API.

pub mod group;
pub mod organization;
pub mod user;

pub use group::GroupRepresentation;
pub use organization::{OrganizationDomainRepresentation, OrganizationRepresentation};
pub use user::UserRepresentation;
