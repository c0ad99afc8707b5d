pub mod add_org_members;
pub mod create_group;
pub mod create_organization;
pub mod create_user;
pub mod delete_group;
pub mod delete_user;
pub mod list_groups;
pub mod list_organizations;
pub mod list_users;
pub mod update_user_groups;
