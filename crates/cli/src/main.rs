use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "realmctl", about = "Keycloak realm administration client", version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "realmctl.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List every user in the realm
    ListUsers,
    /// Create a user unless the username is already taken
    CreateUser {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        /// Given name
        #[arg(short = 'f', long)]
        first_name: Option<String>,
        /// Family name
        #[arg(short = 'l', long)]
        last_name: Option<String>,
        /// Comma-separated group names to join after creation
        #[arg(long, value_delimiter = ',')]
        groups: Vec<String>,
    },
    /// Delete a user by username
    DeleteUser {
        username: String,
    },
    /// Add a user to the named groups
    UpdateUserGroups {
        username: String,
        /// Comma-separated group names
        #[arg(long, value_delimiter = ',', required = true)]
        groups: Vec<String>,
    },
    /// List groups in the realm
    ListGroups {
        /// Substring filter applied server-side
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a top-level group
    CreateGroup {
        name: String,
    },
    /// Delete one group by name, or every group in the realm
    DeleteGroup {
        name: Option<String>,
        /// Delete every group in the realm
        #[arg(long, conflicts_with = "name")]
        all: bool,
    },
    /// List organizations in the realm
    ListOrganizations,
    /// Create an organization
    CreateOrganization {
        name: String,
        /// Attach an internet domain (repeatable)
        #[arg(long = "domain")]
        domains: Vec<String>,
    },
    /// Add existing users to an organization
    AddOrgMembers {
        /// Organization name
        #[arg(long)]
        org: String,
        /// Comma-separated usernames
        #[arg(long, value_delimiter = ',', required = true)]
        users: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::ListUsers => {
            commands::list_users::run(&cli.config).await?;
        }
        Commands::CreateUser {
            username,
            email,
            first_name,
            last_name,
            groups,
        } => {
            commands::create_user::run(
                &cli.config,
                &username,
                &email,
                first_name.as_deref(),
                last_name.as_deref(),
                &groups,
            )
            .await?;
        }
        Commands::DeleteUser { username } => {
            commands::delete_user::run(&cli.config, &username).await?;
        }
        Commands::UpdateUserGroups { username, groups } => {
            commands::update_user_groups::run(&cli.config, &username, &groups).await?;
        }
        Commands::ListGroups { search } => {
            commands::list_groups::run(&cli.config, search.as_deref()).await?;
        }
        Commands::CreateGroup { name } => {
            commands::create_group::run(&cli.config, &name).await?;
        }
        Commands::DeleteGroup { name, all } => {
            commands::delete_group::run(&cli.config, name.as_deref(), all).await?;
        }
        Commands::ListOrganizations => {
            commands::list_organizations::run(&cli.config).await?;
        }
        Commands::CreateOrganization { name, domains } => {
            commands::create_organization::run(&cli.config, &name, &domains).await?;
        }
        Commands::AddOrgMembers { org, users } => {
            commands::add_org_members::run(&cli.config, &org, &users).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn cli_parse_list_users() {
        let cli = Cli::parse_from(["realmctl", "list-users"]);
        assert_eq!(cli.config, "realmctl.toml");
        assert!(matches!(cli.command, Commands::ListUsers));
    }

    #[test]
    fn cli_parse_custom_config_path() {
        let cli = Cli::parse_from(["realmctl", "--config", "/etc/realmctl.toml", "list-users"]);
        assert_eq!(cli.config, "/etc/realmctl.toml");
    }

    #[test]
    fn cli_parse_create_user_short_flags() {
        let cli = Cli::parse_from([
            "realmctl",
            "create-user",
            "-u",
            "jdoe",
            "-e",
            "jdoe@example.com",
            "-f",
            "Jane",
            "-l",
            "Doe",
        ]);
        match cli.command {
            Commands::CreateUser {
                username,
                email,
                first_name,
                last_name,
                groups,
            } => {
                assert_eq!(username, "jdoe");
                assert_eq!(email, "jdoe@example.com");
                assert_eq!(first_name.as_deref(), Some("Jane"));
                assert_eq!(last_name.as_deref(), Some("Doe"));
                assert!(groups.is_empty());
            }
            _ => panic!("expected CreateUser command"),
        }
    }

    #[test]
    fn cli_parse_create_user_splits_groups() {
        let cli = Cli::parse_from([
            "realmctl",
            "create-user",
            "-u",
            "jdoe",
            "-e",
            "jdoe@example.com",
            "--groups",
            "teachers,staff",
        ]);
        match cli.command {
            Commands::CreateUser { groups, .. } => {
                assert_eq!(groups, vec!["teachers", "staff"]);
            }
            _ => panic!("expected CreateUser command"),
        }
    }

    #[test]
    fn cli_parse_create_user_requires_username() {
        let result = Cli::try_parse_from(["realmctl", "create-user", "-e", "a@b.c"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_delete_user() {
        let cli = Cli::parse_from(["realmctl", "delete-user", "jdoe"]);
        match cli.command {
            Commands::DeleteUser { username } => assert_eq!(username, "jdoe"),
            _ => panic!("expected DeleteUser command"),
        }
    }

    #[test]
    fn cli_parse_update_user_groups() {
        let cli = Cli::parse_from([
            "realmctl",
            "update-user-groups",
            "jdoe",
            "--groups",
            "a,b,c",
        ]);
        match cli.command {
            Commands::UpdateUserGroups { username, groups } => {
                assert_eq!(username, "jdoe");
                assert_eq!(groups, vec!["a", "b", "c"]);
            }
            _ => panic!("expected UpdateUserGroups command"),
        }
    }

    #[test]
    fn cli_parse_update_user_groups_requires_groups() {
        let result = Cli::try_parse_from(["realmctl", "update-user-groups", "jdoe"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_list_groups_search() {
        let cli = Cli::parse_from(["realmctl", "list-groups", "--search", "teach"]);
        match cli.command {
            Commands::ListGroups { search } => assert_eq!(search.as_deref(), Some("teach")),
            _ => panic!("expected ListGroups command"),
        }
    }

    #[test]
    fn cli_parse_delete_group_by_name() {
        let cli = Cli::parse_from(["realmctl", "delete-group", "staff"]);
        match cli.command {
            Commands::DeleteGroup { name, all } => {
                assert_eq!(name.as_deref(), Some("staff"));
                assert!(!all);
            }
            _ => panic!("expected DeleteGroup command"),
        }
    }

    #[test]
    fn cli_parse_delete_group_all() {
        let cli = Cli::parse_from(["realmctl", "delete-group", "--all"]);
        match cli.command {
            Commands::DeleteGroup { name, all } => {
                assert!(name.is_none());
                assert!(all);
            }
            _ => panic!("expected DeleteGroup command"),
        }
    }

    #[test]
    fn cli_parse_delete_group_name_conflicts_with_all() {
        let result = Cli::try_parse_from(["realmctl", "delete-group", "staff", "--all"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_create_organization_domains() {
        let cli = Cli::parse_from([
            "realmctl",
            "create-organization",
            "Acme Corp",
            "--domain",
            "acme.example",
            "--domain",
            "acme.test",
        ]);
        match cli.command {
            Commands::CreateOrganization { name, domains } => {
                assert_eq!(name, "Acme Corp");
                assert_eq!(domains, vec!["acme.example", "acme.test"]);
            }
            _ => panic!("expected CreateOrganization command"),
        }
    }

    #[test]
    fn cli_parse_add_org_members() {
        let cli = Cli::parse_from([
            "realmctl",
            "add-org-members",
            "--org",
            "Acme Corp",
            "--users",
            "alice,bob",
        ]);
        match cli.command {
            Commands::AddOrgMembers { org, users } => {
                assert_eq!(org, "Acme Corp");
                assert_eq!(users, vec!["alice", "bob"]);
            }
            _ => panic!("expected AddOrgMembers command"),
        }
    }
}
