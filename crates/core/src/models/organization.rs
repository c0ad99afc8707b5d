use serde::{Deserialize, Serialize};

/// Admin API organization representation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationRepresentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub domains: Vec<OrganizationDomainRepresentation>,
}

/// An internet domain attached to an organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDomainRepresentation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl OrganizationRepresentation {
    /// A new enabled organization with the given domains, ready to POST.
    pub fn new_enabled(name: &str, domains: &[String]) -> Self {
        Self {
            name: name.to_string(),
            enabled: Some(true),
            domains: domains
                .iter()
                .map(|d| OrganizationDomainRepresentation {
                    name: d.clone(),
                    verified: None,
                })
                .collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_org() -> OrganizationRepresentation {
        OrganizationRepresentation {
            id: Some("3c1f".to_string()),
            name: "Acme Corp".to_string(),
            alias: Some("acme".to_string()),
            enabled: Some(true),
            description: None,
            domains: vec![OrganizationDomainRepresentation {
                name: "acme.example".to_string(),
                verified: Some(false),
            }],
        }
    }

    #[test]
    fn organization_round_trip() {
        let org = sample_org();
        let json = serde_json::to_string(&org).unwrap();
        let back: OrganizationRepresentation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, org);
    }

    #[test]
    fn organization_domains_default_to_empty() {
        let json = r#"{"id":"3c1f","name":"Acme Corp"}"#;
        let org: OrganizationRepresentation = serde_json::from_str(json).unwrap();
        assert!(org.domains.is_empty());
    }

    #[test]
    fn new_enabled_builds_domains() {
        let org = OrganizationRepresentation::new_enabled(
            "Acme Corp",
            &["acme.example".to_string(), "acme.test".to_string()],
        );
        assert_eq!(org.enabled, Some(true));
        assert_eq!(org.domains.len(), 2);
        assert_eq!(org.domains[0].name, "acme.example");
        assert_eq!(org.domains[0].verified, None);
    }

    #[test]
    fn organization_optional_fields_omitted() {
        let org = OrganizationRepresentation {
            name: "Bare Org".to_string(),
            ..OrganizationRepresentation::default()
        };
        let json = serde_json::to_string(&org).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(!json.contains("\"alias\""));
        assert!(!json.contains("\"description\""));
    }
}
