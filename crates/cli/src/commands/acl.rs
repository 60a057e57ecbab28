//! `rundeck acl ...`

use crate::context::CommandContext;
use anyhow::Result;
use rundeck_sdk::AclPolicyCollection;
use serde::Serialize;
use std::io::Write;
use tabled::Tabled;

/// Row of `acl list`; the parent columns repeat the directory context
#[derive(Debug, Tabled, Serialize)]
pub struct AclPolicyRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Path")]
    pub path: String,
    #[tabled(rename = "Type")]
    pub policy_type: String,
    #[tabled(rename = "HRef")]
    pub href: String,
    #[tabled(rename = "Parent")]
    pub parent: String,
    #[tabled(rename = "Parent Type")]
    pub parent_type: String,
}

pub fn rows(policies: &AclPolicyCollection) -> Vec<AclPolicyRow> {
    let parent = policies.parent_path();
    policies
        .resources
        .iter()
        .map(|p| AclPolicyRow {
            name: p.name.clone(),
            path: p.path.clone(),
            policy_type: p.policy_type.clone(),
            href: p.href.clone(),
            parent: parent.to_string(),
            parent_type: policies.policy_type.clone(),
        })
        .collect()
}

pub async fn list<W: Write>(ctx: &mut CommandContext<W>) -> Result<()> {
    let policies = ctx.client.list_system_acl_policies().await?;
    ctx.output.draw(&rows(&policies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rundeck_sdk::AclPolicy;

    fn policy(name: &str) -> AclPolicy {
        AclPolicy {
            name: name.to_string(),
            path: name.to_string(),
            policy_type: "file".to_string(),
            href: format!("http://localhost:4440/api/27/system/acl/{}", name),
        }
    }

    #[test]
    fn test_parent_defaults_to_root_for_empty_path() {
        let collection = AclPolicyCollection {
            path: String::new(),
            policy_type: "directory".to_string(),
            href: String::new(),
            resources: vec![policy("admin.aclpolicy"), policy("ops.aclpolicy")],
        };

        let rows = rows(&collection);

        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.parent, "/");
            assert_eq!(row.parent_type, "directory");
        }
        assert_eq!(rows[0].name, "admin.aclpolicy");
        assert_eq!(rows[1].name, "ops.aclpolicy");
    }

    #[test]
    fn test_parent_uses_collection_path() {
        let collection = AclPolicyCollection {
            path: "teams".to_string(),
            policy_type: "directory".to_string(),
            href: String::new(),
            resources: vec![policy("teams/dev.aclpolicy")],
        };

        assert_eq!(rows(&collection)[0].parent, "teams");
    }

    #[test]
    fn test_empty_listing_has_no_rows() {
        assert!(rows(&AclPolicyCollection::default()).is_empty());
    }
}
