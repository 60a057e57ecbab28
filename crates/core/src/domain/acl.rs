// ACL Policy Domain Model

use serde::{Deserialize, Serialize};

/// Parent path shown when the server reports the root directory as ""
pub const ROOT_PARENT_PATH: &str = "/";

/// A single ACL policy file exposed by the system API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclPolicy {
    pub name: String,
    pub path: String,
    pub policy_type: String,
    pub href: String,
}

/// A directory listing of ACL policies
///
/// `path`, `policy_type` and `href` describe the directory itself and act as
/// the parent context for every entry in `resources`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclPolicyCollection {
    pub path: String,
    pub policy_type: String,
    pub href: String,
    pub resources: Vec<AclPolicy>,
}

impl AclPolicyCollection {
    /// Directory path with the root reported as "/"
    pub fn parent_path(&self) -> &str {
        if self.path.is_empty() {
            ROOT_PARENT_PATH
        } else {
            &self.path
        }
    }
}
