use crate::identity::{DependencyKey, HashError};
use serde::{Deserialize, Serialize};

/// A `<dependency>` entry, identified by `(group_id, artifact_id)`.
///
/// `optional` stays text: the POM spells it as a token (`"true"`/`"false"`)
/// and it is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub classifier: String,
    pub scope: String,
    pub system_path: String,
    pub exclusions: Option<Vec<Exclusion>>,
    pub optional: String,
}

impl Dependency {
    /// Index key for this dependency.
    pub fn key(&self) -> Result<DependencyKey, HashError> {
        DependencyKey::new(&self.group_id, &self.artifact_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Exclusion {
    pub group_id: String,
    pub artifact_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DependencyManagement {
    pub dependencies: Option<Vec<Dependency>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_version_and_scope() {
        let a = Dependency {
            group_id: "junit".to_owned(),
            artifact_id: "junit".to_owned(),
            version: "4.13".to_owned(),
            ..Dependency::default()
        };
        let b = Dependency {
            version: "5.0".to_owned(),
            scope: "test".to_owned(),
            ..a.clone()
        };
        assert_eq!(a.key().unwrap(), b.key().unwrap());
    }
}
