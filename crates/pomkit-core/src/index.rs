use crate::CoreError;
use pomkit_schema::{Dependency, DependencyKey};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Lookup from dependency key to position in a project's top-level
/// `<dependencies>` list.
///
/// Built once from the list it indexes and never mutated afterwards. Positions
/// are only meaningful against that same list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyIndex {
    positions: HashMap<DependencyKey, usize>,
}

impl DependencyIndex {
    /// Index `dependencies` by `groupId:artifactId`.
    ///
    /// When two entries share a key (same coordinates, or a hash collision)
    /// the later entry wins.
    pub fn build(dependencies: &[Dependency]) -> Result<Self, CoreError> {
        let mut positions = HashMap::with_capacity(dependencies.len());
        let mut replaced = 0usize;
        for (pos, dep) in dependencies.iter().enumerate() {
            let key = dep.key()?;
            if let Some(prev) = positions.insert(key, pos) {
                replaced += 1;
                warn!(
                    "dependency {}:{} at position {pos} replaces index entry at position {prev} (key {key})",
                    dep.group_id, dep.artifact_id
                );
            }
        }
        debug!(
            "built dependency index: {} entries from {} dependencies, {replaced} replaced",
            positions.len(),
            dependencies.len()
        );
        Ok(Self { positions })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of `group_id:artifact_id` in the indexed list, if present.
    pub fn position(&self, group_id: &str, artifact_id: &str) -> Result<Option<usize>, CoreError> {
        let key = DependencyKey::new(group_id, artifact_id)?;
        Ok(self.positions.get(&key).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(group: &str, artifact: &str, version: &str) -> Dependency {
        Dependency {
            group_id: group.to_owned(),
            artifact_id: artifact.to_owned(),
            version: version.to_owned(),
            ..Dependency::default()
        }
    }

    #[test]
    fn indexes_every_entry() {
        let deps = vec![dep("a", "x", "1"), dep("b", "y", "2"), dep("c", "z", "3")];
        let index = DependencyIndex::build(&deps).unwrap();
        assert_eq!(index.len(), 3);
        for (pos, d) in deps.iter().enumerate() {
            assert_eq!(
                index.position(&d.group_id, &d.artifact_id).unwrap(),
                Some(pos)
            );
        }
    }

    #[test]
    fn later_duplicate_wins() {
        let deps = vec![dep("a", "x", "1"), dep("b", "y", "2"), dep("a", "x", "3")];
        let index = DependencyIndex::build(&deps).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.position("a", "x").unwrap(), Some(2));
    }

    #[test]
    fn exact_match_only() {
        let index = DependencyIndex::build(&[dep("org.example", "foo", "1")]).unwrap();
        assert_eq!(index.position("org.example", "fo").unwrap(), None);
        assert_eq!(index.position("ORG.EXAMPLE", "foo").unwrap(), None);
        assert_eq!(index.position("org.example:foo", "").unwrap(), None);
    }

    #[test]
    fn empty_list_builds_empty_index() {
        let index = DependencyIndex::build(&[]).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.position("a", "b").unwrap(), None);
    }
}
