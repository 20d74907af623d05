use crate::index::DependencyIndex;
use crate::CoreError;
use pomkit_schema::{
    parse_project_file, parse_project_reader, parse_project_slice, Dependency, EncodeOptions,
    Project,
};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// A decoded project descriptor together with its dependency index.
///
/// The project is only reachable through shared borrows, so positions held by
/// the index always point into the list they were built from.
#[derive(Debug, Clone)]
pub struct Document {
    project: Project,
    index: Option<DependencyIndex>,
}

impl Document {
    /// Read and decode the descriptor at `path`.
    pub fn parse(path: &Path) -> Result<Self, CoreError> {
        info!("parsing project descriptor {}", path.display());
        let project = parse_project_file(path)?;
        Self::new(project)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, CoreError> {
        Self::new(parse_project_reader(reader)?)
    }

    pub fn from_slice(input: &[u8]) -> Result<Self, CoreError> {
        debug!("decoding project descriptor from {} bytes", input.len());
        Self::new(parse_project_slice(input)?)
    }

    /// Wrap an already decoded project, indexing its top-level dependencies.
    ///
    /// No index is built when the project has no `<dependencies>` element.
    pub fn new(project: Project) -> Result<Self, CoreError> {
        let index = match project.dependencies.as_deref() {
            Some(deps) => Some(DependencyIndex::build(deps)?),
            None => {
                debug!("project has no dependencies element; index not built");
                None
            }
        };
        Ok(Self { project, index })
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn index(&self) -> Option<&DependencyIndex> {
        self.index.as_ref()
    }

    pub fn into_project(self) -> Project {
        self.project
    }

    /// Encode with the default layout.
    ///
    /// Qualifies the root's namespace attributes first, so the project seen
    /// through [`Document::project`] afterwards carries them under their
    /// `xmlns:xsi` / `xsi:schemaLocation` fields.
    pub fn marshal(&mut self) -> Result<Vec<u8>, CoreError> {
        self.marshal_with(&EncodeOptions::default())
    }

    pub fn marshal_with(&mut self, options: &EncodeOptions) -> Result<Vec<u8>, CoreError> {
        let out = self.project.marshal_with(options)?;
        debug!("encoded project descriptor: {} bytes", out.len());
        Ok(out)
    }

    /// Find the top-level dependency with exactly these coordinates.
    ///
    /// The result borrows the entry inside this document's own list.
    pub fn search(&self, group_id: &str, artifact_id: &str) -> Result<&Dependency, CoreError> {
        let index = self.index.as_ref().ok_or(CoreError::IndexEmpty)?;
        let not_found = || CoreError::DependencyNotFound {
            group_id: group_id.to_owned(),
            artifact_id: artifact_id.to_owned(),
        };
        let pos = index.position(group_id, artifact_id)?.ok_or_else(not_found)?;
        self.project
            .dependencies
            .as_deref()
            .and_then(|deps| deps.get(pos))
            .ok_or_else(not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_DEPS: &str = r"<project>
        <dependencies>
            <dependency><groupId>g</groupId><artifactId>a</artifactId><version>1</version></dependency>
            <dependency><groupId>g</groupId><artifactId>b</artifactId><version>2</version></dependency>
        </dependencies>
    </project>";

    #[test]
    fn search_returns_alias_into_project() {
        let doc = Document::from_slice(TWO_DEPS.as_bytes()).unwrap();
        let found = doc.search("g", "b").unwrap();
        assert_eq!(found.version, "2");
        let deps = doc.project().dependencies.as_deref().unwrap();
        assert!(std::ptr::eq(found, &deps[1]));
    }

    #[test]
    fn no_dependencies_element_means_no_index() {
        let doc = Document::from_slice(b"<project><groupId>g</groupId></project>").unwrap();
        assert!(doc.index().is_none());
        assert!(matches!(doc.search("g", "a"), Err(CoreError::IndexEmpty)));
    }

    #[test]
    fn empty_dependencies_element_builds_empty_index() {
        let doc = Document::from_slice(b"<project><dependencies/></project>").unwrap();
        assert!(doc.index().unwrap().is_empty());
        assert!(matches!(
            doc.search("g", "a"),
            Err(CoreError::DependencyNotFound { .. })
        ));
    }

    #[test]
    fn search_survives_marshal() {
        let mut doc = Document::from_slice(TWO_DEPS.as_bytes()).unwrap();
        doc.marshal().unwrap();
        assert_eq!(doc.search("g", "a").unwrap().version, "1");
    }

    #[test]
    fn document_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Document>();
    }
}
