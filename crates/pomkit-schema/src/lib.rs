//! Object model, ordered property blocks, dependency keys, and the XML codec
//! for Maven project descriptors.
//!
//! This crate defines the schema layer: the `Project` graph and every nested
//! section of a POM, the insertion-ordered `Properties` block, the FNV-1a
//! `DependencyKey`, and decoding/encoding between POM text and the model.

pub mod build;
pub mod dependency;
pub mod identity;
pub mod profile;
pub mod project;
pub mod properties;
pub mod repository;
pub mod xml;

pub use build::{
    Build, BuildBase, Configuration, Extension, Plugin, PluginExecution, PluginManagement,
    ReportSet, Reporting, ReportingPlugin, Resource,
};
pub use dependency::{Dependency, DependencyManagement, Exclusion};
pub use identity::{DependencyKey, Fnv1a64, HashError};
pub use profile::{Activation, ActivationFile, ActivationOs, ActivationProperty, Profile};
pub use project::{
    CiManagement, Contributor, Developer, DistributionManagement, IssueManagement, License,
    MailingList, Notifier, Organization, Parent, Prerequisites, Project, Relocation, Scm, Site,
};
pub use properties::Properties;
pub use repository::{PluginRepository, Repository, RepositoryPolicy};
pub use xml::{
    parse_project_file, parse_project_reader, parse_project_slice, parse_project_str,
    DecodeError, EncodeError, EncodeOptions, XML_DECLARATION,
};
