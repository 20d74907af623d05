use crate::build::{BuildBase, Reporting};
use crate::dependency::{Dependency, DependencyManagement};
use crate::project::DistributionManagement;
use crate::properties::Properties;
use crate::repository::{PluginRepository, Repository};
use serde::{Deserialize, Serialize};

/// A `<profile>`. Same shape as the project-level sections it overrides, but
/// nothing here is merged into the project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub activation: Option<Activation>,
    pub build: Option<BuildBase>,
    pub modules: Option<Vec<String>>,
    pub distribution_management: Option<DistributionManagement>,
    pub properties: Option<Properties>,
    pub dependency_management: Option<DependencyManagement>,
    pub dependencies: Option<Vec<Dependency>>,
    pub repositories: Option<Vec<Repository>>,
    pub plugin_repositories: Option<Vec<PluginRepository>>,
    pub reporting: Option<Reporting>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Activation {
    pub active_by_default: bool,
    pub jdk: String,
    pub os: Option<ActivationOs>,
    pub property: Option<ActivationProperty>,
    pub file: Option<ActivationFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivationOs {
    pub name: String,
    pub family: String,
    pub arch: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivationProperty {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivationFile {
    pub missing: String,
    pub exists: String,
}
