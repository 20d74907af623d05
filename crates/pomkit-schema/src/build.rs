use crate::dependency::Dependency;
use serde::{Deserialize, Serialize};

/// Build settings shared by the project `<build>` and a profile's `<build>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildBase {
    pub default_goal: String,
    pub resources: Option<Vec<Resource>>,
    pub test_resources: Option<Vec<Resource>>,
    pub directory: String,
    pub final_name: String,
    pub filters: Option<Vec<String>>,
    pub plugin_management: Option<PluginManagement>,
    pub plugins: Option<Vec<Plugin>>,
}

/// Project-level `<build>`: the shared [`BuildBase`] fields plus source
/// layout and extensions, all written inside one element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Build {
    pub source_directory: String,
    pub script_source_directory: String,
    pub test_source_directory: String,
    pub output_directory: String,
    pub test_output_directory: String,
    pub extensions: Option<Vec<Extension>>,
    #[serde(flatten)]
    pub base: BuildBase,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Extension {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resource {
    pub target_path: String,
    pub filtering: String,
    pub directory: String,
    pub includes: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginManagement {
    pub plugins: Option<Vec<Plugin>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Plugin {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub extensions: String,
    pub executions: Option<Vec<PluginExecution>>,
    pub dependencies: Option<Vec<Dependency>>,
    pub inherited: String,
    pub configuration: Option<Configuration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginExecution {
    pub id: String,
    pub phase: String,
    pub goals: Option<Vec<String>>,
    pub inherited: String,
    pub configuration: Option<Configuration>,
}

/// Plugin or notifier `<configuration>`, kept as the raw inner XML.
///
/// The content is free-form per plugin, so it is never interpreted; `raw` is
/// written back verbatim between the tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    /// `combine.children` attribute.
    pub children: String,
    /// `combine.self` attribute.
    #[serde(rename = "self")]
    pub self_: String,
    pub raw: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reporting {
    pub exclude_defaults: String,
    pub output_directory: String,
    pub plugins: Option<Vec<ReportingPlugin>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportingPlugin {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub inherited: String,
    pub report_sets: Option<Vec<ReportSet>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportSet {
    pub id: String,
    pub reports: Option<Vec<String>>,
    pub inherited: String,
}
