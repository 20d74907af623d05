use super::{Element, EncodeError, ToElement};
use crate::build::{
    Build, BuildBase, Configuration, Extension, Plugin, PluginExecution, PluginManagement,
    ReportSet, Reporting, ReportingPlugin, Resource,
};
use crate::dependency::{Dependency, DependencyManagement, Exclusion};
use crate::profile::{Activation, ActivationFile, ActivationOs, ActivationProperty, Profile};
use crate::project::{
    CiManagement, Contributor, Developer, DistributionManagement, IssueManagement, License,
    MailingList, Notifier, Organization, Parent, Prerequisites, Project, Relocation, Scm, Site,
};
use crate::properties::Properties;
use crate::repository::{PluginRepository, Repository, RepositoryPolicy};
use quick_xml::Writer;

/// Preamble written before the root element.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Output layout for [`Project::marshal_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub indent_char: u8,
    /// Indent per nesting level; `0` writes everything on one line.
    pub indent_size: usize,
    /// Write [`XML_DECLARATION`] first.
    pub declaration: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent_char: b' ',
            indent_size: 4,
            declaration: true,
        }
    }
}

impl Project {
    /// Encode with the default layout: declaration line, then the markup
    /// indented by four spaces.
    ///
    /// Runs [`Project::qualify_root_attributes`] first, which is why this takes
    /// `&mut self`.
    pub fn marshal(&mut self) -> Result<Vec<u8>, EncodeError> {
        self.marshal_with(&EncodeOptions::default())
    }

    pub fn marshal_with(&mut self, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
        self.qualify_root_attributes();

        let mut out = Vec::new();
        if options.declaration {
            out.extend_from_slice(XML_DECLARATION.as_bytes());
        }
        let mut writer = if options.indent_size > 0 {
            Writer::new_with_indent(out, options.indent_char, options.indent_size)
        } else {
            Writer::new(out)
        };
        self.to_element("project").write(&mut writer)?;
        Ok(writer.into_inner())
    }
}

impl ToElement for Project {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_attribute("xmlns", &self.xmlns);
        e.push_attribute("xmlns:xsi", &self.xmlns_xsi);
        e.push_attribute("xsi:schemaLocation", &self.xsi_schema_location);

        e.push_text("modelVersion", &self.model_version);
        e.push_text("groupId", &self.group_id);
        e.push_text("artifactId", &self.artifact_id);
        e.push_text("version", &self.version);
        e.push_text("packaging", &self.packaging);
        e.push_text("name", &self.name);
        e.push_text("description", &self.description);
        e.push_text("url", &self.url);
        e.push_text("inceptionYear", &self.inception_year);
        e.push_nested("organization", self.organization.as_ref());
        e.push_list("licenses", "license", self.licenses.as_deref());
        e.push_list("developers", "developer", self.developers.as_deref());
        e.push_list("contributors", "contributor", self.contributors.as_deref());
        e.push_list("mailingLists", "mailingList", self.mailing_lists.as_deref());
        e.push_nested("prerequisites", self.prerequisites.as_ref());
        e.push_nested("properties", self.properties.as_ref());
        e.push_nested("parent", self.parent.as_ref());
        e.push_list("modules", "module", self.modules.as_deref());
        e.push_nested("scm", self.scm.as_ref());
        e.push_nested("issueManagement", self.issue_management.as_ref());
        e.push_nested("ciManagement", self.ci_management.as_ref());
        e.push_nested("distributionManagement", self.distribution_management.as_ref());
        e.push_nested("dependencyManagement", self.dependency_management.as_ref());
        e.push_list("dependencies", "dependency", self.dependencies.as_deref());
        e.push_list("repositories", "repository", self.repositories.as_deref());
        e.push_list(
            "pluginRepositories",
            "pluginRepository",
            self.plugin_repositories.as_deref(),
        );
        e.push_nested("build", self.build.as_ref());
        e.push_nested("reporting", self.reporting.as_ref());
        e.push_list("profiles", "profile", self.profiles.as_deref());
        e
    }
}

impl ToElement for Properties {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        for (key, value) in self.iter() {
            e.push(Element::with_text(key, value));
        }
        e
    }
}

impl ToElement for Parent {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("groupId", &self.group_id);
        e.push_text("artifactId", &self.artifact_id);
        e.push_text("version", &self.version);
        e.push_text("relativePath", &self.relative_path);
        e
    }
}

impl ToElement for Organization {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("name", &self.name);
        e.push_text("url", &self.url);
        e
    }
}

impl ToElement for License {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("name", &self.name);
        e.push_text("url", &self.url);
        e.push_text("distribution", &self.distribution);
        e.push_text("comments", &self.comments);
        e
    }
}

impl ToElement for Developer {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("id", &self.id);
        e.push_text("name", &self.name);
        e.push_text("email", &self.email);
        e.push_text("url", &self.url);
        e.push_text("organization", &self.organization);
        e.push_text("organizationUrl", &self.organization_url);
        e.push_list("roles", "role", self.roles.as_deref());
        e.push_text("timezone", &self.timezone);
        e.push_nested("properties", self.properties.as_ref());
        e
    }
}

impl ToElement for Contributor {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("name", &self.name);
        e.push_text("email", &self.email);
        e.push_text("url", &self.url);
        e.push_text("organization", &self.organization);
        e.push_text("organizationUrl", &self.organization_url);
        e.push_list("roles", "role", self.roles.as_deref());
        e.push_text("timezone", &self.timezone);
        e.push_nested("properties", self.properties.as_ref());
        e
    }
}

impl ToElement for MailingList {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("name", &self.name);
        e.push_text("subscribe", &self.subscribe);
        e.push_text("unsubscribe", &self.unsubscribe);
        e.push_text("post", &self.post);
        e.push_text("archive", &self.archive);
        e.push_list("otherArchives", "otherArchive", self.other_archives.as_deref());
        e
    }
}

impl ToElement for Prerequisites {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("maven", &self.maven);
        e
    }
}

impl ToElement for Scm {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("connection", &self.connection);
        e.push_text("developerConnection", &self.developer_connection);
        e.push_text("tag", &self.tag);
        e.push_text("url", &self.url);
        e
    }
}

impl ToElement for IssueManagement {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("system", &self.system);
        e.push_text("url", &self.url);
        e
    }
}

impl ToElement for CiManagement {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("system", &self.system);
        e.push_text("url", &self.url);
        e.push_list("notifiers", "notifier", self.notifiers.as_deref());
        e
    }
}

impl ToElement for Notifier {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("type", &self.kind);
        e.push_flag("sendOnError", self.send_on_error);
        e.push_flag("sendOnFailure", self.send_on_failure);
        e.push_flag("sendOnSuccess", self.send_on_success);
        e.push_flag("sendOnWarning", self.send_on_warning);
        e.push_text("address", &self.address);
        e.push_nested("configuration", self.configuration.as_ref());
        e
    }
}

impl ToElement for DistributionManagement {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_nested("repository", self.repository.as_ref());
        e.push_nested("snapshotRepository", self.snapshot_repository.as_ref());
        e.push_nested("site", self.site.as_ref());
        e.push_text("downloadUrl", &self.download_url);
        e.push_nested("relocation", self.relocation.as_ref());
        e.push_text("status", &self.status);
        e
    }
}

impl ToElement for Site {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("id", &self.id);
        e.push_text("name", &self.name);
        e.push_text("url", &self.url);
        e
    }
}

impl ToElement for Relocation {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("groupId", &self.group_id);
        e.push_text("artifactId", &self.artifact_id);
        e.push_text("version", &self.version);
        e.push_text("message", &self.message);
        e
    }
}

impl ToElement for DependencyManagement {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_list("dependencies", "dependency", self.dependencies.as_deref());
        e
    }
}

impl ToElement for Dependency {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("groupId", &self.group_id);
        e.push_text("artifactId", &self.artifact_id);
        e.push_text("version", &self.version);
        e.push_text("type", &self.kind);
        e.push_text("classifier", &self.classifier);
        e.push_text("scope", &self.scope);
        e.push_text("systemPath", &self.system_path);
        e.push_list("exclusions", "exclusion", self.exclusions.as_deref());
        e.push_text("optional", &self.optional);
        e
    }
}

impl ToElement for Exclusion {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("groupId", &self.group_id);
        e.push_text("artifactId", &self.artifact_id);
        e
    }
}

impl ToElement for Repository {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_flag("uniqueVersion", self.unique_version);
        e.push_nested("releases", self.releases.as_ref());
        e.push_nested("snapshots", self.snapshots.as_ref());
        e.push_text("id", &self.id);
        e.push_text("name", &self.name);
        e.push_text("url", &self.url);
        e.push_text("layout", &self.layout);
        e
    }
}

impl ToElement for PluginRepository {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_nested("releases", self.releases.as_ref());
        e.push_nested("snapshots", self.snapshots.as_ref());
        e.push_text("id", &self.id);
        e.push_text("name", &self.name);
        e.push_text("url", &self.url);
        e.push_text("layout", &self.layout);
        e
    }
}

impl ToElement for RepositoryPolicy {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("enabled", &self.enabled);
        e.push_text("updatePolicy", &self.update_policy);
        e.push_text("checksumPolicy", &self.checksum_policy);
        e
    }
}

impl BuildBase {
    fn push_fields<'a>(&'a self, e: &mut Element<'a>) {
        e.push_text("defaultGoal", &self.default_goal);
        e.push_list("resources", "resource", self.resources.as_deref());
        e.push_list("testResources", "testResource", self.test_resources.as_deref());
        e.push_text("directory", &self.directory);
        e.push_text("finalName", &self.final_name);
        e.push_list("filters", "filter", self.filters.as_deref());
        e.push_nested("pluginManagement", self.plugin_management.as_ref());
        e.push_list("plugins", "plugin", self.plugins.as_deref());
    }
}

impl ToElement for BuildBase {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        self.push_fields(&mut e);
        e
    }
}

impl ToElement for Build {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("sourceDirectory", &self.source_directory);
        e.push_text("scriptSourceDirectory", &self.script_source_directory);
        e.push_text("testSourceDirectory", &self.test_source_directory);
        e.push_text("outputDirectory", &self.output_directory);
        e.push_text("testOutputDirectory", &self.test_output_directory);
        e.push_list("extensions", "extension", self.extensions.as_deref());
        self.base.push_fields(&mut e);
        e
    }
}

impl ToElement for Extension {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("groupId", &self.group_id);
        e.push_text("artifactId", &self.artifact_id);
        e.push_text("version", &self.version);
        e
    }
}

impl ToElement for Resource {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("targetPath", &self.target_path);
        e.push_text("filtering", &self.filtering);
        e.push_text("directory", &self.directory);
        e.push_list("includes", "include", self.includes.as_deref());
        e.push_list("excludes", "exclude", self.excludes.as_deref());
        e
    }
}

impl ToElement for PluginManagement {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_list("plugins", "plugin", self.plugins.as_deref());
        e
    }
}

impl ToElement for Plugin {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("groupId", &self.group_id);
        e.push_text("artifactId", &self.artifact_id);
        e.push_text("version", &self.version);
        e.push_text("extensions", &self.extensions);
        e.push_list("executions", "execution", self.executions.as_deref());
        e.push_list("dependencies", "dependency", self.dependencies.as_deref());
        e.push_text("inherited", &self.inherited);
        e.push_nested("configuration", self.configuration.as_ref());
        e
    }
}

impl ToElement for PluginExecution {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("id", &self.id);
        e.push_text("phase", &self.phase);
        e.push_list("goals", "goal", self.goals.as_deref());
        e.push_text("inherited", &self.inherited);
        e.push_nested("configuration", self.configuration.as_ref());
        e
    }
}

impl ToElement for Configuration {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_attribute("combine.children", &self.children);
        e.push_attribute("combine.self", &self.self_);
        e.set_raw(&self.raw);
        e
    }
}

impl ToElement for Reporting {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("excludeDefaults", &self.exclude_defaults);
        e.push_text("outputDirectory", &self.output_directory);
        e.push_list("plugins", "plugin", self.plugins.as_deref());
        e
    }
}

impl ToElement for ReportingPlugin {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("groupId", &self.group_id);
        e.push_text("artifactId", &self.artifact_id);
        e.push_text("version", &self.version);
        e.push_text("inherited", &self.inherited);
        e.push_list("reportSets", "reportSet", self.report_sets.as_deref());
        e
    }
}

impl ToElement for ReportSet {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("id", &self.id);
        e.push_list("reports", "report", self.reports.as_deref());
        e.push_text("inherited", &self.inherited);
        e
    }
}

impl ToElement for Profile {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("id", &self.id);
        e.push_nested("activation", self.activation.as_ref());
        e.push_nested("build", self.build.as_ref());
        e.push_list("modules", "module", self.modules.as_deref());
        e.push_nested("distributionManagement", self.distribution_management.as_ref());
        e.push_nested("properties", self.properties.as_ref());
        e.push_nested("dependencyManagement", self.dependency_management.as_ref());
        e.push_list("dependencies", "dependency", self.dependencies.as_deref());
        e.push_list("repositories", "repository", self.repositories.as_deref());
        e.push_list(
            "pluginRepositories",
            "pluginRepository",
            self.plugin_repositories.as_deref(),
        );
        e.push_nested("reporting", self.reporting.as_ref());
        e
    }
}

impl ToElement for Activation {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_flag("activeByDefault", self.active_by_default);
        e.push_text("jdk", &self.jdk);
        e.push_nested("os", self.os.as_ref());
        e.push_nested("property", self.property.as_ref());
        e.push_nested("file", self.file.as_ref());
        e
    }
}

impl ToElement for ActivationOs {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("name", &self.name);
        e.push_text("family", &self.family);
        e.push_text("arch", &self.arch);
        e.push_text("version", &self.version);
        e
    }
}

impl ToElement for ActivationProperty {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("name", &self.name);
        e.push_text("value", &self.value);
        e
    }
}

impl ToElement for ActivationFile {
    fn to_element<'a>(&'a self, name: &'a str) -> Element<'a> {
        let mut e = Element::new(name);
        e.push_text("missing", &self.missing);
        e.push_text("exists", &self.exists);
        e
    }
}
