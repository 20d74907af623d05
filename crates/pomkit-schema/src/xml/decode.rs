use super::{DecodeError, Element, FromElement};
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
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn parse_project_str(input: &str) -> Result<Project, DecodeError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let root = Element::parse(input)?;
    if root.local_name() != "project" {
        return Err(DecodeError::UnexpectedRoot(root.name().to_owned()));
    }
    Project::from_element(&root)
}

pub fn parse_project_slice(input: &[u8]) -> Result<Project, DecodeError> {
    parse_project_str(std::str::from_utf8(input)?)
}

/// Read `reader` to the end, then decode. Read failures abort the decode.
pub fn parse_project_reader(mut reader: impl Read) -> Result<Project, DecodeError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse_project_slice(&buf)
}

pub fn parse_project_file(path: impl AsRef<Path>) -> Result<Project, DecodeError> {
    let content = fs::read(path)?;
    parse_project_slice(&content)
}

impl FromElement for Project {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        let mut project = Project {
            model_version: e.string("modelVersion"),
            group_id: e.string("groupId"),
            artifact_id: e.string("artifactId"),
            version: e.string("version"),
            packaging: e.string("packaging"),
            name: e.string("name"),
            description: e.string("description"),
            url: e.string("url"),
            inception_year: e.string("inceptionYear"),
            organization: e.nested("organization")?,
            licenses: e.list("licenses", "license")?,
            developers: e.list("developers", "developer")?,
            contributors: e.list("contributors", "contributor")?,
            mailing_lists: e.list("mailingLists", "mailingList")?,
            prerequisites: e.nested("prerequisites")?,
            properties: e.nested("properties")?,
            parent: e.nested("parent")?,
            modules: e.list("modules", "module")?,
            scm: e.nested("scm")?,
            issue_management: e.nested("issueManagement")?,
            ci_management: e.nested("ciManagement")?,
            distribution_management: e.nested("distributionManagement")?,
            dependency_management: e.nested("dependencyManagement")?,
            dependencies: e.list("dependencies", "dependency")?,
            repositories: e.list("repositories", "repository")?,
            plugin_repositories: e.list("pluginRepositories", "pluginRepository")?,
            build: e.nested("build")?,
            reporting: e.nested("reporting")?,
            profiles: e.list("profiles", "profile")?,
            ..Project::default()
        };

        // `xmlns:xsi` and `xsi:schemaLocation` land in the decode-side fields.
        for (key, value) in e.attributes() {
            match key.split_once(':') {
                None if key == "xmlns" => value.clone_into(&mut project.xmlns),
                Some(("xmlns", "xsi")) => value.clone_into(&mut project.xsi),
                Some((_, "schemaLocation")) => value.clone_into(&mut project.schema_location),
                None if key == "schemaLocation" => value.clone_into(&mut project.schema_location),
                _ => {}
            }
        }

        Ok(project)
    }
}

impl FromElement for Properties {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(e.children()
            .iter()
            .map(|c| (c.local_name(), c.text()))
            .collect())
    }
}

impl FromElement for Parent {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Parent {
            group_id: e.string("groupId"),
            artifact_id: e.string("artifactId"),
            version: e.string("version"),
            relative_path: e.string("relativePath"),
        })
    }
}

impl FromElement for Organization {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Organization {
            name: e.string("name"),
            url: e.string("url"),
        })
    }
}

impl FromElement for License {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(License {
            name: e.string("name"),
            url: e.string("url"),
            distribution: e.string("distribution"),
            comments: e.string("comments"),
        })
    }
}

impl FromElement for Developer {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Developer {
            id: e.string("id"),
            name: e.string("name"),
            email: e.string("email"),
            url: e.string("url"),
            organization: e.string("organization"),
            organization_url: e.string("organizationUrl"),
            roles: e.list("roles", "role")?,
            timezone: e.string("timezone"),
            properties: e.nested("properties")?,
        })
    }
}

impl FromElement for Contributor {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Contributor {
            name: e.string("name"),
            email: e.string("email"),
            url: e.string("url"),
            organization: e.string("organization"),
            organization_url: e.string("organizationUrl"),
            roles: e.list("roles", "role")?,
            timezone: e.string("timezone"),
            properties: e.nested("properties")?,
        })
    }
}

impl FromElement for MailingList {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(MailingList {
            name: e.string("name"),
            subscribe: e.string("subscribe"),
            unsubscribe: e.string("unsubscribe"),
            post: e.string("post"),
            archive: e.string("archive"),
            other_archives: e.list("otherArchives", "otherArchive")?,
        })
    }
}

impl FromElement for Prerequisites {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Prerequisites {
            maven: e.string("maven"),
        })
    }
}

impl FromElement for Scm {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Scm {
            connection: e.string("connection"),
            developer_connection: e.string("developerConnection"),
            tag: e.string("tag"),
            url: e.string("url"),
        })
    }
}

impl FromElement for IssueManagement {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(IssueManagement {
            system: e.string("system"),
            url: e.string("url"),
        })
    }
}

impl FromElement for CiManagement {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(CiManagement {
            system: e.string("system"),
            url: e.string("url"),
            notifiers: e.list("notifiers", "notifier")?,
        })
    }
}

impl FromElement for Notifier {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Notifier {
            kind: e.string("type"),
            send_on_error: e.flag("sendOnError")?,
            send_on_failure: e.flag("sendOnFailure")?,
            send_on_success: e.flag("sendOnSuccess")?,
            send_on_warning: e.flag("sendOnWarning")?,
            address: e.string("address"),
            configuration: e.nested("configuration")?,
        })
    }
}

impl FromElement for DistributionManagement {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(DistributionManagement {
            repository: e.nested("repository")?,
            snapshot_repository: e.nested("snapshotRepository")?,
            site: e.nested("site")?,
            download_url: e.string("downloadUrl"),
            relocation: e.nested("relocation")?,
            status: e.string("status"),
        })
    }
}

impl FromElement for Site {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Site {
            id: e.string("id"),
            name: e.string("name"),
            url: e.string("url"),
        })
    }
}

impl FromElement for Relocation {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Relocation {
            group_id: e.string("groupId"),
            artifact_id: e.string("artifactId"),
            version: e.string("version"),
            message: e.string("message"),
        })
    }
}

impl FromElement for DependencyManagement {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(DependencyManagement {
            dependencies: e.list("dependencies", "dependency")?,
        })
    }
}

impl FromElement for Dependency {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Dependency {
            group_id: e.string("groupId"),
            artifact_id: e.string("artifactId"),
            version: e.string("version"),
            kind: e.string("type"),
            classifier: e.string("classifier"),
            scope: e.string("scope"),
            system_path: e.string("systemPath"),
            exclusions: e.list("exclusions", "exclusion")?,
            optional: e.string("optional"),
        })
    }
}

impl FromElement for Exclusion {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Exclusion {
            group_id: e.string("groupId"),
            artifact_id: e.string("artifactId"),
        })
    }
}

impl FromElement for Repository {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Repository {
            unique_version: e.flag("uniqueVersion")?,
            releases: e.nested("releases")?,
            snapshots: e.nested("snapshots")?,
            id: e.string("id"),
            name: e.string("name"),
            url: e.string("url"),
            layout: e.string("layout"),
        })
    }
}

impl FromElement for PluginRepository {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(PluginRepository {
            releases: e.nested("releases")?,
            snapshots: e.nested("snapshots")?,
            id: e.string("id"),
            name: e.string("name"),
            url: e.string("url"),
            layout: e.string("layout"),
        })
    }
}

impl FromElement for RepositoryPolicy {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(RepositoryPolicy {
            enabled: e.string("enabled"),
            update_policy: e.string("updatePolicy"),
            checksum_policy: e.string("checksumPolicy"),
        })
    }
}

impl FromElement for BuildBase {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(BuildBase {
            default_goal: e.string("defaultGoal"),
            resources: e.list("resources", "resource")?,
            test_resources: e.list("testResources", "testResource")?,
            directory: e.string("directory"),
            final_name: e.string("finalName"),
            filters: e.list("filters", "filter")?,
            plugin_management: e.nested("pluginManagement")?,
            plugins: e.list("plugins", "plugin")?,
        })
    }
}

impl FromElement for Build {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Build {
            source_directory: e.string("sourceDirectory"),
            script_source_directory: e.string("scriptSourceDirectory"),
            test_source_directory: e.string("testSourceDirectory"),
            output_directory: e.string("outputDirectory"),
            test_output_directory: e.string("testOutputDirectory"),
            extensions: e.list("extensions", "extension")?,
            base: BuildBase::from_element(e)?,
        })
    }
}

impl FromElement for Extension {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Extension {
            group_id: e.string("groupId"),
            artifact_id: e.string("artifactId"),
            version: e.string("version"),
        })
    }
}

impl FromElement for Resource {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Resource {
            target_path: e.string("targetPath"),
            filtering: e.string("filtering"),
            directory: e.string("directory"),
            includes: e.list("includes", "include")?,
            excludes: e.list("excludes", "exclude")?,
        })
    }
}

impl FromElement for PluginManagement {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(PluginManagement {
            plugins: e.list("plugins", "plugin")?,
        })
    }
}

impl FromElement for Plugin {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Plugin {
            group_id: e.string("groupId"),
            artifact_id: e.string("artifactId"),
            version: e.string("version"),
            extensions: e.string("extensions"),
            executions: e.list("executions", "execution")?,
            dependencies: e.list("dependencies", "dependency")?,
            inherited: e.string("inherited"),
            configuration: e.nested("configuration")?,
        })
    }
}

impl FromElement for PluginExecution {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(PluginExecution {
            id: e.string("id"),
            phase: e.string("phase"),
            goals: e.list("goals", "goal")?,
            inherited: e.string("inherited"),
            configuration: e.nested("configuration")?,
        })
    }
}

impl FromElement for Configuration {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Configuration {
            children: e.attribute("combine.children").unwrap_or_default().to_owned(),
            self_: e.attribute("combine.self").unwrap_or_default().to_owned(),
            raw: e.raw().to_owned(),
        })
    }
}

impl FromElement for Reporting {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Reporting {
            exclude_defaults: e.string("excludeDefaults"),
            output_directory: e.string("outputDirectory"),
            plugins: e.list("plugins", "plugin")?,
        })
    }
}

impl FromElement for ReportingPlugin {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(ReportingPlugin {
            group_id: e.string("groupId"),
            artifact_id: e.string("artifactId"),
            version: e.string("version"),
            inherited: e.string("inherited"),
            report_sets: e.list("reportSets", "reportSet")?,
        })
    }
}

impl FromElement for ReportSet {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(ReportSet {
            id: e.string("id"),
            reports: e.list("reports", "report")?,
            inherited: e.string("inherited"),
        })
    }
}

impl FromElement for Profile {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Profile {
            id: e.string("id"),
            activation: e.nested("activation")?,
            build: e.nested("build")?,
            modules: e.list("modules", "module")?,
            distribution_management: e.nested("distributionManagement")?,
            properties: e.nested("properties")?,
            dependency_management: e.nested("dependencyManagement")?,
            dependencies: e.list("dependencies", "dependency")?,
            repositories: e.list("repositories", "repository")?,
            plugin_repositories: e.list("pluginRepositories", "pluginRepository")?,
            reporting: e.nested("reporting")?,
        })
    }
}

impl FromElement for Activation {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(Activation {
            active_by_default: e.flag("activeByDefault")?,
            jdk: e.string("jdk"),
            os: e.nested("os")?,
            property: e.nested("property")?,
            file: e.nested("file")?,
        })
    }
}

impl FromElement for ActivationOs {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(ActivationOs {
            name: e.string("name"),
            family: e.string("family"),
            arch: e.string("arch"),
            version: e.string("version"),
        })
    }
}

impl FromElement for ActivationProperty {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(ActivationProperty {
            name: e.string("name"),
            value: e.string("value"),
        })
    }
}

impl FromElement for ActivationFile {
    fn from_element(e: &Element<'_>) -> Result<Self, DecodeError> {
        Ok(ActivationFile {
            missing: e.string("missing"),
            exists: e.string("exists"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = r#"<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd">"#;

    fn pom(body: &str) -> String {
        format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{ROOT}\n{body}\n</project>")
    }

    #[test]
    fn parses_root_attributes_into_decode_fields() {
        let project = parse_project_str(&pom("")).unwrap();
        assert_eq!(project.xmlns, "http://maven.apache.org/POM/4.0.0");
        assert_eq!(project.xsi, "http://www.w3.org/2001/XMLSchema-instance");
        assert_eq!(
            project.schema_location,
            "http://maven.apache.org/POM/4.0.0 http://maven.apache.org/xsd/maven-4.0.0.xsd"
        );
        assert!(project.xmlns_xsi.is_empty());
        assert!(project.xsi_schema_location.is_empty());
    }

    #[test]
    fn absent_list_is_none_and_empty_list_is_some() {
        let absent = parse_project_str(&pom("<groupId>g</groupId>")).unwrap();
        assert_eq!(absent.licenses, None);

        let empty = parse_project_str(&pom("<licenses></licenses>")).unwrap();
        assert_eq!(empty.licenses, Some(vec![]));

        let self_closing = parse_project_str(&pom("<licenses/>")).unwrap();
        assert_eq!(self_closing.licenses, Some(vec![]));
    }

    #[test]
    fn properties_keep_document_order_and_last_value() {
        let project = parse_project_str(&pom(
            "<properties><b>1</b><a>2</a><!-- c --><b>3</b><c/></properties>",
        ))
        .unwrap();
        let props = project.properties.unwrap();
        assert_eq!(
            props.iter().collect::<Vec<_>>(),
            vec![("b", "3"), ("a", "2"), ("c", "")]
        );
    }

    #[test]
    fn empty_properties_block_is_present() {
        let project = parse_project_str(&pom("<properties/>")).unwrap();
        assert!(project.properties.unwrap().is_empty());
    }

    #[test]
    fn build_base_fields_share_the_build_element() {
        let project = parse_project_str(&pom(
            "<build><sourceDirectory>src</sourceDirectory><finalName>app</finalName>\
             <plugins><plugin><artifactId>p</artifactId></plugin></plugins></build>",
        ))
        .unwrap();
        let build = project.build.unwrap();
        assert_eq!(build.source_directory, "src");
        assert_eq!(build.base.final_name, "app");
        assert_eq!(build.base.plugins.unwrap()[0].artifact_id, "p");
        assert_eq!(build.extensions, None);
    }

    #[test]
    fn configuration_is_kept_raw() {
        let project = parse_project_str(&pom(
            "<build><plugins><plugin><configuration combine.children=\"append\">\
             <source>17</source><items><item>a</item></items></configuration>\
             </plugin></plugins></build>",
        ))
        .unwrap();
        let plugins = project.build.unwrap().base.plugins.unwrap();
        let cfg = plugins[0].configuration.as_ref().unwrap();
        assert_eq!(cfg.children, "append");
        assert_eq!(cfg.self_, "");
        assert_eq!(cfg.raw, "<source>17</source><items><item>a</item></items>");
    }

    #[test]
    fn optional_stays_text() {
        let project = parse_project_str(&pom(
            "<dependencies><dependency><groupId>g</groupId><artifactId>a</artifactId>\
             <optional>true</optional></dependency></dependencies>",
        ))
        .unwrap();
        assert_eq!(project.dependencies.unwrap()[0].optional, "true");
    }

    #[test]
    fn rejects_invalid_boolean() {
        let err = parse_project_str(&pom(
            "<repositories><repository><uniqueVersion>sometimes</uniqueVersion></repository></repositories>",
        ))
        .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidBool { ref field, .. } if field == "uniqueVersion"));
    }

    #[test]
    fn rejects_wrong_root() {
        let err = parse_project_str("<settings></settings>").unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedRoot(ref n) if n == "settings"));
    }

    #[test]
    fn rejects_malformed_markup() {
        assert!(parse_project_str(&pom("<groupId>g</artifactId>")).is_err());
    }

    #[test]
    fn rejects_property_without_name() {
        let err = parse_project_str(&pom("<properties><>1</></properties>")).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidName(ref n) if n.is_empty()));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = parse_project_slice(&[0x3c, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, DecodeError::Utf8(_)));
    }

    #[test]
    fn skips_byte_order_mark() {
        let project = parse_project_str(&format!("\u{feff}{}", pom("<version>1</version>"))).unwrap();
        assert_eq!(project.version, "1");
    }

    #[test]
    fn reader_errors_are_surfaced() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk gone"))
            }
        }
        let err = parse_project_reader(Failing).unwrap_err();
        assert!(matches!(err, DecodeError::Io(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_project_file(dir.path().join("pom.xml")).unwrap_err();
        assert!(matches!(err, DecodeError::Io(_)));
    }
}
