use crate::build::{Build, Configuration, Reporting};
use crate::dependency::{Dependency, DependencyManagement};
use crate::profile::Profile;
use crate::properties::Properties;
use crate::repository::{PluginRepository, Repository};
use serde::{Deserialize, Serialize};

/// Root of a decoded POM.
///
/// The namespace attributes come in two spellings. Decoding fills `xsi` and
/// `schema_location`; encoding only writes `xmlns_xsi` and
/// `xsi_schema_location`. [`Project::qualify_root_attributes`] moves values
/// from the former to the latter and runs before every encode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub xmlns: String,
    pub xsi: String,
    pub xmlns_xsi: String,
    pub schema_location: String,
    pub xsi_schema_location: String,

    pub model_version: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub inception_year: String,
    pub organization: Option<Organization>,
    pub licenses: Option<Vec<License>>,
    pub developers: Option<Vec<Developer>>,
    pub contributors: Option<Vec<Contributor>>,
    pub mailing_lists: Option<Vec<MailingList>>,
    pub prerequisites: Option<Prerequisites>,
    pub properties: Option<Properties>,
    pub parent: Option<Parent>,
    pub modules: Option<Vec<String>>,
    pub scm: Option<Scm>,
    pub issue_management: Option<IssueManagement>,
    pub ci_management: Option<CiManagement>,
    pub distribution_management: Option<DistributionManagement>,
    pub dependency_management: Option<DependencyManagement>,
    pub dependencies: Option<Vec<Dependency>>,
    pub repositories: Option<Vec<Repository>>,
    pub plugin_repositories: Option<Vec<PluginRepository>>,
    pub build: Option<Build>,
    pub reporting: Option<Reporting>,
    pub profiles: Option<Vec<Profile>>,
}

impl Project {
    /// Move decode-side root attributes into their namespace-qualified
    /// counterparts and clear the originals.
    ///
    /// Empty decode-side values are left alone so a second call does not wipe
    /// the qualified values written by the first.
    pub fn qualify_root_attributes(&mut self) {
        if !self.schema_location.is_empty() {
            self.xsi_schema_location = std::mem::take(&mut self.schema_location);
        }
        if !self.xsi.is_empty() {
            self.xmlns_xsi = std::mem::take(&mut self.xsi);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parent {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub relative_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Organization {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct License {
    pub name: String,
    pub url: String,
    pub distribution: String,
    pub comments: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Developer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub url: String,
    pub organization: String,
    pub organization_url: String,
    pub roles: Option<Vec<String>>,
    pub timezone: String,
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contributor {
    pub name: String,
    pub email: String,
    pub url: String,
    pub organization: String,
    pub organization_url: String,
    pub roles: Option<Vec<String>>,
    pub timezone: String,
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MailingList {
    pub name: String,
    pub subscribe: String,
    pub unsubscribe: String,
    pub post: String,
    pub archive: String,
    pub other_archives: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Prerequisites {
    pub maven: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scm {
    pub connection: String,
    pub developer_connection: String,
    pub tag: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IssueManagement {
    pub system: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CiManagement {
    pub system: String,
    pub url: String,
    pub notifiers: Option<Vec<Notifier>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Notifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub send_on_error: bool,
    pub send_on_failure: bool,
    pub send_on_success: bool,
    pub send_on_warning: bool,
    pub address: String,
    pub configuration: Option<Configuration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DistributionManagement {
    pub repository: Option<Repository>,
    pub snapshot_repository: Option<Repository>,
    pub site: Option<Site>,
    pub download_url: String,
    pub relocation: Option<Relocation>,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Relocation {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub message: String,
}
