//! Ecosystem-specific package metadata shapes.
//!
//! Each type here is one alternative for the `metadata` field on
//! `document::Package`. The schema generator registers these shapes
//! explicitly (see the variant registry in `stocktake-schema`); adding a
//! shape means adding the type here and one registry entry there.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Alpine package entry from the apk installed database.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ApkMetadata {
    pub package: String,

    pub origin_package: String,

    pub maintainer: String,

    pub version: String,

    pub license: String,

    pub architecture: String,

    pub url: String,

    pub description: String,

    /// Compressed package size in bytes.
    pub size: i64,

    pub installed_size: i64,

    pub pull_checksum: String,

    pub git_commit_of_apk_port: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<ApkFileRecord>,
}

/// One file owned by an apk package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ApkFileRecord {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_uid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_gid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,
}

/// Debian package entry from the dpkg status database.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct DpkgMetadata {
    pub package: String,

    /// Source package, when it differs from the binary package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub version: String,

    pub architecture: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer: Option<String>,

    /// Installed size in kilobytes, as dpkg records it.
    pub installed_size: i64,
}

/// RubyGems package read from a gemspec.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GemMetadata {
    pub name: String,

    pub version: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

/// Java package discovered inside an archive (jar, war, ear).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct JavaMetadata {
    /// Path into nested archives, e.g. "lib/app.war:WEB-INF/lib/log.jar".
    pub virtual_path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<JavaManifest>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pom_properties: Option<PomProperties>,
}

/// Parsed META-INF/MANIFEST.MF contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct JavaManifest {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub main: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub named_sections: BTreeMap<String, BTreeMap<String, String>>,
}

/// Parsed pom.properties contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PomProperties {
    pub path: String,

    pub name: String,

    pub group_id: String,

    pub artifact_id: String,

    pub version: String,
}

/// npm package summarized from package.json.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct NpmPackageMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Installed Python distribution (egg-info or dist-info).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PythonPackageMetadata {
    pub name: String,

    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Directory the distribution is installed under (site-packages root).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_package_root_path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PythonFileRecord>,
}

/// One RECORD entry of an installed Python distribution.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PythonFileRecord {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<PythonFileDigest>,

    /// RECORD stores the size column as text; kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PythonFileDigest {
    pub algorithm: String,

    pub value: String,
}

/// RPM database entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RpmMetadata {
    pub name: String,

    pub version: String,

    pub epoch: i32,

    pub architecture: String,

    pub release: String,

    pub source_rpm: String,

    pub size: i64,

    pub license: String,

    pub vendor: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<RpmFileRecord>,
}

/// One file owned by an RPM package.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RpmFileRecord {
    pub path: String,

    pub mode: i32,

    pub size: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}
