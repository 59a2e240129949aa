use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The root document produced by an inventory run.
///
/// stocktake writes this as JSON. The committed `schema-<version>.json`
/// artifact is generated from these types, so shape changes here are gated
/// behind a schema version bump and review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InventoryDocument {
    /// Every package catalogued from the scanned source.
    pub artifacts: Vec<Package>,

    pub source: Source,

    /// Linux distribution detected on the scanned source, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distro: Option<Distro>,

    pub descriptor: Descriptor,
}

/// One catalogued package.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Package {
    pub name: String,

    pub version: String,

    pub kind: PackageKind,

    /// Name of the cataloger that found this package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_by: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Package URL (purl), when one can be derived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,

    /// Name of the registered shape carried in `metadata`, e.g. "ApkMetadata".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_type: Option<String>,

    /// Ecosystem-specific payload. Weakly typed here; the generated schema
    /// constrains it to null or one of the registered metadata shapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Package ecosystems stocktake can catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PackageKind {
    Apk,
    Deb,
    Gem,
    JavaArchive,
    Npm,
    Python,
    Rpm,
}

/// A file location a package was observed at.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    pub path: String,

    /// Container image layer the path came from, when scanning an image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_id: Option<String>,
}

/// What was scanned to produce the document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Source {
    pub kind: SourceKind,

    /// Image reference or directory path, depending on `kind`.
    pub target: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Directory,
    Image,
}

/// Linux distribution release information.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Distro {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_like: Option<String>,
}

/// Provenance of the tool run that produced the document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Descriptor {
    pub name: String,

    pub version: String,

    /// Version of the schema the document conforms to.
    pub schema_version: String,
}
