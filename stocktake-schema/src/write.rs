//! Canonical encoding and the diff-guarded artifact write.
//!
//! The committed `schema-<version>.json` is the durable state. Reconciling
//! against it goes through the [`ArtifactStore`] port so the state machine
//! is testable without a filesystem.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io::ErrorKind;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use schemars::schema::RootSchema;
use stocktake_types::schema::JSON_SCHEMA_VERSION;
use tracing::debug;

/// Filename the artifact is written to, e.g. `schema-1.0.2.json`.
///
/// Relative on purpose: the binary resolves it against its working
/// directory, which is the only location the generator touches.
pub fn schema_filename() -> Utf8PathBuf {
    Utf8PathBuf::from(format!("schema-{JSON_SCHEMA_VERSION}.json"))
}

/// Serializes the assembled document to its canonical bytes.
///
/// Two-space indentation, no trailing newline. serde_json never HTML-escapes,
/// so `<` and `>` in descriptions stay literal. Every serialized map is
/// BTreeMap-backed and the union body is pre-sorted, so repeated runs over
/// the same model are byte-identical.
pub fn canonical_bytes(document: &RootSchema) -> anyhow::Result<Vec<u8>> {
    let text = serde_json::to_string_pretty(document).context("encode schema document")?;
    Ok(text.into_bytes())
}

/// Store the reconciliation reads and writes through.
pub trait ArtifactStore {
    /// Contents of the artifact at `path`, or `None` if absent.
    fn read(&self, path: &Utf8Path) -> anyhow::Result<Option<Vec<u8>>>;
    fn write(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
}

/// Real filesystem store used by the binary.
#[derive(Debug, Clone, Default)]
pub struct FsArtifactStore;

impl ArtifactStore for FsArtifactStore {
    fn read(&self, path: &Utf8Path) -> anyhow::Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("read existing schema {path}")),
        }
    }

    fn write(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        fs::write(path, contents).with_context(|| format!("write schema {path}"))
    }
}

/// In-memory store for embedding and testing.
#[derive(Debug, Default)]
pub struct InMemoryArtifactStore {
    files: RefCell<BTreeMap<Utf8PathBuf, Vec<u8>>>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an artifact, as if a previous run had committed it.
    pub fn seed(&self, path: impl Into<Utf8PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(path.into(), contents.into());
    }

    pub fn contents(&self, path: &Utf8Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }
}

impl ArtifactStore for InMemoryArtifactStore {
    fn read(&self, path: &Utf8Path) -> anyhow::Result<Option<Vec<u8>>> {
        Ok(self.files.borrow().get(path).cloned())
    }

    fn write(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        self.files
            .borrow_mut()
            .insert(path.to_owned(), contents.to_vec());
        Ok(())
    }
}

/// How freshly generated bytes reconciled against the committed artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// No artifact existed; the new one was written.
    Written,
    /// The artifact already matches byte for byte. Nothing was written.
    Unchanged,
    /// The artifact differs from the generated bytes. Nothing was written;
    /// overwriting a committed schema without a version bump is refused.
    Drift,
}

/// Reconciles `fresh` against whatever is committed at `path`.
///
/// The only write happens when no artifact exists, and the full buffer is
/// already in memory by then. Equality is raw byte comparison.
pub fn reconcile(
    store: &dyn ArtifactStore,
    path: &Utf8Path,
    fresh: &[u8],
) -> anyhow::Result<Reconciliation> {
    match store.read(path)? {
        None => {
            store.write(path, fresh)?;
            debug!(path = path.as_str(), bytes = fresh.len(), "wrote schema artifact");
            Ok(Reconciliation::Written)
        }
        Some(existing) if existing.as_slice() == fresh => Ok(Reconciliation::Unchanged),
        Some(_) => Ok(Reconciliation::Drift),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemars::schema::{Metadata, SchemaObject};

    fn document_with_description(description: &str) -> RootSchema {
        let mut schema = SchemaObject::default();
        schema.metadata = Some(Box::new(Metadata {
            description: Some(description.to_string()),
            ..Default::default()
        }));
        RootSchema {
            schema,
            ..Default::default()
        }
    }

    #[test]
    fn filename_carries_the_baked_in_version() {
        assert_eq!(
            schema_filename().as_str(),
            format!("schema-{JSON_SCHEMA_VERSION}.json")
        );
    }

    #[test]
    fn encoding_uses_two_space_indent_and_literal_angle_brackets() {
        let document = document_with_description("maps name <-> version");
        let bytes = canonical_bytes(&document).expect("encode");
        let text = String::from_utf8(bytes).expect("utf-8");

        assert!(text.contains("maps name <-> version"));
        assert!(!text.contains("\\u003c"));
        assert!(text.starts_with("{\n  \""));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn encoding_is_stable_across_calls() {
        let document = document_with_description("stable");
        let first = canonical_bytes(&document).expect("encode");
        let second = canonical_bytes(&document).expect("encode");
        assert_eq!(first, second);
    }

    #[test]
    fn absent_artifact_is_written_once() {
        let store = InMemoryArtifactStore::new();
        let path = Utf8Path::new("schema-test.json");

        let outcome = reconcile(&store, path, b"{}").expect("reconcile");
        assert_eq!(outcome, Reconciliation::Written);
        assert_eq!(store.contents(path), Some(b"{}".to_vec()));
    }

    #[test]
    fn matching_artifact_is_left_alone() {
        let store = InMemoryArtifactStore::new();
        let path = Utf8Path::new("schema-test.json");
        store.seed(path, b"{}".to_vec());

        let outcome = reconcile(&store, path, b"{}").expect("reconcile");
        assert_eq!(outcome, Reconciliation::Unchanged);
    }

    #[test]
    fn differing_artifact_is_refused_and_untouched() {
        let store = InMemoryArtifactStore::new();
        let path = Utf8Path::new("schema-test.json");
        store.seed(path, b"{\"old\": true}".to_vec());

        let outcome = reconcile(&store, path, b"{}").expect("reconcile");
        assert_eq!(outcome, Reconciliation::Drift);
        assert_eq!(store.contents(path), Some(b"{\"old\": true}".to_vec()));
    }
}
