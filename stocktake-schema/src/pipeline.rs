//! The generation pipeline, from reflection to artifact reconciliation.
//!
//! I/O-agnostic: the read of the committed artifact and the single write go
//! through the [`ArtifactStore`] port, so the whole run is testable against
//! an in-memory store.

use anyhow::Context;
use camino::Utf8Path;
use schemars::schema::RootSchema;

use crate::assemble::assemble_document;
use crate::introspect::{self, VARIANT_REGISTRY};
use crate::merge::merge_variants;
use crate::write::{self, ArtifactStore, Reconciliation};

/// Builds the complete schema document for the current data model.
pub fn generate_document() -> anyhow::Result<RootSchema> {
    let definitions = introspect::variant_definitions()?;
    let merged = merge_variants(definitions, VARIANT_REGISTRY);
    let document = introspect::document_schema();
    assemble_document(document, merged).context("assemble schema document")
}

/// Generates the schema and reconciles it against the committed artifact.
pub fn run(store: &dyn ArtifactStore, path: &Utf8Path) -> anyhow::Result<Reconciliation> {
    let document = generate_document()?;
    let fresh = write::canonical_bytes(&document)?;
    write::reconcile(store, path, &fresh)
}
