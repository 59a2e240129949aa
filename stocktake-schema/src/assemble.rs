//! Assembly of the final schema document.
//!
//! Merges the variant definitions into the reflected document schema and
//! rewrites the `metadata` property of the `Package` definition into the
//! anyOf union. Pure in-memory mutation; encoding and I/O live in
//! [`crate::write`].

use std::collections::btree_map::Entry;

use schemars::schema::{RootSchema, Schema, SchemaObject, SubschemaValidation};
use thiserror::Error;
use tracing::debug;

use crate::merge::{MergedVariants, MetadataUnion};

/// Assembly failures. Each one means the data model and the generator have
/// drifted apart; the build must stop rather than emit a schema that no
/// longer matches what the tool serializes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssembleError {
    /// The same definition name reflected to two different fragments.
    #[error("definition `{name}` reflected to two different shapes")]
    ConflictingDefinition { name: String },

    #[error("document schema has no `Package` definition")]
    MissingPackage,

    #[error("`Package` definition is not an object schema")]
    PackageNotAnObject,

    #[error("`Package` definition has no `metadata` property")]
    MissingMetadataProperty,
}

/// Merges `merged` into `document` and rewrites `Package.metadata`.
///
/// A name collision is accepted only when both sides reflected an identical
/// fragment (the same shape reached from both roots); differing fragments
/// are an error.
pub fn assemble_document(
    mut document: RootSchema,
    merged: MergedVariants,
) -> Result<RootSchema, AssembleError> {
    let MergedVariants { definitions, union } = merged;

    for (name, definition) in definitions {
        match document.definitions.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(definition);
            }
            Entry::Occupied(existing) => {
                if *existing.get() != definition {
                    return Err(AssembleError::ConflictingDefinition {
                        name: existing.key().clone(),
                    });
                }
            }
        }
    }

    rewrite_metadata_property(&mut document, union)?;
    Ok(document)
}

fn rewrite_metadata_property(
    document: &mut RootSchema,
    union: MetadataUnion,
) -> Result<(), AssembleError> {
    let package = document
        .definitions
        .get_mut("Package")
        .ok_or(AssembleError::MissingPackage)?;
    let Schema::Object(package) = package else {
        return Err(AssembleError::PackageNotAnObject);
    };
    let Some(object) = package.object.as_deref_mut() else {
        return Err(AssembleError::PackageNotAnObject);
    };
    let Some(slot) = object.properties.get_mut("metadata") else {
        return Err(AssembleError::MissingMetadataProperty);
    };

    debug!(variants = union.names.len(), "rewriting metadata property");
    *slot = union_schema(union.alternatives);
    Ok(())
}

fn union_schema(alternatives: Vec<Schema>) -> Schema {
    Schema::Object(SchemaObject {
        subschemas: Some(Box::new(SubschemaValidation {
            any_of: Some(alternatives),
            ..Default::default()
        })),
        ..Default::default()
    })
}
