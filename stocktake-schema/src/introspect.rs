//! Reflection of the data model into named schema definitions.
//!
//! Registration is explicit: [`VARIANT_REGISTRY`] is the closed list of
//! shapes the `metadata` field may carry. Nothing is discovered by naming
//! convention or at runtime. Extending the union means adding a type to
//! `stocktake_types::metadata` and one entry here.

use schemars::r#gen::{SchemaGenerator, SchemaSettings};
use schemars::schema::{RootSchema, Schema};
use schemars::{JsonSchema, Map};
use stocktake_types::document::InventoryDocument;
use stocktake_types::metadata::{
    ApkMetadata, DpkgMetadata, GemMetadata, JavaMetadata, NpmPackageMetadata,
    PythonPackageMetadata, RpmMetadata,
};
use thiserror::Error;
use tracing::debug;

/// One registered alternative for the `metadata` field.
#[derive(Debug, Clone, Copy)]
pub struct VariantShape {
    /// Definition name the shape reflects to, e.g. "ApkMetadata".
    pub name: &'static str,
    /// Adds the shape, and every named shape it references, to a generator.
    pub register: fn(&mut SchemaGenerator),
}

/// Closed registry of metadata variants. Keep alphabetical.
pub static VARIANT_REGISTRY: &[VariantShape] = &[
    VariantShape {
        name: "ApkMetadata",
        register: register::<ApkMetadata>,
    },
    VariantShape {
        name: "DpkgMetadata",
        register: register::<DpkgMetadata>,
    },
    VariantShape {
        name: "GemMetadata",
        register: register::<GemMetadata>,
    },
    VariantShape {
        name: "JavaMetadata",
        register: register::<JavaMetadata>,
    },
    VariantShape {
        name: "NpmPackageMetadata",
        register: register::<NpmPackageMetadata>,
    },
    VariantShape {
        name: "PythonPackageMetadata",
        register: register::<PythonPackageMetadata>,
    },
    VariantShape {
        name: "RpmMetadata",
        register: register::<RpmMetadata>,
    },
];

fn register<T: JsonSchema>(generator: &mut SchemaGenerator) {
    generator.subschema_for::<T>();
}

fn draft07_generator() -> SchemaGenerator {
    SchemaSettings::draft07().into_generator()
}

/// A registered shape did not reflect to a definition under its own name.
#[derive(Debug, Error)]
#[error("variant `{name}` missing from reflected definitions; the registry and the data model have drifted")]
pub struct MissingVariant {
    pub name: &'static str,
}

/// Reflects every registered variant shape in one pass.
///
/// Returns the full harvested definitions map: the registry members plus
/// every named shape they reference (file records, manifests, and so on),
/// each keyed by its type name and deduplicated by construction.
pub fn variant_definitions() -> Result<Map<String, Schema>, MissingVariant> {
    let mut generator = draft07_generator();
    for shape in VARIANT_REGISTRY {
        (shape.register)(&mut generator);
    }
    let definitions = generator.take_definitions();

    for shape in VARIANT_REGISTRY {
        if !definitions.contains_key(shape.name) {
            return Err(MissingVariant { name: shape.name });
        }
    }
    debug!(
        definitions = definitions.len(),
        variants = VARIANT_REGISTRY.len(),
        "reflected variant shapes"
    );
    Ok(definitions)
}

/// Reflects the root output-document shape, harvesting its own structural
/// definitions (`Package`, `Source`, and so on) along the way.
pub fn document_schema() -> RootSchema {
    draft07_generator().into_root_schema_for::<InventoryDocument>()
}
