//! Serialized output model (schemas-as-code) for the stocktake workspace.
//!
//! # Design constraints
//! - These types define the on-disk inventory document format.
//! - Be conservative with breaking changes.
//! - Any change to the serialized shape requires a
//!   [`schema::JSON_SCHEMA_VERSION`] bump, or the generator will refuse to
//!   overwrite the committed artifact.

pub mod document;
pub mod metadata;

/// Schema identifiers.
pub mod schema {
    /// Version of the generated JSON Schema artifact (`schema-<version>.json`).
    pub const JSON_SCHEMA_VERSION: &str = "1.0.2";
}
