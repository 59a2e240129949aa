//! Build-time JSON Schema generation for the stocktake inventory document.
//!
//! The pipeline is strictly linear:
//!
//! - [`introspect`]: reflect the registered metadata variants and the root
//!   document shape into named definitions
//! - [`merge`]: order the union alternatives for the `metadata` property
//! - [`assemble`]: merge all definitions into one document and rewrite
//!   `Package.metadata` into the union
//! - [`write`]: encode canonically and reconcile against the committed
//!   `schema-<version>.json`
//!
//! The committed artifact is treated as read-only unless absent: a
//! regeneration that differs is refused, so schema changes always go through
//! a version bump and review.

pub mod assemble;
pub mod introspect;
pub mod merge;
pub mod pipeline;
pub mod write;

// Re-export the registry so embedders can enumerate the union members.
pub use introspect::{VARIANT_REGISTRY, VariantShape};
