//! Selection and ordering of the union alternatives for `Package.metadata`.

use schemars::Map;
use schemars::schema::{InstanceType, Schema, SchemaObject};

use crate::introspect::VariantShape;

/// Ordered union body for the `metadata` property.
#[derive(Debug, Clone)]
pub struct MetadataUnion {
    /// Sorted, deduplicated variant definition names.
    pub names: Vec<String>,
    /// The null alternative first, then one `$ref` per name.
    pub alternatives: Vec<Schema>,
}

impl MetadataUnion {
    /// Builds the union body for a set of variant definition names.
    ///
    /// The sort is load-bearing: the union is the one serialized sequence
    /// not backed by a sorted map, so this is what keeps the artifact
    /// byte-stable across runs.
    pub fn for_names(mut names: Vec<String>) -> Self {
        names.sort_unstable();
        names.dedup();

        let mut alternatives = Vec::with_capacity(names.len() + 1);
        alternatives.push(absent_alternative());
        alternatives.extend(names.iter().map(|name| reference_alternative(name)));
        Self { names, alternatives }
    }
}

/// Output of the merge stage.
#[derive(Debug, Clone)]
pub struct MergedVariants {
    /// Every reflected definition to carry into the root document, union
    /// members and the record shapes they reference alike.
    pub definitions: Map<String, Schema>,
    /// The union body for the `metadata` property.
    pub union: MetadataUnion,
}

/// Pairs the harvested definitions with the union over the registry members.
///
/// Selection is by registry membership only: harvested definitions that are
/// not registered (nested record shapes) are merged into the document but
/// never become union alternatives.
pub fn merge_variants(
    definitions: Map<String, Schema>,
    registry: &[VariantShape],
) -> MergedVariants {
    let names = registry.iter().map(|shape| shape.name.to_string()).collect();
    MergedVariants {
        definitions,
        union: MetadataUnion::for_names(names),
    }
}

/// `{"type": "null"}`: the field may be absent.
fn absent_alternative() -> Schema {
    Schema::Object(SchemaObject {
        instance_type: Some(InstanceType::Null.into()),
        ..Default::default()
    })
}

fn reference_alternative(name: &str) -> Schema {
    Schema::Object(SchemaObject::new_ref(format!("#/definitions/{name}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::introspect::VARIANT_REGISTRY;

    fn ref_target(schema: &Schema) -> &str {
        match schema {
            Schema::Object(obj) => obj.reference.as_deref().expect("reference alternative"),
            Schema::Bool(_) => panic!("boolean schema in union"),
        }
    }

    #[test]
    fn union_has_one_alternative_per_name_plus_absent() {
        let union = MetadataUnion::for_names(vec![
            "BetaMetadata".to_string(),
            "AlphaMetadata".to_string(),
        ]);

        assert_eq!(union.alternatives.len(), 3);
        assert_eq!(
            serde_json::to_value(&union.alternatives[0]).expect("serialize"),
            serde_json::json!({"type": "null"})
        );
        assert_eq!(ref_target(&union.alternatives[1]), "#/definitions/AlphaMetadata");
        assert_eq!(ref_target(&union.alternatives[2]), "#/definitions/BetaMetadata");
    }

    #[test]
    fn union_sorts_and_deduplicates_names() {
        let union = MetadataUnion::for_names(vec![
            "Gamma".to_string(),
            "Alpha".to_string(),
            "Gamma".to_string(),
        ]);
        assert_eq!(union.names, vec!["Alpha", "Gamma"]);
        assert_eq!(union.alternatives.len(), 3);
    }

    #[test]
    fn empty_name_set_yields_only_the_absent_alternative() {
        let union = MetadataUnion::for_names(vec![]);
        assert!(union.names.is_empty());
        assert_eq!(union.alternatives.len(), 1);
        assert_eq!(
            serde_json::to_value(&union.alternatives[0]).expect("serialize"),
            serde_json::json!({"type": "null"})
        );
    }

    #[test]
    fn merge_selects_registry_members_only() {
        let mut definitions = Map::new();
        definitions.insert("UnregisteredMetadata".to_string(), Schema::Bool(true));

        let merged = merge_variants(definitions, VARIANT_REGISTRY);

        // Carried along for the merge, but never an alternative.
        assert!(merged.definitions.contains_key("UnregisteredMetadata"));
        assert_eq!(merged.union.alternatives.len(), VARIANT_REGISTRY.len() + 1);
        assert!(!merged.union.names.contains(&"UnregisteredMetadata".to_string()));
    }
}
