//! Property-based tests for deterministic union construction.
//!
//! These tests verify that:
//! - The union body is independent of the order names arrive in
//! - The null alternative always leads and the refs stay sorted
//! - Union size is always the distinct-name count plus one

use proptest::prelude::*;
use schemars::schema::Schema;
use stocktake_schema::merge::MetadataUnion;

/// Strategy to generate definition-name-like strings.
fn arb_definition_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[A-Z][A-Za-z0-9]{0,12}").unwrap(),
        0..8,
    )
}

fn ref_targets(union: &MetadataUnion) -> Vec<String> {
    union.alternatives[1..]
        .iter()
        .map(|schema| match schema {
            Schema::Object(obj) => obj.reference.clone().unwrap(),
            Schema::Bool(_) => panic!("boolean schema in union"),
        })
        .collect()
}

proptest! {
    /// Shuffled input produces the identical union.
    #[test]
    fn union_is_independent_of_input_order(names in arb_definition_names(), seed in any::<u64>()) {
        let mut shuffled = names.clone();
        // Deterministic shuffle keyed by the seed.
        shuffled.sort_by_key(|name| {
            name.bytes().fold(seed, |acc, b| acc.rotate_left(7) ^ u64::from(b))
        });

        let a = MetadataUnion::for_names(names);
        let b = MetadataUnion::for_names(shuffled);

        prop_assert_eq!(a.names, b.names);
        prop_assert_eq!(a.alternatives, b.alternatives);
    }

    /// The null alternative leads; the refs are sorted and deduplicated.
    #[test]
    fn union_shape_holds_for_any_names(names in arb_definition_names()) {
        let union = MetadataUnion::for_names(names.clone());

        let mut distinct = names;
        distinct.sort();
        distinct.dedup();

        prop_assert_eq!(union.alternatives.len(), distinct.len() + 1);
        prop_assert_eq!(
            serde_json::to_value(&union.alternatives[0]).unwrap(),
            serde_json::json!({"type": "null"})
        );

        let expected: Vec<String> = distinct
            .iter()
            .map(|name| format!("#/definitions/{name}"))
            .collect();
        prop_assert_eq!(ref_targets(&union), expected);
    }
}
