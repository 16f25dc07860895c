//! Property-based tests for the catalog.
//!
//! Tests validate:
//! - `list_all` returns every seeded product exactly once, in stable order
//! - `get_by_id` is total: present ids hit, absent ids return `None`

use catalog::{Catalog, Product};
use proptest::prelude::*;
use std::collections::BTreeSet;

// Strategy for generating product ids
fn id_strategy() -> impl Strategy<Value = String> {
    "[0-9]{2}"
}

// Strategy for generating products with distinct ids
fn product_set_strategy() -> impl Strategy<Value = Vec<Product>> {
    proptest::collection::btree_set(id_strategy(), 0..20).prop_map(|ids| {
        ids.into_iter()
            .map(|id| {
                let name = format!("Product {id}");
                Product::new(id, "CREDIT_CARD", name, "v1")
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every seeded product appears in `list_all` exactly once.
    #[test]
    fn prop_list_all_complete_and_duplicate_free(products in product_set_strategy()) {
        let catalog = Catalog::new(products.clone());
        let listed = catalog.list_all();

        prop_assert_eq!(listed.len(), products.len());

        let listed_ids: BTreeSet<&str> = listed.iter().map(|p| p.id.as_str()).collect();
        let seeded_ids: BTreeSet<&str> = products.iter().map(|p| p.id.as_str()).collect();
        prop_assert_eq!(listed_ids.len(), listed.len());
        prop_assert_eq!(listed_ids, seeded_ids);
    }

    /// `list_all` order is ascending by id and identical across calls.
    #[test]
    fn prop_list_all_order_stable(products in product_set_strategy()) {
        let catalog = Catalog::new(products);
        let first = catalog.list_all();
        let second = catalog.list_all();

        prop_assert!(first.windows(2).all(|pair| pair[0].id < pair[1].id));
        prop_assert_eq!(first, second);
    }

    /// `get_by_id` returns a product iff the id was seeded, never panics.
    #[test]
    fn prop_get_by_id_total(
        products in product_set_strategy(),
        probe in "[0-9a-z]{0,4}",
    ) {
        let catalog = Catalog::new(products.clone());
        let seeded = products.iter().any(|p| p.id == probe);

        prop_assert_eq!(catalog.get_by_id(&probe).is_some(), seeded);
    }
}
