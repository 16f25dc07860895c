//! Catalog queries over the fixed product set.

use std::collections::BTreeMap;

use crate::product::Product;

/// Read-only mapping from product id to product.
///
/// Exclusively owns its records: there is no insert, update, or delete
/// path after construction. Alternate data sources (test seeds, contract
/// provider states) are injected by constructing a new value, never by
/// mutating a shared one.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<String, Product>,
}

impl Catalog {
    /// Build a catalog from a seed set.
    ///
    /// Later products win on duplicate ids, keeping keys unique.
    #[must_use]
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|product| (product.id.clone(), product))
                .collect(),
        }
    }

    /// Every product, in ascending-id order.
    ///
    /// The ordering carries no meaning but is stable across calls and
    /// process runs, which recorded contract expectations rely on.
    #[must_use]
    pub fn list_all(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// Look up a product by id. Absence is a normal outcome, not an error.
    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter)
    }
}
