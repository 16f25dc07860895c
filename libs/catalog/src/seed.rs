//! Seed data for the production catalog.

use crate::product::Product;
use crate::repository::Catalog;

/// The fixed product set served in production.
#[must_use]
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new("09", "CREDIT_CARD", "Gem Visa", "v1"),
        Product::new("10", "CREDIT_CARD", "28 Degrees", "v1"),
        Product::new("11", "PERSONAL_LOAN", "MyFlexiPay", "v2"),
    ]
}

/// Catalog over [`default_products`].
#[must_use]
pub fn default_catalog() -> Catalog {
    Catalog::new(default_products())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_contents() {
        let catalog = default_catalog();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get_by_id("09").unwrap().name, "Gem Visa");
        assert_eq!(catalog.get_by_id("11").unwrap().product_type, "PERSONAL_LOAN");
    }
}
