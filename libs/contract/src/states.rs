//! Named provider states.
//!
//! A provider state is a precondition recorded alongside an interaction.
//! Each state produces a catalog snapshot; the verification harness
//! selects one by name and builds the provider around it before
//! replaying the recorded request.

use catalog::{Catalog, Product};
use thiserror::Error;

/// A recorded state name the harness does not know how to seed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown provider state: {0}")]
pub struct UnknownStateError(pub String);

/// The named preconditions recorded in the catalog contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderState {
    /// Products 09 and 10 are in the catalog.
    ProductsExist,
    /// The catalog is empty.
    NoProductsExist,
    /// Product 10 is in the catalog.
    ProductWithId10Exists,
    /// Product 11 is not in the catalog.
    ProductWithId11DoesNotExist,
}

impl ProviderState {
    /// Resolve a recorded state name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownStateError`] for names this harness has no seed
    /// for, so a new recorded state fails loudly instead of replaying
    /// against the wrong data.
    pub fn parse(name: &str) -> Result<Self, UnknownStateError> {
        match name {
            "products exist" => Ok(Self::ProductsExist),
            "no products exist" => Ok(Self::NoProductsExist),
            "product with ID 10 exists" => Ok(Self::ProductWithId10Exists),
            "product with ID 11 does not exist" => Ok(Self::ProductWithId11DoesNotExist),
            other => Err(UnknownStateError(other.to_string())),
        }
    }

    /// The recorded name of this state.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ProductsExist => "products exist",
            Self::NoProductsExist => "no products exist",
            Self::ProductWithId10Exists => "product with ID 10 exists",
            Self::ProductWithId11DoesNotExist => "product with ID 11 does not exist",
        }
    }

    /// The catalog snapshot this state seeds.
    #[must_use]
    pub fn catalog(self) -> Catalog {
        match self {
            Self::ProductsExist => Catalog::new([
                Product::new("09", "CREDIT_CARD", "Gem Visa", "v1"),
                Product::new("10", "CREDIT_CARD", "28 Degrees", "v1"),
            ]),
            Self::NoProductsExist | Self::ProductWithId11DoesNotExist => Catalog::new([]),
            Self::ProductWithId10Exists => {
                Catalog::new([Product::new("10", "CREDIT_CARD", "28 Degrees", "v1")])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_states() {
        assert_eq!(
            ProviderState::parse("products exist").unwrap(),
            ProviderState::ProductsExist
        );
        assert_eq!(
            ProviderState::parse("product with ID 10 exists").unwrap(),
            ProviderState::ProductWithId10Exists
        );
    }

    #[test]
    fn test_parse_round_trips_names() {
        for state in [
            ProviderState::ProductsExist,
            ProviderState::NoProductsExist,
            ProviderState::ProductWithId10Exists,
            ProviderState::ProductWithId11DoesNotExist,
        ] {
            assert_eq!(ProviderState::parse(state.name()).unwrap(), state);
        }
    }

    #[test]
    fn test_unknown_state_rejected() {
        let err = ProviderState::parse("martians exist").unwrap_err();
        assert_eq!(err, UnknownStateError("martians exist".to_string()));
    }

    #[test]
    fn test_seeded_catalogs() {
        assert_eq!(ProviderState::ProductsExist.catalog().len(), 2);
        assert!(ProviderState::NoProductsExist.catalog().is_empty());
        assert!(
            ProviderState::ProductWithId11DoesNotExist
                .catalog()
                .get_by_id("11")
                .is_none()
        );

        let single = ProviderState::ProductWithId10Exists.catalog();
        assert_eq!(single.len(), 1);
        assert_eq!(single.get_by_id("10").unwrap().name, "28 Degrees");
    }
}
