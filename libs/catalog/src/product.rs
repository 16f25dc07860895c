//! Product value type.

use serde::{Deserialize, Serialize};

/// An immutable product record.
///
/// Equality and hashing are structural over all fields. On the wire the
/// category tag is serialized as `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Product {
    /// Unique catalog key
    pub id: String,
    /// Category tag
    #[serde(rename = "type")]
    pub product_type: String,
    /// Display label
    pub name: String,
    /// Schema/version tag
    pub version: String,
}

impl Product {
    /// Create a new product record.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        product_type: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            product_type: product_type.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}
