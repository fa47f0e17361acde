//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. The mock dataset
//! uses human-readable string IDs ("1", "ORD-001", "r12"), so IDs wrap
//! `String` rather than an integer.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use solestore_core::define_id;
/// define_id!(WishlistId);
///
/// let id = WishlistId::new("w1");
/// assert_eq!(id.as_str(), "w1");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from anything string-like.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(VariantId);
define_id!(CartItemId);
define_id!(OrderId);
define_id!(OrderItemId);
define_id!(ReviewId);
define_id!(UserId);

impl VariantId {
    /// Build the composite variant key for a product + color + size choice.
    ///
    /// The key is lowercased with spaces and slashes collapsed to dashes, so
    /// the same selection always maps to the same cart line.
    #[must_use]
    pub fn compose(product_id: &ProductId, color: &str, size: &str) -> Self {
        let normalize = |s: &str| {
            s.to_lowercase()
                .chars()
                .map(|c| if c == ' ' || c == '/' { '-' } else { c })
                .collect::<String>()
        };
        Self::new(format!(
            "{}-{}-{}",
            product_id.as_str(),
            normalize(color),
            normalize(size)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        let id = ProductId::new("42");
        assert_eq!(id.as_str(), "42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(ProductId::from("42"), id);
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // ProductId and OrderId share a representation but not a type;
        // equality is only defined within a type.
        let product = ProductId::new("1");
        let clone = product.clone();
        assert_eq!(product, clone);
    }

    #[test]
    fn test_variant_compose_normalizes() {
        let variant = VariantId::compose(&ProductId::new("1"), "Black/White", "10");
        assert_eq!(variant.as_str(), "1-black-white-10");

        let same = VariantId::compose(&ProductId::new("1"), "black/white", "10");
        assert_eq!(variant, same);
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = OrderId::new("ORD-001");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"ORD-001\"");
        let back: OrderId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
