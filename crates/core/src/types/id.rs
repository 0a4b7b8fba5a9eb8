//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Catalog entities are
//! keyed by string slugs (e.g. `"indigo-wrap-dress"`), so the wrappers hold
//! a `String` rather than an integer.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```rust
/// # use begeto_core::define_id;
/// define_id!(ProductId);
/// define_id!(CreatorId);
///
/// let product_id = ProductId::new("indigo-wrap-dress");
/// let creator_id = CreatorId::new("amara-diallo");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = creator_id;
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
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
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

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(CreatorId);
define_id!(UserId);
define_id!(OrderId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_as_str() {
        let id = ProductId::new("indigo-wrap-dress");
        assert_eq!(id.as_str(), "indigo-wrap-dress");
    }

    #[test]
    fn test_display() {
        let id = CreatorId::new("amara-diallo");
        assert_eq!(format!("{id}"), "amara-diallo");
    }

    #[test]
    fn test_from_str_and_string() {
        let a = UserId::from("u-1");
        let b = UserId::from("u-1".to_owned());
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("kente-crown");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"kente-crown\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_ids_hash_distinctly() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(ProductId::new("a"));
        set.insert(ProductId::new("a"));
        set.insert(ProductId::new("b"));
        assert_eq!(set.len(), 2);
    }
}
