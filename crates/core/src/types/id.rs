//! Newtype IDs for type-safe entity references.
//!
//! Entity identifiers are opaque strings carrying a kind-specific prefix
//! (`ORD-`, `TKT-`, `CUST-`). The wrappers keep order, ticket, and customer
//! IDs from being mixed up at compile time; they do not validate the prefix
//! format - callers are responsible for generating conforming values.

/// Macro to define a type-safe ID wrapper around a prefixed string.
///
/// Creates a newtype with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>` and `From<String>` implementations
///
/// # Example
///
/// ```
/// use coralbay_core::{CustomerId, OrderId};
///
/// let order_id = OrderId::new("ORD-001");
/// let customer_id = CustomerId::new("CUST-123");
///
/// // These are different types, so this won't compile:
/// // let _: OrderId = customer_id;
/// ```
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Conventional prefix for this ID kind.
            pub const PREFIX: &'static str = $prefix;

            /// Wrap a raw identifier string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The identifier as a string slice.
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

define_id!(OrderId, "ORD-");
define_id!(TicketId, "TKT-");
define_id!(CustomerId, "CUST-");

impl TicketId {
    /// Build a ticket ID from a sequence ordinal.
    ///
    /// Ordinals are rendered zero-padded to three digits (`TKT-007` for 7);
    /// larger ordinals widen naturally (`TKT-1234`).
    #[must_use]
    pub fn from_seq(seq: u32) -> Self {
        Self(format!("{}{seq:03}", Self::PREFIX))
    }
}
