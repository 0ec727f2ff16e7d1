//! Type-safe index identifiers.
//!
//! Every entity in the colony has a strongly-typed ID to prevent accidental
//! mixing of identifiers at compile time. IDs are dense indices: the entity
//! with id `n` lives at position `n` of its owning collection, and stays
//! there for the lifetime of the world (depleted deposits are never
//! removed).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around a collection index with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub usize);

        impl $name {
            /// Create an identifier for the entity at `index`.
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Return the collection index this identifier addresses.
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Identifier of a scout (explorer) agent.
    ScoutId
}

define_id! {
    /// Identifier of a forager (harvester) agent.
    ForagerId
}

define_id! {
    /// Identifier of a paper deposit; equal to its index in the deposit field.
    DepositId
}
