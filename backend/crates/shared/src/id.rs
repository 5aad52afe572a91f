//! Common ID Types
//!
//! Type-safe wrappers for store-assigned integer identifiers.

use serde::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper around a store-assigned `SERIAL` value
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ContactId = Id<markers::Contact>;
/// let id = ContactId::from_i32(7);
/// assert_eq!(id.as_i32(), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: i32,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap a raw value assigned by the store
    pub const fn from_i32(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying value
    pub const fn as_i32(&self) -> i32 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i32> for Id<T> {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}

impl<T> From<Id<T>> for i32 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

// Serialized as the bare number so JSON bodies read `"id": 1`
impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value)
    }
}

#[cfg(feature = "sqlx")]
mod sqlx_impls {
    use super::Id;
    use sqlx::error::BoxDynError;
    use sqlx::postgres::{PgTypeInfo, PgValueRef};
    use sqlx::{Decode, Postgres, Type};

    impl<T> Type<Postgres> for Id<T> {
        fn type_info() -> PgTypeInfo {
            <i32 as Type<Postgres>>::type_info()
        }

        fn compatible(ty: &PgTypeInfo) -> bool {
            <i32 as Type<Postgres>>::compatible(ty)
        }
    }

    impl<'r, T> Decode<'r, Postgres> for Id<T> {
        fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
            Ok(Self::from_i32(<i32 as Decode<'r, Postgres>>::decode(value)?))
        }
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Contact IDs
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Contact;
}

/// Type aliases for common IDs
pub type ContactId = Id<markers::Contact>;
