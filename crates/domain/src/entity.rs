//! Core building-block traits: value objects and entities.

use std::fmt::Debug;

/// Trait for value objects.
///
/// A value object is immutable and defined entirely by its attributes: two
/// instances with the same attributes are interchangeable. Construction
/// validates every invariant, so holding a value means holding a valid one.
pub trait ValueObject: Clone + PartialEq + Debug + Send + Sync {}

/// Trait for entities.
///
/// An entity carries an identity that is fixed at creation and survives any
/// change to its attributes. Equality of entities is equality of identity.
pub trait Entity {
    /// The identifier type.
    type Id: Clone + Eq + Debug;

    /// Returns the entity's identifier.
    fn id(&self) -> &Self::Id;

    /// Returns true if both entities share an identity.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
