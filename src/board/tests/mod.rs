//! Unit tests for the board module.
//!
//! Tests are organised by concern: entity transformations, relocation
//! and reparenting, and frame projection.


use crate::board::domain::EntityId;
use uuid::Uuid;

/// Shorthand for a deterministic identifier.
pub(crate) fn id(n: u128) -> EntityId {
    EntityId::from_uuid(Uuid::from_u128(n))
}
