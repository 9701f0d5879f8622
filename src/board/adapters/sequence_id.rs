//! Deterministic identifier source for tests.

use crate::board::domain::EntityId;
use crate::board::ports::IdSource;
use uuid::Uuid;

/// Identifier source yielding consecutive values from a counter.
///
/// Deterministic identifiers keep scenario tests reproducible; production
/// code uses [`super::RandomIdSource`] instead.
#[derive(Debug, Clone, Default)]
pub struct SequenceIdSource {
    next: u128,
}

impl SequenceIdSource {
    /// Creates a source counting up from zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }
}

impl IdSource for SequenceIdSource {
    fn next_id(&mut self) -> EntityId {
        let id = EntityId::from_uuid(Uuid::from_u128(self.next));
        self.next += 1;
        id
    }
}
