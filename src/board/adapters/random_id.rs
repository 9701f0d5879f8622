//! Random identifier source.

use crate::board::domain::EntityId;
use crate::board::ports::IdSource;

/// Default identifier source drawing UUIDv4 values.
///
/// The space is large enough that collisions are negligible; no collision
/// check is performed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl RandomIdSource {
    /// Creates a random identifier source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdSource for RandomIdSource {
    fn next_id(&mut self) -> EntityId {
        EntityId::new()
    }
}
