//! Identifier generation port.

use crate::board::domain::EntityId;

#[cfg(test)]
use mockall::automock;

/// Source of fresh entity identifiers.
///
/// Identifier generation sits behind a port so production code can draw
/// from a random space while tests substitute a deterministic source.
#[cfg_attr(test, automock)]
pub trait IdSource {
    /// Returns the next fresh identifier.
    fn next_id(&mut self) -> EntityId;
}
