//! Drag coordinator state machine states.

use crate::board::domain::{Card, Column};
use serde::{Deserialize, Serialize};

/// Coordinator state between gesture events.
///
/// The dragging states hold a snapshot of the entity taken when the drag
/// started; the overlay presents that snapshot while the live sequences
/// keep changing underneath it. Any end event returns to [`Self::Idle`]
/// unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A column is being dragged.
    DraggingColumn(Column),
    /// A card is being dragged.
    DraggingCard(Card),
}

impl DragState {
    /// Returns whether a drag is currently in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
