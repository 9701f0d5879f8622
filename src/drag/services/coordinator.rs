//! Drag coordinator: classifies gestures and resolves their effect.

use crate::board::domain::Board;
use crate::drag::domain::{DragEnd, DragItem, DragOver, DragStart, DragState};
use log::trace;

/// State machine driving drag gestures over a board.
///
/// The coordinator never mutates sequences itself: resolution is
/// delegated to the pure transformations on [`Board`], and every
/// unresolvable combination returns the board unchanged. "Not found" is
/// not an error state here, only a reason to leave things alone.
#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    state: DragState,
}

impl DragCoordinator {
    /// Creates an idle coordinator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current gesture state.
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Enters a dragging state, snapshotting the picked-up entity for
    /// overlay presentation.
    ///
    /// An identifier not present in the board leaves the coordinator
    /// idle.
    pub fn handle_start(&mut self, board: &Board, event: &DragStart) {
        self.state = match event.item {
            DragItem::Column(id) => board
                .column(id)
                .cloned()
                .map_or(DragState::Idle, DragState::DraggingColumn),
            DragItem::Card(id) => board
                .card(id)
                .cloned()
                .map_or(DragState::Idle, DragState::DraggingCard),
        };
        if !self.state.is_dragging() {
            trace!("drag start ignored: {} not on the board", event.item.id());
        }
    }

    /// Resolves an over event against the board.
    ///
    /// Dragging a card over another card reparents it to the target's
    /// column and moves it to the target's position, live, on every over
    /// event; there is no staging and no rollback at drag-end. A card
    /// over a column body, and any column over-movement, changes nothing.
    #[must_use]
    pub fn handle_over(&self, board: &Board, event: &DragOver) -> Board {
        match (event.active, event.over) {
            (DragItem::Card(active), Some(DragItem::Card(over))) if active != over => {
                board.reparent_card(active, over)
            }
            _ => {
                trace!("drag over ignored: {:?} -> {:?}", event.active, event.over);
                board.clone()
            }
        }
    }

    /// Resolves an end event against the board and returns to idle.
    ///
    /// Only column-onto-column drops reorder anything here; card
    /// movement has already been applied by the over events, so the card
    /// arm is an intentional no-op rather than a failed lookup.
    #[must_use]
    pub fn handle_end(&mut self, board: &Board, event: &DragEnd) -> Board {
        self.state = DragState::Idle;
        match (event.active, event.over) {
            (DragItem::Column(active), Some(DragItem::Column(over))) if active != over => {
                board.relocate_column(active, over)
            }
            (DragItem::Card(_), _) => board.clone(),
            _ => {
                trace!("drag end ignored: {:?} -> {:?}", event.active, event.over);
                board.clone()
            }
        }
    }
}
