//! Board engine: the explicit state container behind the UI.
//!
//! The engine owns the board and the drag coordinator, exposes the
//! gesture-level API, and pushes a derived frame to the presenter after
//! every handled event. Data flows one way: event → pure transformation →
//! new board value → presented frame.

use crate::board::domain::{Board, EntityId};
use crate::board::ports::{BoardPresenter, IdSource};
use crate::board::services::BoardFrame;
use crate::drag::domain::{DragEnd, DragOver, DragStart};
use crate::drag::services::DragCoordinator;
use log::debug;

#[cfg(test)]
mod tests;

/// State container wiring gestures to board transformations and frames.
pub struct BoardEngine<I, P>
where
    I: IdSource,
    P: BoardPresenter,
{
    board: Board,
    coordinator: DragCoordinator,
    ids: I,
    presenter: P,
}

impl<I, P> BoardEngine<I, P>
where
    I: IdSource,
    P: BoardPresenter,
{
    /// Creates an engine over an empty board.
    #[must_use]
    pub fn new(ids: I, presenter: P) -> Self {
        Self {
            board: Board::new(),
            coordinator: DragCoordinator::new(),
            ids,
            presenter,
        }
    }

    /// Creates an engine over an existing board.
    #[must_use]
    pub fn with_board(board: Board, ids: I, presenter: P) -> Self {
        Self {
            board,
            coordinator: DragCoordinator::new(),
            ids,
            presenter,
        }
    }

    /// Returns the current board state.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Appends a new column and returns its identifier.
    pub fn create_column(&mut self) -> EntityId {
        let id = self.ids.next_id();
        debug!("create column {id}");
        self.commit(self.board.create_column(id));
        id
    }

    /// Deletes a column; its cards are left orphaned.
    pub fn delete_column(&mut self, id: EntityId) {
        debug!("delete column {id}");
        self.commit(self.board.delete_column(id));
    }

    /// Commits an inline title edit.
    pub fn rename_column(&mut self, id: EntityId, title: &str) {
        debug!("rename column {id}");
        self.commit(self.board.rename_column(id, title));
    }

    /// Appends a new card to the given column and returns its identifier.
    pub fn create_card(&mut self, column_id: EntityId) -> EntityId {
        let id = self.ids.next_id();
        debug!("create card {id} in column {column_id}");
        self.commit(self.board.create_card(id, column_id));
        id
    }

    /// Deletes a card.
    pub fn delete_card(&mut self, id: EntityId) {
        debug!("delete card {id}");
        self.commit(self.board.delete_card(id));
    }

    /// Commits an inline content edit.
    pub fn update_card(&mut self, id: EntityId, content: &str) {
        debug!("update card {id}");
        self.commit(self.board.update_card(id, content));
    }

    /// Handles a drag-start event: snapshots the dragged entity and
    /// presents the overlay.
    pub fn handle_drag_start(&mut self, event: &DragStart) {
        self.coordinator.handle_start(&self.board, event);
        self.present();
    }

    /// Handles a drag-over event: applies card reparenting/reordering
    /// live.
    pub fn handle_drag_over(&mut self, event: &DragOver) {
        let next = self.coordinator.handle_over(&self.board, event);
        self.commit(next);
    }

    /// Handles a drag-end event: applies column reordering and clears the
    /// overlay.
    pub fn handle_drag_end(&mut self, event: &DragEnd) {
        let next = self.coordinator.handle_end(&self.board, event);
        self.commit(next);
    }

    /// Replaces the board when the transformation changed it, then
    /// presents a fresh frame either way.
    fn commit(&mut self, next: Board) {
        if next == self.board {
            debug!("board unchanged");
        } else {
            self.board = next;
        }
        self.present();
    }

    /// Derives and pushes the current frame.
    fn present(&mut self) {
        let frame = BoardFrame::project(&self.board, self.coordinator.state());
        self.presenter.present(&frame);
    }
}
