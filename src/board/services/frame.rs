//! Render projection: derives the outbound frame from board and drag state.

use crate::board::domain::{Board, Card, Column};
use crate::drag::domain::DragState;
use serde::{Deserialize, Serialize};

/// One column with the cards grouped under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnFrame {
    /// The column entity.
    pub column: Column,
    /// Cards referencing the column, in sequence order.
    pub cards: Vec<Card>,
    /// Number of cards in the column, for count badges.
    pub card_count: usize,
}

/// Snapshot of the entity being dragged, shown floating over the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DragOverlay {
    /// A column drag is in progress.
    Column {
        /// Snapshot taken when the drag started.
        column: Column,
    },
    /// A card drag is in progress.
    #[serde(rename = "Task")]
    Card {
        /// Snapshot taken when the drag started.
        card: Card,
    },
}

/// Everything a presenter needs to draw the board.
///
/// Grouping is derived here by matching each card's column reference
/// against each column; the board itself never stores cards per column.
/// Orphaned cards (whose column has been deleted) appear in no column
/// frame but still count toward the card sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardFrame {
    /// Columns in display order, each with its cards.
    pub columns: Vec<ColumnFrame>,
    /// Snapshot of the dragged entity, when a drag is active.
    pub overlay: Option<DragOverlay>,
}

impl BoardFrame {
    /// Projects the current board and drag state into a frame.
    #[must_use]
    pub fn project(board: &Board, drag: &DragState) -> Self {
        let columns = board
            .columns()
            .iter()
            .map(|column| {
                let cards: Vec<Card> = board.cards_in(column.id()).cloned().collect();
                ColumnFrame {
                    column: column.clone(),
                    card_count: cards.len(),
                    cards,
                }
            })
            .collect();
        Self {
            columns,
            overlay: overlay_for(drag),
        }
    }
}

/// Maps the coordinator state to the overlay snapshot, if any.
fn overlay_for(drag: &DragState) -> Option<DragOverlay> {
    match drag {
        DragState::Idle => None,
        DragState::DraggingColumn(column) => Some(DragOverlay::Column {
            column: column.clone(),
        }),
        DragState::DraggingCard(card) => Some(DragOverlay::Card { card: card.clone() }),
    }
}
