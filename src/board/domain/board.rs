//! Board aggregate root: the two ordered sequences and their pure
//! transformations.

use super::{Card, Column, EntityId};
use serde::{Deserialize, Serialize};

/// The whole board state: ordered columns and ordered cards.
///
/// Every transformation is total and pure: it borrows the current board
/// and returns a new one. When a referenced identifier is absent the
/// returned board compares equal to the input, so observers detect "no
/// change" with plain equality. Nothing is mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
    cards: Vec<Card>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
            cards: Vec::new(),
        }
    }

    /// Reconstructs a board from existing sequences.
    #[must_use]
    pub const fn from_parts(columns: Vec<Column>, cards: Vec<Card>) -> Self {
        Self { columns, cards }
    }

    /// Returns the column sequence in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the card sequence in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Looks up a column by identifier.
    #[must_use]
    pub fn column(&self, id: EntityId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Looks up a card by identifier.
    #[must_use]
    pub fn card(&self, id: EntityId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    /// Returns the cards belonging to a column, in sequence order.
    #[must_use]
    pub fn cards_in(&self, column_id: EntityId) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .filter(move |card| card.column_id() == column_id)
    }

    /// Returns how many cards reference the given column.
    #[must_use]
    pub fn card_count(&self, column_id: EntityId) -> usize {
        self.cards_in(column_id).count()
    }

    /// Appends a new column titled `Column <n+1>`, where `n` is the
    /// current column count.
    #[must_use]
    pub fn create_column(&self, id: EntityId) -> Self {
        let title = format!("Column {}", self.columns.len() + 1);
        let mut columns = self.columns.clone();
        columns.push(Column::new(id, title));
        Self {
            columns,
            cards: self.cards.clone(),
        }
    }

    /// Removes the column with the given identifier.
    ///
    /// Cards referencing the column are left in place; they become
    /// orphans rather than being cascade-deleted. Absent identifiers are
    /// a no-op.
    #[must_use]
    pub fn delete_column(&self, id: EntityId) -> Self {
        let columns = self
            .columns
            .iter()
            .filter(|column| column.id() != id)
            .cloned()
            .collect();
        Self {
            columns,
            cards: self.cards.clone(),
        }
    }

    /// Replaces the title of the matching column.
    ///
    /// Empty titles are allowed. Absent identifiers are a no-op.
    #[must_use]
    pub fn rename_column(&self, id: EntityId, title: &str) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|column| {
                if column.id() == id {
                    column.with_title(title)
                } else {
                    column.clone()
                }
            })
            .collect();
        Self {
            columns,
            cards: self.cards.clone(),
        }
    }

    /// Appends a new card to the given column with content `Task <n+1>`,
    /// where `n` is the current card count across the whole board.
    #[must_use]
    pub fn create_card(&self, id: EntityId, column_id: EntityId) -> Self {
        let content = format!("Task {}", self.cards.len() + 1);
        let mut cards = self.cards.clone();
        cards.push(Card::new(id, column_id, content));
        Self {
            columns: self.columns.clone(),
            cards,
        }
    }

    /// Removes the card with the given identifier; absent identifiers are
    /// a no-op.
    #[must_use]
    pub fn delete_card(&self, id: EntityId) -> Self {
        let cards = self
            .cards
            .iter()
            .filter(|card| card.id() != id)
            .cloned()
            .collect();
        Self {
            columns: self.columns.clone(),
            cards,
        }
    }

    /// Replaces the content of the matching card.
    ///
    /// No validation is applied. Absent identifiers are a no-op.
    #[must_use]
    pub fn update_card(&self, id: EntityId, content: &str) -> Self {
        let cards = self
            .cards
            .iter()
            .map(|card| {
                if card.id() == id {
                    card.with_content(content)
                } else {
                    card.clone()
                }
            })
            .collect();
        Self {
            columns: self.columns.clone(),
            cards,
        }
    }

    /// Moves the active column to the position of the target column,
    /// preserving the relative order of every other column.
    ///
    /// Equal identifiers or identifiers not present in the sequence leave
    /// the board unchanged.
    #[must_use]
    pub fn relocate_column(&self, active: EntityId, over: EntityId) -> Self {
        if active == over {
            return self.clone();
        }
        let source = self.columns.iter().position(|column| column.id() == active);
        let destination = self.columns.iter().position(|column| column.id() == over);
        match (source, destination) {
            (Some(source_index), Some(destination_index)) => Self {
                columns: relocate(self.columns.clone(), source_index, destination_index),
                cards: self.cards.clone(),
            },
            _ => self.clone(),
        }
    }

    /// Reparents the active card to the target card's column and moves it
    /// to the target card's position.
    ///
    /// The reparented card is a newly constructed value replacing the old
    /// one; no element is edited in place. Equal identifiers or
    /// identifiers not present in the sequence leave the board unchanged.
    #[must_use]
    pub fn reparent_card(&self, active: EntityId, over: EntityId) -> Self {
        if active == over {
            return self.clone();
        }
        let source = self.cards.iter().position(|card| card.id() == active);
        let destination = self.cards.iter().position(|card| card.id() == over);
        let (Some(source_index), Some(destination_index)) = (source, destination) else {
            return self.clone();
        };
        let Some(target_column) = self.cards.get(destination_index).map(Card::column_id) else {
            return self.clone();
        };

        let mut cards = self.cards.clone();
        let moved = cards.remove(source_index);
        cards.insert(destination_index, moved.with_column(target_column));
        Self {
            columns: self.columns.clone(),
            cards,
        }
    }
}

/// Removes the element at `source` and reinserts it at `destination`,
/// preserving the relative order of all other elements.
///
/// Both indices must be in bounds; callers resolve them from identifier
/// lookups on the same sequence.
fn relocate<T>(mut sequence: Vec<T>, source: usize, destination: usize) -> Vec<T> {
    let item = sequence.remove(source);
    sequence.insert(destination, item);
    sequence
}
