//! Card entity.

use super::EntityId;
use serde::{Deserialize, Serialize};

/// A task card, displayed inside the column it references.
///
/// `column_id` is a weak reference: it records an association, not
/// ownership. Deleting a column does not cascade to its cards, so a card
/// may outlive the column it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: EntityId,
    column_id: EntityId,
    content: String,
}

impl Card {
    /// Creates a card with the given identifier, owning column reference,
    /// and content.
    ///
    /// The referenced column is not verified to exist; an orphan card is
    /// representable.
    #[must_use]
    pub fn new(id: EntityId, column_id: EntityId, content: impl Into<String>) -> Self {
        Self {
            id,
            column_id,
            content: content.into(),
        }
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the identifier of the column this card belongs to.
    #[must_use]
    pub const fn column_id(&self) -> EntityId {
        self.column_id
    }

    /// Returns the card content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns a copy of this card carrying the given content.
    #[must_use]
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            id: self.id,
            column_id: self.column_id,
            content: content.into(),
        }
    }

    /// Returns a copy of this card reparented to the given column.
    #[must_use]
    pub fn with_column(&self, column_id: EntityId) -> Self {
        Self {
            id: self.id,
            column_id,
            content: self.content.clone(),
        }
    }
}
