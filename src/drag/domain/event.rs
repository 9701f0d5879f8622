//! Drag gesture event vocabulary.

use super::ParseDragKindError;
use crate::board::domain::EntityId;
use serde::{Deserialize, Serialize};

/// Payload kind tag carried by gesture reporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DragKind {
    /// The dragged entity is a column.
    Column,
    /// The dragged entity is a card.
    #[serde(rename = "Task")]
    Card,
}

impl DragKind {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Column => "Column",
            Self::Card => "Task",
        }
    }
}

impl TryFrom<&str> for DragKind {
    type Error = ParseDragKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "Column" => Ok(Self::Column),
            "Task" => Ok(Self::Card),
            _ => Err(ParseDragKindError(value.to_owned())),
        }
    }
}

/// A dragged or drop-target entity, tagged with its kind.
///
/// The tagged variant makes dispatch explicit: the coordinator branches
/// on the kind rather than probing both sequences and relying on lookup
/// misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id")]
pub enum DragItem {
    /// A column, identified within the column sequence.
    Column(EntityId),
    /// A card, identified within the card sequence.
    #[serde(rename = "Task")]
    Card(EntityId),
}

impl DragItem {
    /// Builds an item from a wire kind tag and identifier.
    #[must_use]
    pub const fn from_kind(kind: DragKind, id: EntityId) -> Self {
        match kind {
            DragKind::Column => Self::Column(id),
            DragKind::Card => Self::Card(id),
        }
    }

    /// Returns the payload kind tag.
    #[must_use]
    pub const fn kind(self) -> DragKind {
        match self {
            Self::Column(_) => DragKind::Column,
            Self::Card(_) => DragKind::Card,
        }
    }

    /// Returns the entity identifier.
    #[must_use]
    pub const fn id(self) -> EntityId {
        match self {
            Self::Column(id) | Self::Card(id) => id,
        }
    }
}

/// A drag gesture has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragStart {
    /// The entity picked up by the pointer.
    pub item: DragItem,
}

/// The pointer moved while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragOver {
    /// The entity being dragged.
    pub active: DragItem,
    /// The entity currently under the pointer, when there is one.
    pub over: Option<DragItem>,
}

/// The drag gesture ended, accepted drop or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    /// The entity that was being dragged.
    pub active: DragItem,
    /// The drop target, when the pointer ended over one.
    pub over: Option<DragItem>,
}
