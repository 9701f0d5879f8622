//! Domain model for drag gestures.

mod error;
mod event;
mod state;

pub use error::ParseDragKindError;
pub use event::{DragEnd, DragItem, DragKind, DragOver, DragStart};
pub use state::DragState;
