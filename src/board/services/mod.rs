//! Services for the board context.

pub mod frame;

pub use frame::{BoardFrame, ColumnFrame, DragOverlay};
