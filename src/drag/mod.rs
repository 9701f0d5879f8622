//! Drag gesture handling for Pegboard.
//!
//! The drag context interprets the start → over → end event stream coming
//! from a gesture reporter. Dispatch branches explicitly on the dragged
//! entity kind: columns reorder at drag-end, cards reorder and reparent
//! live on every over event, and every other combination is an
//! intentional no-op. Resolution itself is delegated to the pure
//! transformations on [`crate::board::domain::Board`].
//!
//! - Event and state types in [`domain`]
//! - The coordinator state machine in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
