//! Services for the drag context.

pub mod coordinator;

pub use coordinator::DragCoordinator;
