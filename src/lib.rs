//! Pegboard: in-memory kanban board engine.
//!
//! This crate provides the framework-agnostic core of a kanban board:
//! ordered columns and cards, inline edits, deletion, and drag-and-drop
//! reordering and reparenting. Rendering and pointer capture live outside
//! the crate and connect through ports.
//!
//! # Architecture
//!
//! Pegboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board and gesture logic with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for identifier generation and
//!   frame presentation
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Column and card sequences and their pure transformations
//! - [`drag`]: Drag gesture classification and reorder/reparent resolution
//! - [`engine`]: The state container wiring gestures to transformations and
//!   presented frames

pub mod board;
pub mod drag;
pub mod engine;
