//! Port contracts for the board context.
//!
//! Ports define infrastructure-agnostic interfaces used by the engine.

pub mod id_source;
pub mod presenter;

pub use id_source::IdSource;
pub use presenter::BoardPresenter;
