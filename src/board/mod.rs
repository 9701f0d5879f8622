//! Board state management for Pegboard.
//!
//! The board context owns the two ordered sequences — columns and cards —
//! and every transformation over them. Sequence position is the single
//! source of truth for display order; a card's visible grouping is derived
//! by matching its column reference at projection time, never stored
//! per-column. All transformations are total: a referenced identifier that
//! is not present yields a board equal to the input. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Render projection in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
