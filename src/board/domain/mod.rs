//! Domain model for the board context.
//!
//! The board domain models ordered columns and cards, identifier-addressed
//! edits, and single-element relocation while keeping all presentation
//! concerns outside of the domain boundary.

mod board;
mod card;
mod column;
mod ids;

pub use board::Board;
pub use card::Card;
pub use column::Column;
pub use ids::EntityId;
