//! Adapter implementations of the board ports.

pub mod random_id;
pub mod sequence_id;

pub use random_id::RandomIdSource;
pub use sequence_id::SequenceIdSource;
