//! Error types for drag event parsing.

use thiserror::Error;

/// Error returned while parsing a payload kind tag from a gesture
/// reporter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown drag payload kind: {0}")]
pub struct ParseDragKindError(pub String);
