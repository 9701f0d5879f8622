//! Unit tests for the drag module.
