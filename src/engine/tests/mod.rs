//! Unit tests for the board engine.
