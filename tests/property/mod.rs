//! Property-based tests for the snapshot tree model

mod ordering;
