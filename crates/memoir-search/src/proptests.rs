//! Property-based tests for the prefix filter.
