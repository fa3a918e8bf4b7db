//! Property-based tests for parsing and consolidation.
