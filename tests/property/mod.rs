//! Property-based tests

mod sanitize_proptest;
mod visibility_proptest;
