//! Integration tests
//!
//! Drive the full router against an in-memory store

mod participants_test;
mod sweeper_test;
