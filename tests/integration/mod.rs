//! Integration tests for syncdata-rs
//!
//! These tests drive the public API against an in-memory object store.

pub mod config_tests;
pub mod executor_tests;
