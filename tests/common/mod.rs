//! Common test utilities for syncdata-rs
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{fixtures, store::FakeObjectStore};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let store = FakeObjectStore::with_objects(fixtures::keys(10));
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod fixtures;
pub mod store;

// Re-export commonly used items
pub use assertions::OutcomeAssertions;
pub use store::FakeObjectStore;
