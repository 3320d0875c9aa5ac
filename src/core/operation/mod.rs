//! Object store operations built on the batch executor
//!
//! `Lister` binds an [`ObjectClient`] to the configured endpoints and batch
//! settings and exposes the bulk key operations of the store.

mod client;
mod lister;


pub use client::{ObjectClient, ObjectOperation};
pub use lister::Lister;

#[cfg(test)]
pub use client::MockObjectClient;
