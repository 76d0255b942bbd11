//! Core domain entities.
//!
//! Entities are plain data structures. Unsaved records use a separate type:
//! [`NewAccount`] is what gets persisted, [`Account`] is what comes back with
//! its storage-assigned id.

pub mod account;

pub use account::{Account, NewAccount};
