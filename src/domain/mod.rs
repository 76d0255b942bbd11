//! Domain layer containing business entities and the storage contract.
//!
//! The domain layer has no dependencies on the HTTP or infrastructure layers.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage contract trait definitions
//!
//! Business rules live in services (see [`crate::application::services`]).

pub mod entities;
pub mod repositories;
