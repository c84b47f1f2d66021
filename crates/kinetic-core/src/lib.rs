//! kinetic-core
//!
//! Pure domain types for the Kinetic admin client: workout plans, education
//! resources, their reference lookups, the in-memory entity store and the
//! client-side search filter. No network dependency; this is the shared
//! vocabulary of the other crates.

pub mod entity;
pub mod error;
pub mod image;
pub mod models;
pub mod search;
pub mod storage_keys;
pub mod store;
