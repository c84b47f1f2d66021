//! kinetic-storage
//!
//! Image storage on an S3-compatible endpoint. Thin wrapper around the AWS
//! S3 SDK plus the [`store::ObjectStore`] seam the sync workflow talks to.

pub mod client;
pub mod error;
pub mod objects;
pub mod store;
