//! kinetic-api
//!
//! REST client for the fitness backend's admin endpoints, and the
//! [`service::EntityApi`] / [`service::LookupApi`] seams the admin layer is
//! written against.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod service;

pub use client::RestClient;
pub use error::ApiError;
