//! kinetic-cli
//!
//! Terminal front end of the admin client. Drives the `kinetic-admin`
//! view-models against the configured REST backend and object storage.

pub mod aws;
pub mod cli;
pub mod commands;
pub mod config;
pub mod prompt;
pub mod render;
pub mod session;
