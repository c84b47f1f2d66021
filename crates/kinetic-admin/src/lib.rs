//! kinetic-admin
//!
//! Headless view-models of the admin portal. A list view owns the entity
//! store, cards and forms act on it, and every create/update/delete goes
//! through the [`sync::SyncWorkflow`], which pairs the REST call with the
//! matching object-storage upload or delete.

pub mod auth;
pub mod card;
pub mod error;
pub mod form;
pub mod list;
pub mod sync;
