//! Path conventions of the backend's admin endpoints.
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list    | GET    | `{resource}/list` |
//! | create  | POST   | `{resource}` |
//! | update  | PATCH  | `{resource}` |
//! | delete  | DELETE | `{resource}/{id}` |
//! | lookups | GET    | [`Lookup::PATH`](kinetic_core::entity::Lookup::PATH) |

use kinetic_core::entity::Entity;

pub fn list<E: Entity>() -> String {
    format!("{}/list", E::RESOURCE)
}

pub fn collection<E: Entity>() -> &'static str {
    E::RESOURCE
}

pub fn item<E: Entity>(id: &str) -> String {
    format!("{}/{id}", E::RESOURCE)
}
