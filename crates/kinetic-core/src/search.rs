//! Client-side list search.

use std::sync::Arc;

use crate::entity::Entity;

/// Case-insensitive substring match of `query` against an entity's search
/// fields. A blank query matches everything.
pub fn matches<E: Entity>(entity: &E, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty()
        || entity
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
}

/// Filter `items` by `query`, preserving order. Never mutates the input.
pub fn filter<E: Entity>(items: &[Arc<E>], query: &str) -> Vec<Arc<E>> {
    if query.trim().is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| matches(item.as_ref(), query))
        .cloned()
        .collect()
}
