use std::sync::Arc;

use kinetic_core::models::workout_plan::{Difficulty, WorkoutPlan};
use kinetic_core::store::EntityStore;

fn plan(id: &str, title: &str) -> WorkoutPlan {
    WorkoutPlan {
        plan_id: Some(id.to_string()),
        title_en: title.to_string(),
        title_ms: title.to_string(),
        estimated_time_minute: 20,
        image_url: format!("https://x/workout-plan/{id}"),
        introduction_en: String::new(),
        introduction_ms: String::new(),
        difficulty: Difficulty::Beginner,
        exercises: vec![],
    }
}

#[test]
fn append_keeps_prior_elements_in_order() {
    let store = EntityStore::new();
    store.replace(vec![plan("1", "A"), plan("2", "B")]);
    let before = store.list();

    store.append(plan("3", "C"));

    let after = store.list();
    assert_eq!(after.len(), 3);
    assert!(Arc::ptr_eq(&before[0], &after[0]));
    assert!(Arc::ptr_eq(&before[1], &after[1]));
    assert_eq!(after[2].title_en, "C");
}

#[test]
fn patch_replaces_only_the_matching_element() {
    let store = EntityStore::new();
    store.replace(vec![plan("1", "A"), plan("2", "B"), plan("3", "C")]);
    let before = store.list();

    assert!(store.patch_one("2", plan("2", "B2")));

    let after = store.list();
    assert!(Arc::ptr_eq(&before[0], &after[0]));
    assert!(!Arc::ptr_eq(&before[1], &after[1]));
    assert!(Arc::ptr_eq(&before[2], &after[2]));
    assert_eq!(after[1].title_en, "B2");
    assert!(!store.patch_one("9", plan("9", "Z")));
}

#[test]
fn remove_filters_by_id() {
    let store = EntityStore::new();
    store.replace(vec![plan("1", "A"), plan("2", "B")]);

    assert!(store.remove_one("1"));
    assert!(!store.remove_one("1"));
    assert_eq!(store.len(), 1);
    assert!(store.get("2").is_some());
}

#[test]
fn weak_handle_dies_with_the_store() {
    let store: EntityStore<WorkoutPlan> = EntityStore::new();
    let weak = store.downgrade();
    assert!(weak.upgrade().is_some());
    drop(store);
    assert!(weak.upgrade().is_none());
}
