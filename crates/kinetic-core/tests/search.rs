use std::sync::Arc;

use kinetic_core::models::education_category::EducationCategory;
use kinetic_core::models::education_resource::EducationResource;
use kinetic_core::models::workout_plan::{Difficulty, WorkoutPlan};
use kinetic_core::search::filter;

fn plan(id: &str, title_en: &str, title_ms: &str, difficulty: Difficulty) -> Arc<WorkoutPlan> {
    Arc::new(WorkoutPlan {
        plan_id: Some(id.to_string()),
        title_en: title_en.to_string(),
        title_ms: title_ms.to_string(),
        estimated_time_minute: 15,
        image_url: String::new(),
        introduction_en: String::new(),
        introduction_ms: String::new(),
        difficulty,
        exercises: vec![],
    })
}

fn plans() -> Vec<Arc<WorkoutPlan>> {
    vec![
        plan("1", "Leg Day", "Hari Kaki", Difficulty::Intermediate),
        plan("2", "Morning Stretch", "Regangan Pagi", Difficulty::Beginner),
        plan("3", "HIIT Blast", "Letupan HIIT", Difficulty::Advanced),
    ]
}

#[test]
fn empty_query_returns_everything_in_order() {
    let items = plans();
    for query in ["", "   "] {
        let visible = filter(&items, query);
        assert_eq!(visible.len(), 3);
        for (a, b) in items.iter().zip(&visible) {
            assert!(Arc::ptr_eq(a, b));
        }
    }
}

#[test]
fn difficulty_match_ignores_case() {
    let visible = filter(&plans(), "BEGIN");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title_en, "Morning Stretch");
}

#[test]
fn matches_either_language() {
    assert_eq!(filter(&plans(), "kaki")[0].title_en, "Leg Day");
    assert_eq!(filter(&plans(), "hiit").len(), 1);
    assert!(filter(&plans(), "yoga").is_empty());
}

#[test]
fn resources_match_on_category_name() {
    let resource = Arc::new(EducationResource {
        post_id: Some("1".into()),
        title_en: "Sleep well".into(),
        title_ms: "Tidur lena".into(),
        content_en: String::new(),
        content_ms: String::new(),
        category_id: "c2".into(),
        image_url: String::new(),
        created_by: "Aina".into(),
        last_updated_by: None,
        created_date: None,
        last_updated_date: None,
        category_dto: Some(EducationCategory {
            category_id: "c2".into(),
            name: "Recovery".into(),
        }),
        likes: vec![],
    });

    assert_eq!(filter(&[resource.clone()], "recov").len(), 1);
    assert!(filter(&[resource], "nutrition").is_empty());
}
