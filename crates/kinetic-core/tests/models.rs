use kinetic_core::entity::Entity;
use kinetic_core::models::education_resource::EducationResource;
use kinetic_core::models::exercise::{ExerciseEntry, ExerciseTarget};
use kinetic_core::models::workout_plan::{Difficulty, WorkoutPlan};
use serde_json::json;

#[test]
fn workout_plan_reads_backend_payload() {
    let plan: WorkoutPlan = serde_json::from_value(json!({
        "planId": "7",
        "titleEn": "Leg Day",
        "titleMs": "Hari Kaki",
        "estimatedTimeMinute": 30,
        "imageUrl": "https://x/workout-plan/k1",
        "introductionEn": "Squats and lunges.",
        "introductionMs": "Cangkung dan terjah.",
        "difficulty": "INTERMEDIATE",
        "workoutPlanExerciseDtos": [
            { "planId": "7", "exerciseId": "e1", "repCount": 12, "estimatedTimeSecond": null },
            { "planId": "7", "exerciseId": "e2", "repCount": null, "estimatedTimeSecond": 45 }
        ]
    }))
    .unwrap();

    assert_eq!(plan.id(), Some("7"));
    assert_eq!(plan.difficulty, Difficulty::Intermediate);
    assert_eq!(plan.exercises[0].target, ExerciseTarget::Reps { count: 12 });
    assert_eq!(plan.exercises[1].target, ExerciseTarget::Timed { seconds: 45 });
}

#[test]
fn unsaved_plan_omits_id_on_the_wire() {
    let plan = WorkoutPlan {
        plan_id: None,
        title_en: "Core".into(),
        title_ms: "Teras".into(),
        estimated_time_minute: 10,
        image_url: String::new(),
        introduction_en: String::new(),
        introduction_ms: String::new(),
        difficulty: Difficulty::Beginner,
        exercises: vec![ExerciseEntry {
            plan_id: None,
            exercise_id: "e1".into(),
            target: ExerciseTarget::Timed { seconds: 30 },
        }],
    };

    let value = serde_json::to_value(&plan).unwrap();
    assert!(value.get("planId").is_none());
    assert_eq!(value["difficulty"], "Beginner");
    let entry = &value["workoutPlanExerciseDtos"][0];
    assert_eq!(entry["estimatedTimeSecond"], 30);
    assert!(entry["repCount"].is_null());
}

#[test]
fn exercise_entry_needs_exactly_one_target() {
    let neither = serde_json::from_value::<ExerciseEntry>(json!({ "exerciseId": "e1" }));
    assert!(neither.is_err());

    let both = serde_json::from_value::<ExerciseEntry>(json!({
        "exerciseId": "e1", "repCount": 3, "estimatedTimeSecond": 20
    }));
    assert!(both.is_err());
}

#[test]
fn difficulty_parses_case_insensitively() {
    assert_eq!("advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
    assert!("expert".parse::<Difficulty>().is_err());
}

#[test]
fn education_resource_counts_likes_and_hides_denormalised_fields() {
    let resource: EducationResource = serde_json::from_value(json!({
        "postId": "42",
        "titleEn": "Hydration",
        "titleMs": "Hidrasi",
        "contentEn": "Drink water.",
        "contentMs": "Minum air.",
        "categoryId": "c1",
        "imageUrl": "https://x/education-resource/abc.jpg",
        "createdBy": "Aina",
        "createdDate": "2024-05-01T10:00:00",
        "categoryDto": { "categoryId": "c1", "name": "Nutrition" },
        "educationPostLikeDtos": [{ "userId": "u1" }, { "userId": "u2" }]
    }))
    .unwrap();

    assert_eq!(resource.like_count(), 2);
    assert_eq!(resource.category_name(), Some("Nutrition"));
    assert!(resource.created_date.is_some());

    let value = serde_json::to_value(&resource).unwrap();
    assert!(value.get("categoryDto").is_none());
    assert!(value.get("educationPostLikeDtos").is_none());
    assert!(value.get("lastUpdatedBy").is_none());
}

#[test]
fn resource_list_survives_odd_timestamps() {
    let base = json!({
        "titleEn": "t", "titleMs": "t", "contentEn": "c", "contentMs": "c",
        "categoryId": "c1", "imageUrl": "u", "createdBy": "Aina"
    });
    let with = |id: &str, created: serde_json::Value| {
        let mut v = base.clone();
        v["postId"] = json!(id);
        v["createdDate"] = created;
        v
    };
    let list: Vec<EducationResource> = serde_json::from_value(json!([
        with("1", json!(1714557600000_i64)),
        with("2", json!({ "seconds": 1 })),
        with("3", json!("2024-05-01T10:00:00Z")),
    ]))
    .unwrap();

    assert_eq!(list.len(), 3);
    assert_eq!(list[0].created_date, list[2].created_date);
    assert!(list[1].created_date.is_none());
}
