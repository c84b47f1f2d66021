//! RestClient against an in-process axum server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use serde_json::{Value, json};

use kinetic_api::service::{EntityApi, LookupApi};
use kinetic_api::{ApiError, RestClient};
use kinetic_core::models::education_category::EducationCategory;
use kinetic_core::models::education_resource::EducationResource;
use kinetic_core::models::exercise::Exercise;
use kinetic_core::models::workout_plan::{Difficulty, WorkoutPlan};

type Calls = Arc<Mutex<Vec<String>>>;

fn plan_json(id: &str) -> Value {
    json!({
        "planId": id,
        "titleEn": "Leg Day",
        "titleMs": "Hari Kaki",
        "estimatedTimeMinute": 30,
        "imageUrl": "https://x/workout-plan/k1",
        "introductionEn": "",
        "introductionMs": "",
        "difficulty": "Intermediate",
        "workoutPlanExerciseDtos": []
    })
}

async fn list_plans(State(calls): State<Calls>) -> Json<Value> {
    calls.lock().unwrap().push("GET /workout-plan/list".into());
    Json(json!([plan_json("1"), plan_json("2")]))
}

async fn create_plan(State(calls): State<Calls>, Json(mut body): Json<Value>) -> Json<Value> {
    calls.lock().unwrap().push("POST /workout-plan".into());
    body["planId"] = json!("99");
    Json(body)
}

async fn update_plan(State(calls): State<Calls>, Json(body): Json<Value>) -> Json<Value> {
    calls.lock().unwrap().push(format!("PATCH /workout-plan {}", body["planId"]));
    Json(body)
}

async fn delete_post(State(calls): State<Calls>, Path(id): Path<String>) -> StatusCode {
    calls.lock().unwrap().push(format!("DELETE /education-post/{id}"));
    StatusCode::OK
}

async fn exercises() -> Json<Value> {
    Json(json!([{ "exerciseId": "e1", "name": "Squat" }]))
}

async fn categories_fail() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom")
}

async fn slow_list() -> Json<Value> {
    tokio::time::sleep(Duration::from_millis(500)).await;
    Json(json!([]))
}

async fn serve(calls: Calls) -> String {
    let app = Router::new()
        .route("/workout-plan/list", get(list_plans))
        .route(
            "/workout-plan",
            axum::routing::post(create_plan).patch(update_plan),
        )
        .route("/workout-plan/exercises", get(exercises))
        .route("/education-post/{id}", delete(delete_post))
        .route("/education-post/categories", get(categories_fail))
        .route("/education-post/list", get(slow_list))
        .with_state(calls);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

#[tokio::test]
async fn crud_calls_hit_the_expected_routes() {
    let calls = Calls::default();
    let base = serve(calls.clone()).await;
    let client = RestClient::new(&base, Duration::from_secs(5)).unwrap();

    let plans: Vec<WorkoutPlan> = EntityApi::<WorkoutPlan>::list(&client).await.unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].difficulty, Difficulty::Intermediate);

    let mut draft = plans[0].clone();
    draft.plan_id = None;
    let created = EntityApi::<WorkoutPlan>::create(&client, &draft).await.unwrap();
    assert_eq!(created.plan_id.as_deref(), Some("99"));

    let updated = EntityApi::<WorkoutPlan>::update(&client, &created).await.unwrap();
    assert_eq!(updated, created);

    EntityApi::<EducationResource>::delete(&client, "42").await.unwrap();

    let lookups = LookupApi::<Exercise>::list_lookups(&client).await.unwrap();
    assert_eq!(lookups[0].name, "Squat");

    assert_eq!(
        *calls.lock().unwrap(),
        vec![
            "GET /workout-plan/list",
            "POST /workout-plan",
            "PATCH /workout-plan \"99\"",
            "DELETE /education-post/42",
        ]
    );
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let base = serve(Calls::default()).await;
    let client = RestClient::new(&base, Duration::from_secs(5)).unwrap();

    let err = LookupApi::<EducationCategory>::list_lookups(&client)
        .await
        .unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn slow_responses_time_out() {
    let base = serve(Calls::default()).await;
    let client = RestClient::new(&base, Duration::from_millis(50)).unwrap();

    let err = EntityApi::<EducationResource>::list(&client).await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout(_)), "got {err}");
}
