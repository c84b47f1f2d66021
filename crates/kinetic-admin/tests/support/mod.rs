#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use kinetic_api::ApiError;
use kinetic_api::service::{BoxFuture, EntityApi, LookupApi};
use kinetic_core::entity::{Entity, Lookup};
use kinetic_core::image::ImageFile;
use kinetic_core::models::education_category::EducationCategory;
use kinetic_core::models::education_resource::EducationResource;
use kinetic_core::models::exercise::{Exercise, ExerciseEntry, ExerciseTarget};
use kinetic_core::models::workout_plan::{Difficulty, WorkoutPlan};
use kinetic_storage::error::StorageError;
use kinetic_storage::store::ObjectStore;

pub const PUBLIC_BASE: &str = "https://cdn.test/storage/v1/object/public";

/// Ordered record of every call that crossed the network boundary.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().unwrap().is_empty()
    }
}

/// Test-only way to stamp a server id on an entity.
pub trait AssignId: Entity {
    fn assign_id(&mut self, id: String);
}

impl AssignId for WorkoutPlan {
    fn assign_id(&mut self, id: String) {
        self.plan_id = Some(id);
    }
}

impl AssignId for EducationResource {
    fn assign_id(&mut self, id: String) {
        self.post_id = Some(id);
    }
}

pub struct FakeApi<E> {
    log: CallLog,
    items: Vec<E>,
    next_id: AtomicUsize,
    pub fail: AtomicBool,
    pub sent: Mutex<Vec<E>>,
}

impl<E: AssignId> FakeApi<E> {
    pub fn new(log: CallLog, items: Vec<E>) -> Self {
        Self {
            log,
            items,
            next_id: AtomicUsize::new(1),
            fail: AtomicBool::new(false),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(self) -> Self {
        self.fail.store(true, Ordering::SeqCst);
        self
    }

    pub fn last_sent(&self) -> Option<E> {
        self.sent.lock().unwrap().last().cloned()
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(ApiError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl<E: AssignId> EntityApi<E> for FakeApi<E> {
    fn list(&self) -> BoxFuture<'_, Result<Vec<E>, ApiError>> {
        Box::pin(async move {
            self.log.push(format!("GET {}/list", E::RESOURCE));
            Ok(self.items.clone())
        })
    }

    fn create<'a>(&'a self, entity: &'a E) -> BoxFuture<'a, Result<E, ApiError>> {
        Box::pin(async move {
            self.log.push(format!("POST {}", E::RESOURCE));
            self.sent.lock().unwrap().push(entity.clone());
            self.check()?;
            let mut created = entity.clone();
            let n = self.next_id.fetch_add(1, Ordering::SeqCst);
            created.assign_id(format!("srv-{n}"));
            Ok(created)
        })
    }

    fn update<'a>(&'a self, entity: &'a E) -> BoxFuture<'a, Result<E, ApiError>> {
        Box::pin(async move {
            self.log.push(format!("PATCH {}", E::RESOURCE));
            self.sent.lock().unwrap().push(entity.clone());
            self.check()?;
            Ok(entity.clone())
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), ApiError>> {
        Box::pin(async move {
            self.log.push(format!("DELETE {}/{id}", E::RESOURCE));
            self.check()
        })
    }
}

pub struct FakeLookups<L> {
    log: CallLog,
    items: Vec<L>,
}

impl<L> FakeLookups<L> {
    pub fn new(log: CallLog, items: Vec<L>) -> Self {
        Self { log, items }
    }
}

impl<L: Lookup> LookupApi<L> for FakeLookups<L> {
    fn list_lookups(&self) -> BoxFuture<'_, Result<Vec<L>, ApiError>> {
        Box::pin(async move {
            self.log.push(format!("GET {}", L::PATH));
            Ok(self.items.clone())
        })
    }
}

pub struct FakeStorage {
    log: CallLog,
    uploads: AtomicUsize,
    pub fail_upload: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl FakeStorage {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            uploads: AtomicUsize::new(0),
            fail_upload: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
        }
    }
}

impl ObjectStore for FakeStorage {
    fn upload<'a>(
        &'a self,
        bucket: &'a str,
        file: &'a ImageFile,
    ) -> BoxFuture<'a, Result<String, StorageError>> {
        Box::pin(async move {
            self.log.push(format!("upload {bucket} {}", file.name));
            if self.fail_upload.load(Ordering::SeqCst) {
                return Err(StorageError::PutObject("bucket unavailable".to_string()));
            }
            let n = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
            Ok(format!("{PUBLIC_BASE}/{bucket}/new-{n}"))
        })
    }

    fn delete<'a>(
        &'a self,
        bucket: &'a str,
        key: &'a str,
    ) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            self.log.push(format!("delete {bucket} {key}"));
            if self.fail_delete.load(Ordering::SeqCst) {
                return Err(StorageError::DeleteObject("access denied".to_string()));
            }
            Ok(())
        })
    }

    fn download<'a>(
        &'a self,
        bucket: &'a str,
        url: &'a str,
    ) -> BoxFuture<'a, Result<ImageFile, StorageError>> {
        Box::pin(async move {
            self.log.push(format!("download {bucket} {url}"));
            let name = url.rsplit('/').next().unwrap_or("image").to_string();
            Ok(ImageFile::new(name, "image/jpeg", vec![0xff, 0xd8, 0xff]))
        })
    }
}

pub fn png(name: &str) -> ImageFile {
    ImageFile::new(name, "image/png", vec![0x89, b'P', b'N', b'G'])
}

pub fn exercises() -> Vec<Exercise> {
    vec![
        Exercise {
            exercise_id: "ex-squat".to_string(),
            name: "Squat".to_string(),
        },
        Exercise {
            exercise_id: "ex-plank".to_string(),
            name: "Plank".to_string(),
        },
    ]
}

pub fn categories() -> Vec<EducationCategory> {
    vec![
        EducationCategory {
            category_id: "cat-1".to_string(),
            name: "Recovery".to_string(),
        },
        EducationCategory {
            category_id: "cat-2".to_string(),
            name: "Nutrition".to_string(),
        },
    ]
}

pub fn plan(id: &str, title: &str, difficulty: Difficulty) -> WorkoutPlan {
    WorkoutPlan {
        plan_id: Some(id.to_string()),
        title_en: title.to_string(),
        title_ms: format!("{title} (BM)"),
        estimated_time_minute: 20,
        image_url: format!("{PUBLIC_BASE}/workout-plan/{id}.png"),
        introduction_en: "Intro".to_string(),
        introduction_ms: "Pengenalan".to_string(),
        difficulty,
        exercises: vec![ExerciseEntry {
            plan_id: Some(id.to_string()),
            exercise_id: "ex-squat".to_string(),
            target: ExerciseTarget::Reps { count: 10 },
        }],
    }
}

pub fn resource(id: &str, title: &str, image_url: &str) -> EducationResource {
    EducationResource {
        post_id: Some(id.to_string()),
        title_en: title.to_string(),
        title_ms: format!("{title} (BM)"),
        content_en: "Body".to_string(),
        content_ms: "Isi".to_string(),
        category_id: "cat-1".to_string(),
        image_url: image_url.to_string(),
        created_by: "Aina".to_string(),
        last_updated_by: None,
        created_date: None,
        last_updated_date: None,
        category_dto: None,
        likes: Vec::new(),
    }
}
