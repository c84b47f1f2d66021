use std::ops::RangeInclusive;
use std::sync::Arc;

use kinetic_core::entity::{Entity, find_lookup};
use kinetic_core::image::ImageFile;
use kinetic_core::models::exercise::{Exercise, ExerciseEntry, ExerciseTarget};
use kinetic_core::models::workout_plan::{Difficulty, WorkoutPlan};
use kinetic_storage::error::StorageError;
use kinetic_storage::store::ObjectStore;
use uuid::Uuid;

use super::{EntityForm, FieldErrors, FormState, field, require_text};

pub const DURATION_RANGE: RangeInclusive<u32> = 1..=500;

/// Allowed rep count or seconds of one exercise.
pub const TARGET_RANGE: RangeInclusive<u32> = 1..=500;

/// Which target input of an exercise row is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetMode {
    #[default]
    Reps,
    Timed,
}

/// One editable row of the exercise list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRow {
    row_id: Uuid,
    pub exercise_id: Option<String>,
    mode: TargetMode,
    rep_count: Option<u32>,
    seconds: Option<u32>,
    /// Kept from the loaded plan so the backend can match existing rows.
    plan_id: Option<String>,
}

impl Default for ExerciseRow {
    fn default() -> Self {
        Self {
            row_id: Uuid::new_v4(),
            exercise_id: None,
            mode: TargetMode::default(),
            rep_count: None,
            seconds: None,
            plan_id: None,
        }
    }
}

impl ExerciseRow {
    fn from_entry(entry: &ExerciseEntry) -> Self {
        let (mode, rep_count, seconds) = match entry.target {
            ExerciseTarget::Reps { count } => (TargetMode::Reps, Some(count), None),
            ExerciseTarget::Timed { seconds } => (TargetMode::Timed, None, Some(seconds)),
        };
        Self {
            exercise_id: Some(entry.exercise_id.clone()),
            mode,
            rep_count,
            seconds,
            plan_id: entry.plan_id.clone(),
            ..Self::default()
        }
    }

    /// Stable client-side key of the row, independent of its position.
    pub fn row_id(&self) -> Uuid {
        self.row_id
    }

    pub fn mode(&self) -> TargetMode {
        self.mode
    }

    /// Switch the active input. The value of the input being switched away
    /// from is cleared.
    pub fn set_mode(&mut self, mode: TargetMode) {
        if self.mode == mode {
            return;
        }
        match self.mode {
            TargetMode::Reps => self.rep_count = None,
            TargetMode::Timed => self.seconds = None,
        }
        self.mode = mode;
    }

    /// Set the value of the active input.
    pub fn set_value(&mut self, value: Option<u32>) {
        match self.mode {
            TargetMode::Reps => self.rep_count = value,
            TargetMode::Timed => self.seconds = value,
        }
    }

    pub fn value(&self) -> Option<u32> {
        match self.mode {
            TargetMode::Reps => self.rep_count,
            TargetMode::Timed => self.seconds,
        }
    }

    /// The target the row currently describes, if its active value is
    /// within [`TARGET_RANGE`].
    pub fn target(&self) -> Option<ExerciseTarget> {
        let value = self.value().filter(|v| TARGET_RANGE.contains(v))?;
        Some(match self.mode {
            TargetMode::Reps => ExerciseTarget::Reps { count: value },
            TargetMode::Timed => ExerciseTarget::Timed { seconds: value },
        })
    }

    fn entry(&self) -> Option<ExerciseEntry> {
        Some(ExerciseEntry {
            plan_id: self.plan_id.clone(),
            exercise_id: self.exercise_id.clone()?,
            target: self.target()?,
        })
    }
}

/// Create/edit form of a workout plan.
pub struct WorkoutPlanForm {
    state: FormState<WorkoutPlan>,
    exercises: Vec<Exercise>,
    rows: Vec<ExerciseRow>,
    pub title_en: String,
    pub title_ms: String,
    pub estimated_time_minute: u32,
    pub introduction_en: String,
    pub introduction_ms: String,
    pub difficulty: Difficulty,
}

impl WorkoutPlanForm {
    /// An empty create form: one minute, beginner, one blank exercise row.
    pub fn new(exercises: Vec<Exercise>) -> Self {
        Self {
            state: FormState::create(),
            exercises,
            rows: vec![ExerciseRow::default()],
            title_en: String::new(),
            title_ms: String::new(),
            estimated_time_minute: *DURATION_RANGE.start(),
            introduction_en: String::new(),
            introduction_ms: String::new(),
            difficulty: Difficulty::default(),
        }
    }

    /// An edit form seeded from `plan`. The stored image is downloaded so
    /// the image input holds a real file.
    pub async fn edit(
        plan: Arc<WorkoutPlan>,
        exercises: Vec<Exercise>,
        storage: &dyn ObjectStore,
    ) -> Result<Self, StorageError> {
        let image = storage
            .download(WorkoutPlan::BUCKET, plan.image_url())
            .await?;
        Ok(Self::from_existing(plan, exercises, image))
    }

    /// An edit form seeded from `plan` and an image already at hand.
    pub fn from_existing(
        plan: Arc<WorkoutPlan>,
        exercises: Vec<Exercise>,
        image: ImageFile,
    ) -> Self {
        let rows = plan.exercises.iter().map(ExerciseRow::from_entry).collect();
        Self {
            exercises,
            rows,
            title_en: plan.title_en.clone(),
            title_ms: plan.title_ms.clone(),
            estimated_time_minute: plan.estimated_time_minute,
            introduction_en: plan.introduction_en.clone(),
            introduction_ms: plan.introduction_ms.clone(),
            difficulty: plan.difficulty,
            state: FormState::edit(plan, image),
        }
    }

    /// Exercises the row selects offer.
    pub fn exercise_options(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn exercise_name(&self, exercise_id: &str) -> Option<&str> {
        find_lookup(&self.exercises, exercise_id).map(|e| e.name.as_str())
    }

    pub fn rows(&self) -> &[ExerciseRow] {
        &self.rows
    }

    pub fn row_mut(&mut self, row_id: Uuid) -> Option<&mut ExerciseRow> {
        self.rows.iter_mut().find(|r| r.row_id == row_id)
    }

    /// Append a blank row and return its key.
    pub fn add_exercise(&mut self) -> Uuid {
        let row = ExerciseRow::default();
        let id = row.row_id;
        self.rows.push(row);
        id
    }

    pub fn remove_exercise(&mut self, row_id: Uuid) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.row_id != row_id);
        self.rows.len() != before
    }

    /// Toggle a row between rep count and duration. Returns false if no
    /// row has that key.
    pub fn set_target_mode(&mut self, row_id: Uuid, mode: TargetMode) -> bool {
        match self.row_mut(row_id) {
            Some(row) => {
                row.set_mode(mode);
                true
            }
            None => false,
        }
    }

    pub fn clear_exercises(&mut self) {
        self.rows.clear();
    }

    fn validate_rows(&self, errors: &mut FieldErrors) {
        if self.rows.is_empty() {
            errors.insert(
                field::EXERCISE_LIST,
                "Please add at least one exercise".to_string(),
            );
            return;
        }

        for (i, row) in self.rows.iter().enumerate() {
            let n = i + 1;
            let message = match (&row.exercise_id, row.target()) {
                (None, _) => format!("Exercise {n} has no selected exercise"),
                (Some(id), _) if find_lookup(&self.exercises, id).is_none() => {
                    format!("Exercise {n} references an unknown exercise")
                }
                (Some(_), None) => {
                    let what = match row.mode {
                        TargetMode::Reps => "a rep count",
                        TargetMode::Timed => "a duration in seconds",
                    };
                    format!(
                        "Exercise {n} needs {what} between {} and {}",
                        TARGET_RANGE.start(),
                        TARGET_RANGE.end()
                    )
                }
                (Some(_), Some(_)) => continue,
            };
            errors.insert(field::EXERCISE_LIST, message);
            return;
        }
    }
}

impl EntityForm for WorkoutPlanForm {
    type Entity = WorkoutPlan;

    fn state(&self) -> &FormState<WorkoutPlan> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut FormState<WorkoutPlan> {
        &mut self.state
    }

    fn validate_fields(&self, errors: &mut FieldErrors) {
        require_text(errors, field::TITLE_EN, &self.title_en);
        require_text(errors, field::TITLE_MS, &self.title_ms);
        require_text(errors, field::INTRODUCTION_EN, &self.introduction_en);
        require_text(errors, field::INTRODUCTION_MS, &self.introduction_ms);
        if !DURATION_RANGE.contains(&self.estimated_time_minute) {
            errors.insert(
                field::ESTIMATED_TIME_MINUTE,
                format!(
                    "Duration must be between {} and {} minutes",
                    DURATION_RANGE.start(),
                    DURATION_RANGE.end()
                ),
            );
        }
        self.validate_rows(errors);
    }

    fn draft(&self) -> WorkoutPlan {
        WorkoutPlan {
            plan_id: self.state.original().and_then(|p| p.plan_id.clone()),
            title_en: self.title_en.trim().to_string(),
            title_ms: self.title_ms.trim().to_string(),
            estimated_time_minute: self.estimated_time_minute,
            image_url: String::new(),
            introduction_en: self.introduction_en.trim().to_string(),
            introduction_ms: self.introduction_ms.trim().to_string(),
            difficulty: self.difficulty,
            exercises: self.rows.iter().filter_map(ExerciseRow::entry).collect(),
        }
    }
}
