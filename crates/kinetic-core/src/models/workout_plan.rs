use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::error::CoreError;
use crate::models::exercise::{Exercise, ExerciseEntry};
use crate::storage_keys;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    #[serde(alias = "BEGINNER", alias = "beginner")]
    Beginner,
    #[serde(alias = "INTERMEDIATE", alias = "intermediate")]
    Intermediate,
    #[serde(alias = "ADVANCED", alias = "advanced")]
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownDifficulty(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    pub title_en: String,
    pub title_ms: String,
    pub estimated_time_minute: u32,
    pub image_url: String,
    pub introduction_en: String,
    pub introduction_ms: String,
    pub difficulty: Difficulty,
    #[serde(rename = "workoutPlanExerciseDtos", default)]
    pub exercises: Vec<ExerciseEntry>,
}

impl Entity for WorkoutPlan {
    type Lookup = Exercise;

    const KIND: &'static str = "workout plan";
    const BUCKET: &'static str = storage_keys::WORKOUT_PLAN_BUCKET;
    const RESOURCE: &'static str = "/workout-plan";

    fn id(&self) -> Option<&str> {
        self.plan_id.as_deref()
    }

    fn image_url(&self) -> &str {
        &self.image_url
    }

    fn set_image_url(&mut self, url: String) {
        self.image_url = url;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title_en[..], &self.title_ms[..], self.difficulty.name()]
    }
}
