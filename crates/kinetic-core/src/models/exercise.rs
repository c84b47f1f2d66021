use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::Lookup;
use crate::error::CoreError;

/// An exercise a workout plan can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub exercise_id: String,
    pub name: String,
}

impl Lookup for Exercise {
    const PATH: &'static str = "/workout-plan/exercises";

    fn id(&self) -> &str {
        &self.exercise_id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// What an exercise entry asks for: a number of repetitions or a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseTarget {
    Reps { count: u32 },
    Timed { seconds: u32 },
}

impl fmt::Display for ExerciseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reps { count } => write!(f, "{count} reps"),
            Self::Timed { seconds } => write!(f, "{seconds} secs"),
        }
    }
}

/// One exercise inside a workout plan.
///
/// On the wire exactly one of `repCount` / `estimatedTimeSecond` is non-null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExerciseEntryWire", into = "ExerciseEntryWire")]
pub struct ExerciseEntry {
    pub plan_id: Option<String>,
    pub exercise_id: String,
    pub target: ExerciseTarget,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseEntryWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    plan_id: Option<String>,
    exercise_id: String,
    #[serde(default)]
    estimated_time_second: Option<u32>,
    #[serde(default)]
    rep_count: Option<u32>,
}

impl TryFrom<ExerciseEntryWire> for ExerciseEntry {
    type Error = CoreError;

    fn try_from(wire: ExerciseEntryWire) -> Result<Self, Self::Error> {
        let target = match (wire.rep_count, wire.estimated_time_second) {
            (Some(count), None) => ExerciseTarget::Reps { count },
            (None, Some(seconds)) => ExerciseTarget::Timed { seconds },
            _ => {
                return Err(CoreError::InvalidExerciseTarget {
                    exercise_id: wire.exercise_id,
                });
            }
        };
        Ok(Self {
            // The backend echoes an empty planId on unsaved rows.
            plan_id: wire.plan_id.filter(|id| !id.is_empty()),
            exercise_id: wire.exercise_id,
            target,
        })
    }
}

impl From<ExerciseEntry> for ExerciseEntryWire {
    fn from(entry: ExerciseEntry) -> Self {
        let (rep_count, estimated_time_second) = match entry.target {
            ExerciseTarget::Reps { count } => (Some(count), None),
            ExerciseTarget::Timed { seconds } => (None, Some(seconds)),
        };
        Self {
            plan_id: entry.plan_id,
            exercise_id: entry.exercise_id,
            estimated_time_second,
            rep_count,
        }
    }
}
