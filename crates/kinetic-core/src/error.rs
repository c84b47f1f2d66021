use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("exercise {exercise_id} must set exactly one of repCount or estimatedTimeSecond")]
    InvalidExerciseTarget { exercise_id: String },

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
