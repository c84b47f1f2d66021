use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use kinetic_core::models::exercise::ExerciseTarget;
use kinetic_core::models::workout_plan::Difficulty;

#[derive(Parser)]
#[command(name = "kinetic")]
#[command(about = "Admin client for workout plans and education resources", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Unlock the admin commands with the admin password
    Login,
    /// Lock the admin commands again
    Logout,
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
    /// Manage workout plans
    Plans {
        #[command(subcommand)]
        action: PlanCommand,
    },
    /// Manage education resources
    Resources {
        #[command(subcommand)]
        action: ResourceCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Write a new config file
    Init(InitArgs),
    /// Print the config with secrets redacted
    Show,
}

#[derive(Args)]
pub struct InitArgs {
    /// REST backend base URL
    #[arg(long)]
    pub api_base_url: String,
    /// Public object URL prefix, without the bucket
    #[arg(long)]
    pub public_base_url: String,
    /// S3-compatible storage endpoint
    #[arg(long)]
    pub storage_endpoint: Option<String>,
    #[arg(long, default_value = "us-east-1")]
    pub region: String,
    /// Named AWS profile holding the storage keys
    #[arg(long, conflicts_with = "access_key_id")]
    pub profile: Option<String>,
    #[arg(long, requires = "secret_access_key")]
    pub access_key_id: Option<String>,
    #[arg(long)]
    pub secret_access_key: Option<String>,
    #[arg(long)]
    pub admin_password: String,
    /// Request timeout in seconds
    #[arg(long, default_value = "12")]
    pub timeout: u64,
}

#[derive(Subcommand)]
pub enum PlanCommand {
    /// List workout plans
    List {
        /// Case-insensitive search over titles and difficulty
        #[arg(long)]
        search: Option<String>,
    },
    /// Create a workout plan
    Create(PlanArgs),
    /// Edit a workout plan; omitted fields keep their value
    Edit {
        id: String,
        #[command(flatten)]
        fields: PlanArgs,
    },
    /// Delete a workout plan and its image
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Default)]
pub struct PlanArgs {
    #[arg(long)]
    pub title_en: Option<String>,
    #[arg(long)]
    pub title_ms: Option<String>,
    #[arg(long)]
    pub intro_en: Option<String>,
    #[arg(long)]
    pub intro_ms: Option<String>,
    /// Estimated duration in minutes (1-500)
    #[arg(long)]
    pub minutes: Option<u32>,
    /// Beginner, Intermediate or Advanced
    #[arg(long)]
    pub difficulty: Option<Difficulty>,
    /// Exercise entry as `ID:reps=N` or `ID:secs=N`. Repeatable; replaces
    /// the whole list on edit.
    #[arg(long = "exercise")]
    pub exercises: Vec<ExerciseArg>,
    /// PNG or JPEG image file
    #[arg(long)]
    pub image: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ResourceCommand {
    /// List education resources
    List {
        /// Case-insensitive search over titles and category
        #[arg(long)]
        search: Option<String>,
    },
    /// Create an education resource
    Create(ResourceArgs),
    /// Edit an education resource; omitted fields keep their value
    Edit {
        id: String,
        #[command(flatten)]
        fields: ResourceArgs,
    },
    /// Delete an education resource and its image
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Default)]
pub struct ResourceArgs {
    #[arg(long)]
    pub title_en: Option<String>,
    #[arg(long)]
    pub title_ms: Option<String>,
    #[arg(long)]
    pub content_en: Option<String>,
    #[arg(long)]
    pub content_ms: Option<String>,
    /// Category id or name
    #[arg(long)]
    pub category: Option<String>,
    /// Author name, used on create
    #[arg(long)]
    pub created_by: Option<String>,
    /// Editor name, used on edit
    #[arg(long)]
    pub updated_by: Option<String>,
    #[arg(long)]
    pub image: Option<PathBuf>,
}

/// One `--exercise` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseArg {
    pub exercise_id: String,
    pub target: ExerciseTarget,
}

impl FromStr for ExerciseArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, target) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("expected ID:reps=N or ID:secs=N, got {s:?}"))?;
        if id.is_empty() {
            return Err(format!("missing exercise id in {s:?}"));
        }
        let (unit, value) = target
            .split_once('=')
            .ok_or_else(|| format!("expected reps=N or secs=N, got {target:?}"))?;
        let value: u32 = value
            .parse()
            .map_err(|_| format!("{value:?} is not a whole number"))?;
        if value == 0 {
            return Err("target must be above zero".to_string());
        }
        let target = match unit {
            "reps" => ExerciseTarget::Reps { count: value },
            "secs" => ExerciseTarget::Timed { seconds: value },
            other => return Err(format!("unknown target unit {other:?}; use reps or secs")),
        };
        Ok(Self {
            exercise_id: id.to_string(),
            target,
        })
    }
}
