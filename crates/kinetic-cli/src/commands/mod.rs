mod plans;
mod resources;

use std::sync::Arc;

use eyre::Result;
use kinetic_admin::auth::AuthGate;
use kinetic_admin::form::SubmitOutcome;
use kinetic_admin::sync::SyncWorkflow;
use kinetic_api::RestClient;
use kinetic_core::entity::Entity;
use kinetic_storage::store::S3ObjectStore;

use crate::cli::{Cli, Command, ConfigCommand, InitArgs};
use crate::config::{self, CredentialSource, KineticConfig, StorageConfig};
use crate::prompt;
use crate::session::FileSession;

/// Clients for the two remote collaborators, built from the config.
pub struct Backend {
    pub rest: Arc<RestClient>,
    pub storage: Arc<S3ObjectStore>,
}

impl Backend {
    pub async fn connect(config: &KineticConfig) -> Result<Self> {
        let rest = RestClient::new(&config.api_base_url, config.request_timeout())?;
        let sdk_config =
            crate::aws::build_aws_config(&config.storage.region, &config.storage.credentials)
                .await;
        let client = kinetic_storage::client::build_client(
            &sdk_config,
            config.storage.endpoint_url.as_deref(),
        );
        Ok(Self {
            rest: Arc::new(rest),
            storage: Arc::new(S3ObjectStore::new(
                client,
                config.storage.public_base_url.clone(),
            )),
        })
    }
}

pub async fn run(cli: Cli) -> Result<()> {
    let dir = config::config_dir()?;

    match cli.command {
        Command::Config { action } => match action {
            ConfigCommand::Init(args) => init_config(&dir, args),
            ConfigCommand::Show => {
                let config = config::load_config(&dir)?.with_env_overrides();
                let info = config::config_info(&config);
                println!("{}", serde_json::to_string_pretty(&info)?);
                Ok(())
            }
        },
        Command::Login => {
            let config = config::load_config(&dir)?.with_env_overrides();
            let gate = AuthGate::new(config.admin_password, FileSession::new(&dir));
            let input = prompt::password("Password: ")?;
            if gate.attempt(&input)? {
                println!("Unlocked.");
                Ok(())
            } else {
                Err(eyre::eyre!("incorrect password"))
            }
        }
        Command::Logout => {
            let config = config::load_config(&dir)?;
            AuthGate::new(config.admin_password, FileSession::new(&dir)).lock()?;
            println!("Locked.");
            Ok(())
        }
        Command::Plans { action } => {
            let backend = unlocked_backend(&dir).await?;
            plans::run(&backend, action).await
        }
        Command::Resources { action } => {
            let backend = unlocked_backend(&dir).await?;
            resources::run(&backend, action).await
        }
    }
}

async fn unlocked_backend(dir: &std::path::Path) -> Result<Backend> {
    let config = config::load_config(dir)?.with_env_overrides();
    let gate = AuthGate::new(config.admin_password.clone(), FileSession::new(dir));
    if !gate.is_unlocked()? {
        return Err(eyre::eyre!("locked; run `kinetic login` first"));
    }
    Backend::connect(&config).await
}

fn init_config(dir: &std::path::Path, args: InitArgs) -> Result<()> {
    let credentials = match (args.profile, args.access_key_id, args.secret_access_key) {
        (Some(profile_name), _, _) => CredentialSource::Profile { profile_name },
        (None, Some(access_key_id), Some(secret_access_key)) => CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token: None,
        },
        _ => CredentialSource::DefaultChain,
    };
    let config = KineticConfig {
        config_version: 0,
        api_base_url: args.api_base_url,
        request_timeout_secs: args.timeout,
        storage: StorageConfig {
            endpoint_url: args.storage_endpoint,
            region: args.region,
            public_base_url: args.public_base_url,
            credentials,
        },
        admin_password: args.admin_password,
        created_at: jiff::Timestamp::now(),
    };
    config::save_config(dir, &config)?;
    println!("Config written to {}", dir.join("config.json").display());
    Ok(())
}

/// Ask the delete confirmation. Anything but `y`/`yes` declines.
fn confirm(question: &str) -> Result<bool> {
    let answer = prompt::line(&format!("{question} [y/N] "))?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Turn a form outcome into a saved entity or a reportable error.
fn saved<E>(outcome: SubmitOutcome<E>) -> Result<E> {
    match outcome {
        SubmitOutcome::Saved(entity) => Ok(entity),
        SubmitOutcome::Invalid(errors) => {
            for (field, message) in &errors {
                eprintln!("  {field}: {message}");
            }
            Err(eyre::eyre!("{} field(s) need attention", errors.len()))
        }
        SubmitOutcome::Busy => Err(eyre::eyre!("a submission is already in progress")),
        SubmitOutcome::Failed(message) => Err(eyre::eyre!(message)),
    }
}

/// Retry failed image deletes once, then print whatever still failed.
async fn report_cleanup<E: Entity>(workflow: &SyncWorkflow<E>) {
    if !workflow.cleanup_log().is_empty() {
        let remaining = workflow.retry_cleanup().await;
        tracing::debug!(remaining, "retried image cleanup");
    }
    for failure in workflow.cleanup_log().entries() {
        eprintln!(
            "warning: could not delete {}/{}: {}",
            failure.bucket, failure.key, failure.error
        );
    }
    for failure in workflow.upload_log().entries() {
        eprintln!(
            "warning: {} was not uploaded to {}, the previous image was kept: {}",
            failure.file_name, failure.bucket, failure.error
        );
    }
}
