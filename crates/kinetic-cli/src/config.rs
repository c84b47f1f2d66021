use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_TIMEOUT_SECS: u64 = 12;

pub const API_BASE_URL_ENV: &str = "KINETIC_API_BASE_URL";
pub const ADMIN_PASSWORD_ENV: &str = "KINETIC_ADMIN_PASSWORD";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KineticConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub api_base_url: String,
    /// Added in v1.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    pub storage: StorageConfig,
    pub admin_password: String,
    pub created_at: jiff::Timestamp,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl KineticConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Apply environment overrides for the API base URL and admin password.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(API_BASE_URL_ENV).ok(),
            std::env::var(ADMIN_PASSWORD_ENV).ok(),
        )
    }

    pub fn with_overrides(
        mut self,
        api_base_url: Option<String>,
        admin_password: Option<String>,
    ) -> Self {
        if let Some(url) = api_base_url.filter(|v| !v.is_empty()) {
            self.api_base_url = url;
        }
        if let Some(password) = admin_password.filter(|v| !v.is_empty()) {
            self.admin_password = password;
        }
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// S3-compatible endpoint, e.g. `https://<project>.supabase.co/storage/v1/s3`.
    /// `None` talks to AWS S3 itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    pub region: String,
    /// Prefix of public object URLs, e.g.
    /// `https://<project>.supabase.co/storage/v1/object/public`.
    pub public_base_url: String,
    pub credentials: CredentialSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    Inline {
        access_key_id: String,
        secret_access_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        session_token: Option<String>,
    },
    Profile {
        profile_name: String,
    },
    DefaultChain,
}

/// Redacted config info safe to print.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigInfo {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub storage_endpoint: Option<String>,
    pub region: String,
    pub public_base_url: String,
    pub created_at: String,
    pub credential_type: String,
    pub profile_name: Option<String>,
    pub access_key_hint: Option<String>,
    pub admin_password: String,
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.kinetic.admin"))
}

pub fn has_config(dir: &Path) -> bool {
    dir.join("config.json").exists()
}

pub fn load_config(dir: &Path) -> eyre::Result<KineticConfig> {
    let path = dir.join("config.json");
    let contents = std::fs::read_to_string(&path).map_err(|e| {
        eyre::eyre!(
            "failed to read config at {}: {e} (run `kinetic config init`)",
            path.display()
        )
    })?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: KineticConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update kinetic."
        ));
    }

    // v0 → v1: add request_timeout_secs
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("request_timeout_secs")
            .or_insert(serde_json::Value::Number(DEFAULT_TIMEOUT_SECS.into()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added request_timeout_secs)");
    }

    Ok(json)
}

pub fn save_config(dir: &Path, config: &KineticConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join("config.json");
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // The file holds the admin password and possibly storage keys.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn config_info(config: &KineticConfig) -> ConfigInfo {
    let (credential_type, profile_name, access_key_hint) = match &config.storage.credentials {
        CredentialSource::Inline {
            access_key_id,
            session_token,
            ..
        } => {
            let cred_type = if session_token.is_some() {
                "temporary"
            } else {
                "inline"
            };
            (cred_type.to_string(), None, Some(redact_access_key(access_key_id)))
        }
        CredentialSource::Profile { profile_name } => {
            ("profile".to_string(), Some(profile_name.clone()), None)
        }
        CredentialSource::DefaultChain => ("default_chain".to_string(), None, None),
    };

    ConfigInfo {
        api_base_url: config.api_base_url.clone(),
        request_timeout_secs: config.request_timeout_secs,
        storage_endpoint: config.storage.endpoint_url.clone(),
        region: config.storage.region.clone(),
        public_base_url: config.storage.public_base_url.clone(),
        created_at: config.created_at.to_string(),
        credential_type,
        profile_name,
        access_key_hint,
        admin_password: "********".to_string(),
    }
}

fn redact_access_key(key: &str) -> String {
    if key.len() <= 8 {
        return "****".to_string();
    }
    let prefix = &key[..4];
    let suffix = &key[key.len() - 4..];
    format!("{prefix}...{suffix}")
}
