use std::path::{Path, PathBuf};

use kinetic_admin::auth::SessionStore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    authenticated: bool,
}

/// The unlocked flag, persisted as `session.json` next to the config.
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join("session.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSession {
    type Error = SessionError;

    fn is_authenticated(&self) -> Result<bool, SessionError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e.into()),
        };
        let file: SessionFile = serde_json::from_str(&contents)?;
        Ok(file.authenticated)
    }

    fn set_authenticated(&self, value: bool) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(&SessionFile {
            authenticated: value,
        })?;
        std::fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), authenticated = value, "session saved");
        Ok(())
    }
}
