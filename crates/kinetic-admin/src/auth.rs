//! The admin password gate.
//!
//! The configured secret is compared with plain equality on the client.
//! This keeps casual visitors out and nothing more; a real deployment needs
//! a server-issued session.

use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};

/// Where the unlocked flag is persisted between runs.
pub trait SessionStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn is_authenticated(&self) -> Result<bool, Self::Error>;

    fn set_authenticated(&self, value: bool) -> Result<(), Self::Error>;
}

pub struct AuthGate<S> {
    secret: String,
    session: S,
}

impl<S: SessionStore> AuthGate<S> {
    pub fn new(secret: impl Into<String>, session: S) -> Self {
        Self {
            secret: secret.into(),
            session,
        }
    }

    pub fn is_unlocked(&self) -> Result<bool, S::Error> {
        self.session.is_authenticated()
    }

    /// Compare `input` with the secret and persist the flag on a match.
    /// An empty secret never unlocks.
    pub fn attempt(&self, input: &str) -> Result<bool, S::Error> {
        let ok = !self.secret.is_empty() && input == self.secret;
        if ok {
            self.session.set_authenticated(true)?;
            tracing::info!("admin unlocked");
        } else {
            tracing::warn!("wrong admin password");
        }
        Ok(ok)
    }

    pub fn lock(&self) -> Result<(), S::Error> {
        self.session.set_authenticated(false)
    }

    pub fn session(&self) -> &S {
        &self.session
    }
}

/// Session flag held in memory only.
#[derive(Debug, Default)]
pub struct MemorySession {
    authenticated: AtomicBool,
}

impl SessionStore for MemorySession {
    type Error = Infallible;

    fn is_authenticated(&self) -> Result<bool, Infallible> {
        Ok(self.authenticated.load(Ordering::SeqCst))
    }

    fn set_authenticated(&self, value: bool) -> Result<(), Infallible> {
        self.authenticated.store(value, Ordering::SeqCst);
        Ok(())
    }
}
