//! Process-wide sign-in state.
//!
//! There is exactly one session: the portfolio has a single demo
//! administrator and no per-user session table. The state survives restarts
//! through a durable flag written under [`SESSION_FLAG_KEY`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use serde_json::json;
use tracing::{error, info, warn};

use super::auth::is_admin;
use super::ports::{SessionFlagStore, SessionFlagStoreError};
use super::{Error, LoginCredentials, LoginValidationError};

/// Durable key holding the signed-in flag.
pub const SESSION_FLAG_KEY: &str = "isLoggedIn";
/// Value stored under [`SESSION_FLAG_KEY`] while signed in.
pub const SIGNED_IN_VALUE: &str = "true";
/// Value written over the flag when it cannot be removed.
pub const SIGNED_OUT_VALUE: &str = "false";

/// Whether the administrator is signed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    #[default]
    SignedOut,
    SignedIn,
}

impl SessionState {
    pub const fn is_signed_in(self) -> bool {
        matches!(self, Self::SignedIn)
    }

    /// Interpret a durable flag value; only the exact text `"true"` counts.
    fn from_flag(value: Option<&str>) -> Self {
        if value == Some(SIGNED_IN_VALUE) {
            Self::SignedIn
        } else {
            Self::SignedOut
        }
    }
}

/// Why a sign-in attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignInError {
    /// A required field was blank; credentials were not compared.
    #[error("email and password are required")]
    RequiredFields(LoginValidationError),
    /// The submitted pair is not the administrator's.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The pair matched but the flag could not be persisted.
    #[error(transparent)]
    Storage(#[from] SessionFlagStoreError),
}

impl From<SignInError> for Error {
    fn from(value: SignInError) -> Self {
        match value {
            SignInError::RequiredFields(field) => Error::invalid_request(field.to_string())
                .with_details(json!({ "field": field.field(), "code": field.code() })),
            SignInError::InvalidCredentials => Error::unauthorized("invalid credentials"),
            SignInError::Storage(err) => {
                Error::internal(format!("failed to persist session: {err}"))
            }
        }
    }
}

/// Guard deciding whether protected views may be shown.
///
/// The in-memory state mirrors the durable flag: writes go to the flag
/// store first and only then flip the state, so a storage failure during
/// sign-in leaves the guard signed out.
pub struct SessionGuard {
    flags: Arc<dyn SessionFlagStore>,
    state: Mutex<SessionState>,
}

impl SessionGuard {
    /// Restore the guard from the durable flag.
    ///
    /// An unreadable flag is treated as signed out.
    pub fn restore(flags: Arc<dyn SessionFlagStore>) -> Self {
        let state = match flags.read(SESSION_FLAG_KEY) {
            Ok(value) => SessionState::from_flag(value.as_deref()),
            Err(err) => {
                warn!(error = %err, "session flag unreadable; starting signed out");
                SessionState::SignedOut
            }
        };
        info!(signed_in = state.is_signed_in(), "session restored");
        Self {
            flags,
            state: Mutex::new(state),
        }
    }

    /// Validate and compare the submitted credentials.
    ///
    /// Blank fields fail with [`SignInError::RequiredFields`] before any
    /// comparison. Otherwise only the exact administrator pair signs in; any
    /// mismatch leaves the state unchanged.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<SessionState, SignInError> {
        let credentials =
            LoginCredentials::try_from_parts(email, password).map_err(SignInError::RequiredFields)?;
        self.sign_in_with(&credentials)
    }

    /// Compare already-validated credentials.
    pub fn sign_in_with(&self, credentials: &LoginCredentials) -> Result<SessionState, SignInError> {
        if !is_admin(credentials) {
            warn!(email = credentials.email(), "sign-in rejected");
            return Err(SignInError::InvalidCredentials);
        }

        let mut state = self.lock();
        self.flags.write(SESSION_FLAG_KEY, SIGNED_IN_VALUE)?;
        *state = SessionState::SignedIn;
        info!(email = credentials.email(), "signed in");
        Ok(*state)
    }

    /// Sign out unconditionally.
    ///
    /// When the durable flag cannot be removed it is overwritten with
    /// [`SIGNED_OUT_VALUE`] so a restart still restores a signed-out guard.
    /// The in-memory state is signed out regardless.
    pub fn sign_out(&self) -> SessionState {
        let mut state = self.lock();
        *state = SessionState::SignedOut;
        if let Err(err) = self.flags.remove(SESSION_FLAG_KEY) {
            warn!(error = %err, "failed to remove durable session flag; overwriting");
            if let Err(err) = self.flags.write(SESSION_FLAG_KEY, SIGNED_OUT_VALUE) {
                error!(error = %err, "failed to clear durable session flag");
            }
        }
        info!("signed out");
        *state
    }

    pub fn state(&self) -> SessionState {
        *self.lock()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state().is_signed_in()
    }

    /// Require a signed-in session or fail with `unauthorized`.
    pub fn require_authenticated(&self) -> Result<(), Error> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(Error::unauthorized("login required"))
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
