//! In-memory `SessionFlagStore` adapter.
//!
//! Flags vanish with the process; used by tests and when no state directory
//! is configured.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ports::{SessionFlagStore, SessionFlagStoreError};

/// Flag store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemorySessionFlagStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemorySessionFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionFlagStore for InMemorySessionFlagStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionFlagStoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionFlagStoreError> {
        self.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionFlagStoreError> {
        self.lock().remove(key);
        Ok(())
    }
}
