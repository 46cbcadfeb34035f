//! File-backed `SessionFlagStore` adapter.
//!
//! Each key is a file in the state directory whose contents are the value,
//! so the signed-in flag survives restarts as `<state_dir>/isLoggedIn`.

use std::io;
use std::path::{Component, Path};

use cap_std::{ambient_authority, fs::Dir};

use crate::domain::ports::{SessionFlagStore, SessionFlagStoreError};

/// Flag store writing one file per key.
#[derive(Debug)]
pub struct FileSessionFlagStore {
    directory: Dir,
}

impl FileSessionFlagStore {
    /// Open `path`, creating it and any missing parents.
    pub fn open(path: &Path) -> io::Result<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let directory = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self { directory })
    }
}

fn key_path(key: &str) -> Result<&Path, SessionFlagStoreError> {
    let path = Path::new(key);
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(path),
        _ => Err(SessionFlagStoreError::storage(format!(
            "flag key {key:?} is not a plain file name"
        ))),
    }
}

fn storage_error(key: &str, error: &io::Error) -> SessionFlagStoreError {
    SessionFlagStoreError::storage(format!("flag {key}: {error}"))
}

impl SessionFlagStore for FileSessionFlagStore {
    fn read(&self, key: &str) -> Result<Option<String>, SessionFlagStoreError> {
        match self.directory.read_to_string(key_path(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(storage_error(key, &error)),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionFlagStoreError> {
        self.directory
            .write(key_path(key)?, value.as_bytes())
            .map_err(|error| storage_error(key, &error))
    }

    fn remove(&self, key: &str) -> Result<(), SessionFlagStoreError> {
        match self.directory.remove_file(key_path(key)?) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(storage_error(key, &error)),
        }
    }
}
