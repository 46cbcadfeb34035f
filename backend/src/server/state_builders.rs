//! Builders wiring outbound adapters into HTTP state.

use std::sync::Arc;

use portfolio::domain::ports::{DeveloperStore, SessionFlagStore};
use portfolio::inbound::http::state::{HttpState, HttpStatePorts};
use portfolio::outbound::filesystem::FileSessionFlagStore;
use portfolio::outbound::memory::{InMemoryDeveloperStore, InMemorySessionFlagStore};
use tracing::info;

use super::{ServerConfig, SessionStorage};

fn build_developer_store(config: &ServerConfig) -> Arc<dyn DeveloperStore> {
    if config.seed_examples {
        Arc::new(InMemoryDeveloperStore::seeded())
    } else {
        info!(reason = "disabled", "example developers skipped");
        Arc::new(InMemoryDeveloperStore::empty())
    }
}

fn build_session_flags(config: &ServerConfig) -> std::io::Result<Arc<dyn SessionFlagStore>> {
    match &config.session_storage {
        SessionStorage::Directory(path) => {
            let store = FileSessionFlagStore::open(path).map_err(|err| {
                std::io::Error::other(format!(
                    "failed to open state directory {}: {err}",
                    path.display()
                ))
            })?;
            info!(state_dir = %path.display(), "session flag stored on disk");
            Ok(Arc::new(store))
        }
        SessionStorage::Memory => Ok(Arc::new(InMemorySessionFlagStore::new())),
    }
}

/// Build HTTP state from the configured adapters.
///
/// # Errors
/// Returns [`std::io::Error`] when the state directory cannot be opened.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    Ok(HttpState::new(HttpStatePorts {
        developers: build_developer_store(config),
        session_flags: build_session_flags(config)?,
    }))
}
