//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::PathBuf;

use portfolio::settings::{ServerSettings, SettingsError};

/// Where the durable session flag lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStorage {
    /// One file per key inside this directory.
    Directory(PathBuf),
    /// Process memory; the session does not survive a restart.
    Memory,
}

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) session_storage: SessionStorage,
    pub(crate) seed_examples: bool,
}

impl ServerConfig {
    /// Construct a configuration binding `bind_addr` with file-backed
    /// session state under `state_dir` and the example records loaded.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Used by state builder tests to pin configuration")
    )]
    #[must_use]
    pub fn new(bind_addr: SocketAddr, state_dir: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr,
            session_storage: SessionStorage::Directory(state_dir.into()),
            seed_examples: true,
        }
    }

    /// Resolve loaded settings into a server configuration.
    pub fn from_settings(settings: &ServerSettings) -> Result<Self, SettingsError> {
        let session_storage = if settings.ephemeral_session {
            SessionStorage::Memory
        } else {
            SessionStorage::Directory(settings.state_dir().to_path_buf())
        };
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            session_storage,
            seed_examples: settings.seed_examples(),
        })
    }

    /// Keep the session flag in memory instead of on disk.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Used by state builder tests to pin configuration")
    )]
    #[must_use]
    pub fn with_memory_session(mut self) -> Self {
        self.session_storage = SessionStorage::Memory;
        self
    }

    /// Start the developer store empty or with the example records.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "Used by state builder tests to pin configuration")
    )]
    #[must_use]
    pub fn with_seed_examples(mut self, seed_examples: bool) -> Self {
        self.seed_examples = seed_examples;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
