//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `PORTFOLIO_*` environment variables and
//! configuration files, in the precedence order OrthoConfig applies.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// Address bound when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
/// Directory holding durable session state when none is configured.
pub const DEFAULT_STATE_DIR: &str = "./var";

/// Raised when a configured value cannot be used.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Configuration values for the portfolio server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PORTFOLIO")]
pub struct ServerSettings {
    /// Socket address to listen on, e.g. `127.0.0.1:8080`.
    pub bind_addr: Option<String>,
    /// Directory holding the durable session flag.
    pub state_dir: Option<PathBuf>,
    /// Start with an empty developer store instead of the example records.
    #[ortho_config(default = false)]
    pub skip_seed: bool,
    /// Keep the session in memory only; nothing is written to `state_dir`.
    #[ortho_config(default = false)]
    pub ephemeral_session: bool,
}

impl ServerSettings {
    /// Configured bind address, falling back to [`DEFAULT_BIND_ADDR`].
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.trim().parse().map_err(|source| SettingsError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    /// Configured state directory, falling back to [`DEFAULT_STATE_DIR`].
    pub fn state_dir(&self) -> &Path {
        self.state_dir
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_STATE_DIR))
    }

    /// Whether the developer store starts with the example records.
    pub fn seed_examples(&self) -> bool {
        !self.skip_seed
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "PORTFOLIO_BIND_ADDR",
        "PORTFOLIO_STATE_DIR",
        "PORTFOLIO_SKIP_SEED",
        "PORTFOLIO_EPHEMERAL_SESSION",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("portfolio")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default parses"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("valid constant")
        );
        assert_eq!(settings.state_dir(), Path::new(DEFAULT_STATE_DIR));
        assert!(settings.seed_examples());
        assert!(!settings.ephemeral_session);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("PORTFOLIO_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            ("PORTFOLIO_STATE_DIR", Some("/tmp/portfolio-state".to_owned())),
            ("PORTFOLIO_SKIP_SEED", Some("true".to_owned())),
            ("PORTFOLIO_EPHEMERAL_SESSION", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("override parses"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("valid address")
        );
        assert_eq!(settings.state_dir(), Path::new("/tmp/portfolio-state"));
        assert!(!settings.seed_examples());
        assert!(settings.ephemeral_session);
    }

    #[rstest]
    fn malformed_bind_address_is_reported() {
        let settings = ServerSettings {
            bind_addr: Some("not-an-address".into()),
            state_dir: None,
            skip_seed: false,
            ephemeral_session: false,
        };
        let err = settings.bind_addr().expect_err("invalid address");
        assert!(err.to_string().contains("not-an-address"));
    }
}
