//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and ports, and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DeveloperStore, SessionFlagStore};
use crate::domain::{DeveloperService, SessionGuard};

/// Parameter object bundling the port implementations behind the handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub developers: Arc<dyn DeveloperStore>,
    pub session_flags: Arc<dyn SessionFlagStore>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub session: Arc<SessionGuard>,
    pub developers: DeveloperService,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// The session guard is restored from the flag store here, so a flag left
    /// by a previous run signs the administrator straight back in.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use portfolio::inbound::http::state::{HttpState, HttpStatePorts};
    /// use portfolio::outbound::memory::{InMemoryDeveloperStore, InMemorySessionFlagStore};
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     developers: Arc::new(InMemoryDeveloperStore::seeded()),
    ///     session_flags: Arc::new(InMemorySessionFlagStore::new()),
    /// });
    /// assert!(!state.session.is_authenticated());
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            developers,
            session_flags,
        } = ports;
        Self {
            session: Arc::new(SessionGuard::restore(session_flags)),
            developers: DeveloperService::new(developers),
        }
    }
}
