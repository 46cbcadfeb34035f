//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::{ADMIN_EMAIL, ADMIN_PASSWORD};
use crate::outbound::memory::{InMemoryDeveloperStore, InMemorySessionFlagStore};

use super::auth::LoginRequest;
use super::state::{HttpState, HttpStatePorts};

/// State over a seeded in-memory store with no durable session.
pub fn seeded_state() -> HttpState {
    HttpState::new(HttpStatePorts {
        developers: Arc::new(InMemoryDeveloperStore::seeded()),
        session_flags: Arc::new(InMemorySessionFlagStore::new()),
    })
}

/// Same as [`seeded_state`] but already signed in.
pub fn signed_in_state() -> HttpState {
    let state = seeded_state();
    state
        .session
        .sign_in(ADMIN_EMAIL, ADMIN_PASSWORD)
        .expect("admin credentials sign in");
    state
}

/// Application serving the full `/api/v1` surface over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .service(web::scope("/api/v1").configure(super::configure))
}

/// Login body carrying the administrator pair.
pub fn admin_login() -> LoginRequest {
    LoginRequest {
        email: ADMIN_EMAIL.into(),
        password: ADMIN_PASSWORD.into(),
    }
}
