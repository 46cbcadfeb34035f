//! Session extractor keeping HTTP handlers free of guard plumbing.
//!
//! Handlers take a [`SessionContext`] argument and call
//! [`SessionContext::require_authenticated`] before touching protected data.

use std::sync::Arc;

use actix_web::error::BlockingError;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};

use crate::domain::{Error, LoginCredentials, SessionGuard, SessionState};

use super::state::HttpState;

/// Handle on the process-wide session guard.
#[derive(Clone)]
pub struct SessionContext(Arc<SessionGuard>);

impl SessionContext {
    pub fn new(guard: Arc<SessionGuard>) -> Self {
        Self(guard)
    }

    pub fn is_authenticated(&self) -> bool {
        self.0.is_authenticated()
    }

    /// Require a signed-in session or return `401 Unauthorized`.
    pub fn require_authenticated(&self) -> Result<(), Error> {
        self.0.require_authenticated()
    }

    /// Sign in on the blocking pool; the guard writes the durable flag.
    pub async fn sign_in(&self, credentials: LoginCredentials) -> Result<SessionState, Error> {
        let guard = Arc::clone(&self.0);
        web::block(move || guard.sign_in_with(&credentials))
            .await
            .map_err(blocking_failed)?
            .map_err(Error::from)
    }

    /// Sign out on the blocking pool; the guard clears the durable flag.
    pub async fn sign_out(&self) -> Result<SessionState, Error> {
        let guard = Arc::clone(&self.0);
        web::block(move || guard.sign_out())
            .await
            .map_err(blocking_failed)
    }
}

fn blocking_failed(err: BlockingError) -> Error {
    Error::internal(format!("session worker failed: {err}"))
}

impl FromRequest for SessionContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let guard = req
            .app_data::<web::Data<HttpState>>()
            .map(|state| Self::new(state.session.clone()))
            .ok_or_else(|| Error::internal("HTTP state is not configured"));
        ready(guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ADMIN_EMAIL, ADMIN_PASSWORD};
    use crate::inbound::http::test_utils::seeded_state;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test};

    fn session_test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new().app_data(web::Data::new(state)).route(
            "/require",
            web::get().to(|session: SessionContext| async move {
                session.require_authenticated()?;
                Ok::<_, Error>(HttpResponse::Ok())
            }),
        )
    }

    #[actix_web::test]
    async fn signed_out_guard_is_unauthorised() {
        let app = test::init_service(session_test_app(seeded_state())).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/require").to_request()).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn sign_out_through_context_runs_off_the_request_thread() {
        let state = seeded_state();
        let context = SessionContext::new(state.session.clone());
        let credentials =
            LoginCredentials::try_from_parts(ADMIN_EMAIL, ADMIN_PASSWORD).expect("credentials");
        context.sign_in(credentials).await.expect("admin signs in");
        assert!(context.is_authenticated());

        let signed_out = context.sign_out().await.expect("sign out");
        assert_eq!(signed_out, SessionState::SignedOut);
        assert!(!state.session.is_authenticated());
    }

    #[actix_web::test]
    async fn sign_in_through_context_is_seen_by_later_requests() {
        let state = seeded_state();
        let context = SessionContext::new(state.session.clone());
        let credentials =
            LoginCredentials::try_from_parts(ADMIN_EMAIL, ADMIN_PASSWORD).expect("credentials");
        context.sign_in(credentials).await.expect("admin signs in");

        let app = test::init_service(session_test_app(state)).await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/require").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn missing_state_is_an_internal_error() {
        let app = test::init_service(App::new().route(
            "/require",
            web::get().to(|session: SessionContext| async move {
                session.require_authenticated()?;
                Ok::<_, Error>(HttpResponse::Ok())
            }),
        ))
        .await;
        let res =
            test::call_service(&app, test::TestRequest::get().uri("/require").to_request()).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
