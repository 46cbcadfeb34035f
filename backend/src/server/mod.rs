//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ServerConfig, SessionStorage};

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use portfolio::Trace;
#[cfg(debug_assertions)]
use portfolio::doc::ApiDoc;
use portfolio::inbound::http::configure;
use portfolio::inbound::http::state::HttpState;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api/v1").configure(configure));

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when opening the state directory, binding
/// the socket or starting the server fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config)?);
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "portfolio server listening");
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use portfolio::outbound::memory::{InMemoryDeveloperStore, InMemorySessionFlagStore};
    use portfolio::inbound::http::state::HttpStatePorts;
    use std::sync::Arc;

    fn state() -> web::Data<HttpState> {
        web::Data::new(HttpState::new(HttpStatePorts {
            developers: Arc::new(InMemoryDeveloperStore::seeded()),
            session_flags: Arc::new(InMemorySessionFlagStore::new()),
        }))
    }

    #[actix_web::test]
    async fn responses_carry_trace_header() {
        let app = actix_test::init_service(build_app(state())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/session")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("trace-id"));
    }

    #[actix_web::test]
    async fn unauthorised_errors_echo_trace_id() {
        let app = actix_test::init_service(build_app(state())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/dashboard")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let header = response
            .headers()
            .get("trace-id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .expect("trace id header");
        let body: serde_json::Value = actix_test::read_body_json(response).await;
        assert_eq!(body["traceId"].as_str(), Some(header.as_str()));
    }
}
