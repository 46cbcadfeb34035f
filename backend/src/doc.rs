//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every handler under `/api/v1`
//! - **Schemas**: domain type wrappers from
//!   [`crate::inbound::http::schemas`] plus the HTTP request and response
//!   bodies
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::auth::{LoginRequest, SessionResponse};
use crate::inbound::http::developers::{DeveloperListResponse, DeveloperPayload};
use crate::inbound::http::schemas::{
    DeveloperSchema, ErrorCodeSchema, ErrorSchema, NavigationDecisionSchema,
    PortfolioSummarySchema, SkillSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Developer portfolio API",
        description = "Sign-in, navigation and developer portfolio management for a single administrator."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::session_status,
        crate::inbound::http::navigation::navigate,
        crate::inbound::http::dashboard::dashboard,
        crate::inbound::http::developers::list_developers,
        crate::inbound::http::developers::get_developer,
        crate::inbound::http::developers::create_developer,
        crate::inbound::http::developers::update_developer,
        crate::inbound::http::developers::delete_developer,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        SkillSchema,
        DeveloperSchema,
        PortfolioSummarySchema,
        NavigationDecisionSchema,
        LoginRequest,
        SessionResponse,
        DeveloperPayload,
        DeveloperListResponse,
    )),
    tags(
        (name = "session", description = "Sign-in state and navigation"),
        (name = "developers", description = "Developer portfolio records"),
        (name = "dashboard", description = "Portfolio statistics")
    )
)]
pub struct ApiDoc;
