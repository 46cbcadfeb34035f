//! Navigation API handler.
//!
//! ```text
//! GET /api/v1/navigation?path=/developers/2
//! ```
//!
//! The client asks before rendering a path; the answer depends on the
//! current session, so this endpoint itself is public.

use actix_web::{get, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{NavigationDecision, resolve_navigation};
use crate::inbound::http::schemas::NavigationDecisionSchema;
use crate::inbound::http::session::SessionContext;

/// Query parameters for `GET /api/v1/navigation`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NavigationQuery {
    /// Client-side path being navigated to.
    #[param(example = "/developers/new")]
    pub path: String,
}

/// Decide whether to render the requested view or redirect.
#[utoipa::path(
    get,
    path = "/api/v1/navigation",
    params(NavigationQuery),
    responses(
        (status = 200, description = "Render or redirect decision", body = NavigationDecisionSchema)
    ),
    tags = ["session"],
    operation_id = "resolveNavigation"
)]
#[get("/navigation")]
pub async fn navigate(
    session: SessionContext,
    query: web::Query<NavigationQuery>,
) -> web::Json<NavigationDecision> {
    web::Json(resolve_navigation(&query.path, session.is_authenticated()))
}
