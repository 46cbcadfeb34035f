//! Sign-in API handlers.
//!
//! ```text
//! POST /api/v1/login {"email":"admin@example.com","password":"password123"}
//! POST /api/v1/logout
//! GET /api/v1/session
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{LoginCredentials, SignInError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;

/// Login request body for `POST /api/v1/login`.
///
/// Missing fields deserialise as empty strings so they are reported by the
/// required-field check rather than as malformed JSON.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[schema(example = "admin@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "password123")]
    pub password: String,
}

/// Current state of the administrator session.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub authenticated: bool,
}

/// Sign the administrator in.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = SessionResponse),
        (status = 400, description = "Email or password missing", body = ErrorSchema),
        (status = 401, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<SessionResponse>> {
    let LoginRequest { email, password } = payload.into_inner();
    let password = zeroize::Zeroizing::new(password);
    let credentials =
        LoginCredentials::try_from_parts(&email, &password).map_err(SignInError::RequiredFields)?;
    let state = session.sign_in(credentials).await?;
    Ok(web::Json(SessionResponse {
        authenticated: state.is_signed_in(),
    }))
}

/// Sign out; succeeds whether or not a session was active.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 200, description = "Signed out", body = SessionResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["session"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<web::Json<SessionResponse>> {
    let state = session.sign_out().await?;
    Ok(web::Json(SessionResponse {
        authenticated: state.is_signed_in(),
    }))
}

/// Report whether the administrator is signed in.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses((status = 200, description = "Session state", body = SessionResponse)),
    tags = ["session"],
    operation_id = "sessionStatus"
)]
#[get("/session")]
pub async fn session_status(session: SessionContext) -> web::Json<SessionResponse> {
    web::Json(SessionResponse {
        authenticated: session.is_authenticated(),
    })
}
