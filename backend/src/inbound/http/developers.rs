//! Developer portfolio API handlers.
//!
//! ```text
//! GET    /api/v1/developers?query=jane&skill=React
//! GET    /api/v1/developers/{id}
//! POST   /api/v1/developers {"name":"Sam","email":"sam@example.com",...}
//! PUT    /api/v1/developers/{id}
//! DELETE /api/v1/developers/{id}
//! ```
//!
//! Every endpoint here requires a signed-in session.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{
    Developer, DeveloperId, DeveloperListing, DeveloperProfile, Error, Skill, SkillFilter,
    UnknownSkillError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DeveloperSchema, ErrorSchema, SkillSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Query parameters for `GET /api/v1/developers`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DeveloperListQuery {
    /// Case-insensitive text matched against name, title and email.
    #[serde(default)]
    pub query: String,
    /// Skill name, or `All` for no skill filter.
    #[param(example = "React")]
    pub skill: Option<String>,
}

impl DeveloperListQuery {
    fn skill_filter(&self) -> Result<SkillFilter, Error> {
        match self.skill.as_deref() {
            None | Some("") => Ok(SkillFilter::All),
            Some(raw) => raw.parse().map_err(|err: UnknownSkillError| {
                Error::invalid_request(err.to_string())
                    .with_details(json!({ "field": "skill", "code": "unknown_skill" }))
            }),
        }
    }
}

/// Filtered developers plus counts for the whole portfolio.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperListResponse {
    #[schema(value_type = Vec<DeveloperSchema>)]
    pub items: Vec<Developer>,
    /// Developers in the unfiltered portfolio.
    pub total_count: usize,
    /// Professional developers in the unfiltered portfolio.
    pub professional_count: usize,
}

impl From<DeveloperListing> for DeveloperListResponse {
    fn from(listing: DeveloperListing) -> Self {
        Self {
            items: listing.items,
            total_count: listing.total,
            professional_count: listing.professional,
        }
    }
}

/// Body accepted by the create and edit endpoints.
///
/// Only `name` and `email` are required; omitted fields take their empty
/// defaults and blank optional text is dropped during validation.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperPayload {
    #[serde(default)]
    #[schema(example = "Sam Lee")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "sam@example.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "Backend Engineer")]
    pub title: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    #[schema(value_type = Vec<SkillSchema>)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub years_experience: u32,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub is_professional: bool,
}

impl From<DeveloperPayload> for DeveloperProfile {
    fn from(payload: DeveloperPayload) -> Self {
        let DeveloperPayload {
            name,
            email,
            title,
            bio,
            location,
            skills,
            years_experience,
            github_url,
            linkedin_url,
            is_professional,
        } = payload;
        Self {
            name,
            email,
            title,
            bio,
            location,
            skills,
            years_experience,
            github_url,
            linkedin_url,
            is_professional,
        }
    }
}

/// List developers matching an optional text query and skill.
#[utoipa::path(
    get,
    path = "/api/v1/developers",
    params(DeveloperListQuery),
    responses(
        (status = 200, description = "Matching developers", body = DeveloperListResponse),
        (status = 400, description = "Unknown skill", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["developers"],
    operation_id = "listDevelopers"
)]
#[get("/developers")]
pub async fn list_developers(
    session: SessionContext,
    state: web::Data<HttpState>,
    params: web::Query<DeveloperListQuery>,
) -> ApiResult<web::Json<DeveloperListResponse>> {
    session.require_authenticated()?;
    let skill = params.skill_filter()?;
    let listing = state.developers.search(&params.query, skill).await?;
    Ok(web::Json(listing.into()))
}

/// Fetch one developer by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/developers/{id}",
    params(("id" = u64, Path, description = "Developer identifier")),
    responses(
        (status = 200, description = "Developer", body = DeveloperSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 404, description = "No developer with this identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["developers"],
    operation_id = "getDeveloper"
)]
#[get("/developers/{id}")]
pub async fn get_developer(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<web::Json<Developer>> {
    session.require_authenticated()?;
    let id = DeveloperId::new(path.into_inner());
    state
        .developers
        .get(id)
        .await?
        .map(web::Json)
        .ok_or_else(|| Error::not_found(format!("developer {id} not found")))
}

/// Validate a draft and add it to the portfolio.
#[utoipa::path(
    post,
    path = "/api/v1/developers",
    request_body = DeveloperPayload,
    responses(
        (status = 201, description = "Developer created", body = DeveloperSchema),
        (status = 400, description = "Invalid draft", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["developers"],
    operation_id = "createDeveloper"
)]
#[post("/developers")]
pub async fn create_developer(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<DeveloperPayload>,
) -> ApiResult<HttpResponse> {
    session.require_authenticated()?;
    let created = state.developers.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// Replace the developer stored under `id`.
///
/// The identifier comes from the path. Replacing an unknown identifier
/// leaves the portfolio unchanged and echoes the record back.
#[utoipa::path(
    put,
    path = "/api/v1/developers/{id}",
    params(("id" = u64, Path, description = "Developer identifier")),
    request_body = DeveloperPayload,
    responses(
        (status = 200, description = "Developer updated", body = DeveloperSchema),
        (status = 400, description = "Invalid draft", body = ErrorSchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["developers"],
    operation_id = "updateDeveloper"
)]
#[put("/developers/{id}")]
pub async fn update_developer(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<u64>,
    payload: web::Json<DeveloperPayload>,
) -> ApiResult<web::Json<Developer>> {
    session.require_authenticated()?;
    let id = DeveloperId::new(path.into_inner());
    let updated = state
        .developers
        .update(id, payload.into_inner().into())
        .await?;
    Ok(web::Json(updated))
}

/// Remove a developer; unknown identifiers succeed silently.
#[utoipa::path(
    delete,
    path = "/api/v1/developers/{id}",
    params(("id" = u64, Path, description = "Developer identifier")),
    responses(
        (status = 204, description = "Developer removed"),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["developers"],
    operation_id = "deleteDeveloper"
)]
#[delete("/developers/{id}")]
pub async fn delete_developer(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<u64>,
) -> ApiResult<HttpResponse> {
    session.require_authenticated()?;
    state
        .developers
        .delete(DeveloperId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests;
