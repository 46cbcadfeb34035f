//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the structure of their corresponding domain
//! types but live in the inbound adapter layer where framework concerns belong.

#![expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Credentials were rejected or no session is active.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested record does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "name is required")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details, typically `{ "field", "code" }`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Skill`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Skill)]
pub enum SkillSchema {
    React,
    TypeScript,
    JavaScript,
    Python,
    #[schema(rename = "Node.js")]
    NodeJs,
    #[schema(rename = "SQL")]
    Sql,
    Docker,
}

/// OpenAPI schema for [`crate::domain::Developer`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Developer)]
#[schema(rename_all = "camelCase")]
pub struct DeveloperSchema {
    #[schema(example = 1)]
    id: u64,
    #[schema(example = "Jane Doe")]
    name: String,
    #[schema(example = "jane@example.com")]
    email: String,
    #[schema(example = "Frontend Developer")]
    title: String,
    bio: Option<String>,
    location: Option<String>,
    skills: Vec<SkillSchema>,
    years_experience: u32,
    github_url: Option<String>,
    linkedin_url: Option<String>,
    is_professional: bool,
}

/// OpenAPI schema for [`crate::domain::PortfolioSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PortfolioSummary)]
#[schema(rename_all = "camelCase")]
pub struct PortfolioSummarySchema {
    total_developers: usize,
    professional_developers: usize,
    non_professional_developers: usize,
    total_skill_entries: usize,
    #[schema(example = 7)]
    tracked_skills: usize,
    /// Developers per skill, keyed by skill name in enumeration order.
    skill_counts: BTreeMap<String, usize>,
}

/// OpenAPI schema for [`crate::domain::NavigationDecision`].
///
/// `view` and `developerId` accompany `render`; `to` accompanies `redirect`.
#[derive(ToSchema)]
#[schema(as = crate::domain::NavigationDecision)]
#[schema(rename_all = "camelCase")]
pub struct NavigationDecisionSchema {
    #[schema(example = "render")]
    action: String,
    #[schema(example = "developerProfile")]
    view: Option<String>,
    #[schema(example = 2)]
    developer_id: Option<u64>,
    #[schema(example = "/login")]
    to: Option<String>,
}
