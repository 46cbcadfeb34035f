//! Dashboard API handler.
//!
//! ```text
//! GET /api/v1/dashboard
//! ```

use actix_web::{get, web};

use crate::domain::PortfolioSummary;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, PortfolioSummarySchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Headline figures and per-skill counts for the whole portfolio.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Portfolio summary", body = PortfolioSummarySchema),
        (status = 401, description = "Login required", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["dashboard"],
    operation_id = "dashboard"
)]
#[get("/dashboard")]
pub async fn dashboard(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<PortfolioSummary>> {
    session.require_authenticated()?;
    Ok(web::Json(state.developers.summary().await?))
}

#[cfg(test)]
mod tests {
    use crate::inbound::http::test_utils::{seeded_state, signed_in_state, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::Value;

    #[actix_web::test]
    async fn summarises_seeded_portfolio() {
        let app = actix_test::init_service(test_app(signed_in_state())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/dashboard")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = actix_test::read_body(response).await;
        let text = std::str::from_utf8(&body).expect("utf8 body");
        let value: Value = serde_json::from_str(text).expect("json body");
        assert_eq!(value["totalDevelopers"], 2);
        assert_eq!(value["professionalDevelopers"], 1);
        assert_eq!(value["nonProfessionalDevelopers"], 1);
        assert_eq!(value["totalSkillEntries"], 8);
        assert_eq!(value["trackedSkills"], 7);
        assert_eq!(value["skillCounts"]["TypeScript"], 2);
        assert_eq!(value["skillCounts"]["Node.js"], 0);

        // Skill counts keep enumeration order on the wire.
        let react = text.find("\"React\"").expect("React key");
        let docker = text.find("\"Docker\"").expect("Docker key");
        assert!(react < docker);
    }

    #[actix_web::test]
    async fn requires_sign_in() {
        let app = actix_test::init_service(test_app(seeded_state())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/dashboard")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
