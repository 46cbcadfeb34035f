//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod dashboard;
pub mod developers;
pub mod error;
pub mod navigation;
pub mod schemas;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::ApiResult;

/// Register every `/api/v1` handler on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use portfolio::inbound::http::configure;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::query_config())
        .service(auth::login)
        .service(auth::logout)
        .service(auth::session_status)
        .service(navigation::navigate)
        .service(dashboard::dashboard)
        .service(developers::list_developers)
        .service(developers::create_developer)
        .service(developers::get_developer)
        .service(developers::update_developer)
        .service(developers::delete_developer);
}
