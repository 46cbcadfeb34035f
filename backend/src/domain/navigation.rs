//! Route resolution for the single-page client.
//!
//! The client asks where a path should lead before rendering it. Every
//! protected view redirects to the sign-in page while signed out; the root
//! and unknown paths bounce to the dashboard or the sign-in page depending
//! on the session.

use serde::Serialize;

use super::DeveloperId;

/// Path of the sign-in view.
pub const LOGIN_PATH: &str = "/login";
/// Path of the dashboard view.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Screen rendered by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum View {
    Login,
    Dashboard,
    DeveloperList,
    NewDeveloper,
    #[serde(rename_all = "camelCase")]
    DeveloperProfile { developer_id: DeveloperId },
}

impl View {
    /// Whether the view needs a signed-in session.
    pub const fn is_protected(self) -> bool {
        !matches!(self, Self::Login)
    }
}

/// Known client routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    View(View),
    Unknown,
}

impl Route {
    /// Match a request path against the route table.
    ///
    /// A single trailing slash is ignored. `/developers/new` takes precedence
    /// over `/developers/:id`, and an `:id` that is not a non-negative
    /// integer falls through to [`Route::Unknown`].
    pub fn parse(path: &str) -> Self {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [""] => Self::Root,
            ["login"] => Self::View(View::Login),
            ["dashboard"] => Self::View(View::Dashboard),
            ["developers"] => Self::View(View::DeveloperList),
            ["developers", "new"] => Self::View(View::NewDeveloper),
            ["developers", raw_id] => raw_id.parse::<u64>().map_or(Self::Unknown, |id| {
                Self::View(View::DeveloperProfile {
                    developer_id: DeveloperId::new(id),
                })
            }),
            _ => Self::Unknown,
        }
    }
}

/// What the client should do with a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum NavigationDecision {
    /// Show the view.
    Render {
        #[serde(flatten)]
        view: View,
    },
    /// Replace the current location with `to`.
    Redirect { to: &'static str },
}

/// Decide where a navigation to `path` leads.
///
/// # Examples
/// ```
/// use portfolio::domain::{NavigationDecision, View, resolve_navigation};
///
/// assert_eq!(
///     resolve_navigation("/dashboard", false),
///     NavigationDecision::Redirect { to: "/login" },
/// );
/// assert_eq!(
///     resolve_navigation("/developers", true),
///     NavigationDecision::Render { view: View::DeveloperList },
/// );
/// ```
pub fn resolve_navigation(path: &str, is_authenticated: bool) -> NavigationDecision {
    let home = if is_authenticated {
        DASHBOARD_PATH
    } else {
        LOGIN_PATH
    };

    match Route::parse(path) {
        Route::Root | Route::Unknown => NavigationDecision::Redirect { to: home },
        // An active session skips the sign-in form.
        Route::View(View::Login) if is_authenticated => NavigationDecision::Redirect { to: home },
        Route::View(view) if view.is_protected() && !is_authenticated => {
            NavigationDecision::Redirect { to: LOGIN_PATH }
        }
        Route::View(view) => NavigationDecision::Render { view },
    }
}
