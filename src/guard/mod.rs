//! Route guard: a pure decision function over session state.
//!
//! The embedder feeds in the current route and session state and acts on
//! the returned decision. Loading is rendered exactly while the session is
//! still initializing, so a page refresh never flashes the login screen or
//! protected content before validation settles.

use crate::session::SessionState;

/// The app's navigation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` — redirects by session state.
    Root,
    /// `/login` — the unauthenticated entry point.
    Login,
    /// `/auth/callback` — the OAuth provider redirect target.
    AuthCallback {
        code: Option<String>,
        error: Option<String>,
    },
    /// `/dashboard` — protected content.
    Dashboard,
}

impl Route {
    /// Parse a path with optional query string into a route.
    ///
    /// Returns `None` for paths outside the navigation surface.
    pub fn parse(path_and_query: &str) -> Option<Self> {
        let (path, query) = match path_and_query.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (path_and_query, None),
        };
        match path.trim_end_matches('/') {
            "" => Some(Self::Root),
            "/login" => Some(Self::Login),
            "/dashboard" => Some(Self::Dashboard),
            "/auth/callback" => Some(Self::AuthCallback {
                code: query.and_then(|q| query_param(q, "code")),
                error: query.and_then(|q| query_param(q, "error")),
            }),
            _ => None,
        }
    }
}

/// What the embedder should render for a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the protected content behind this route.
    Protected,
    /// Render the public (unauthenticated) content behind this route.
    Public,
    /// Render a loading view; session initialization is still in flight.
    Loading,
    /// Redirect to `/login`.
    RedirectToLogin,
    /// Redirect to `/dashboard`.
    RedirectToDashboard,
}

/// Decide what to render for `route` given the current session state.
pub fn decide(state: &SessionState, route: &Route) -> RouteDecision {
    if state.is_initializing() {
        return RouteDecision::Loading;
    }
    match route {
        Route::Dashboard => {
            if state.is_authenticated() {
                RouteDecision::Protected
            } else {
                RouteDecision::RedirectToLogin
            }
        }
        Route::Login => {
            if state.is_authenticated() {
                RouteDecision::RedirectToDashboard
            } else {
                RouteDecision::Public
            }
        }
        // A provider error, or a callback with nothing to exchange, goes
        // straight back to login; otherwise the callback view runs the
        // exchange.
        Route::AuthCallback { code, error } => {
            if error.is_some() || code.is_none() {
                RouteDecision::RedirectToLogin
            } else {
                RouteDecision::Public
            }
        }
        Route::Root => {
            if state.is_authenticated() {
                RouteDecision::RedirectToDashboard
            } else {
                RouteDecision::RedirectToLogin
            }
        }
    }
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| {
            // Values arrive form-urlencoded: '+' is a space and reserved
            // characters are percent-escaped. OAuth codes routinely contain
            // both (Google codes embed '/'), so the raw value would be the
            // wrong code.
            let value = value.replace('+', " ");
            urlencoding::decode(&value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or(value)
        })
    })
}
