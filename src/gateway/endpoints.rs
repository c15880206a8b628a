//! Backend endpoint paths.

pub const AUTH_LOGIN: &str = "/api/v1/auth/login";
pub const AUTH_CALLBACK: &str = "/api/v1/auth/callback";
pub const AUTH_ME: &str = "/api/v1/auth/me";
pub const AUTH_LOGOUT: &str = "/api/v1/auth/logout";
pub const NEWS_SUBMIT: &str = "/api/v1/news/submit";

pub fn news_verify(id: &str) -> String {
    format!("/api/v1/news/verify/{id}")
}

pub fn news_user(user_id: &str) -> String {
    format!("/api/v1/news/user/{user_id}")
}
