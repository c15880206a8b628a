//! Wire types shared with the backend.

pub mod news;
pub mod user;

pub use news::{News, NewsStatus, NewsSubmission, NewsVerification, UserNewsPage};
pub use user::UserProfile;
