//! Typed news endpoints: submission, verification, and the user feed.

use std::sync::Arc;

use crate::error::Result;
use crate::gateway::{endpoints, Gateway};
use crate::types::{News, NewsSubmission, NewsVerification, UserNewsPage};

/// Client for the news endpoints, dispatching through the session gateway.
pub struct NewsService {
    gateway: Arc<Gateway>,
}

impl NewsService {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Submit a news item for verification. It starts out `pending`.
    pub async fn submit(&self, submission: &NewsSubmission) -> Result<News> {
        self.gateway.post(endpoints::NEWS_SUBMIT, submission).await
    }

    /// Run AI verification on a previously submitted item.
    pub async fn verify(&self, news_id: &str) -> Result<NewsVerification> {
        self.gateway.get(&endpoints::news_verify(news_id)).await
    }

    /// Fetch the given user's submissions.
    pub async fn user_news(&self, user_id: &str) -> Result<UserNewsPage> {
        self.gateway.get(&endpoints::news_user(user_id)).await
    }
}
