//! Remote data service abstractions
//!
//! Provides trait-based abstractions for the editorial data service,
//! enabling testable console logic through dependency injection. The HTTP
//! implementation lives in [`http`]; tests substitute mocks.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

pub mod errors;
pub mod http;
pub mod retry;
pub mod types;

pub use errors::ServiceError;
pub use http::HttpArticleService;
pub use retry::{RetryConfig, RetryHandler};
pub use types::{Article, ArticlePage};

use crate::query::ListQuery;
use crate::workflow::ArticleStatus;

/// Article endpoints of the remote data service.
///
/// One page of articles per query, plus the two mutations the console
/// drives: a workflow status change and the destructive removal.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ArticleService: Send + Sync {
    /// Fetch the page of articles matching `query`, with the total match
    /// count independent of page size.
    async fn list_articles(&self, query: &ListQuery) -> Result<ArticlePage, ServiceError>;

    /// Set the publication status of one article.
    async fn set_status(&self, id: u64, target: ArticleStatus) -> Result<(), ServiceError>;

    /// Destructively remove an article. Not a workflow transition.
    async fn delete_article(&self, id: u64) -> Result<(), ServiceError>;
}

/// Crawler worker endpoint: the set of currently-running worker names.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WorkerService: Send + Sync {
    async fn running_workers(&self) -> Result<Vec<String>, ServiceError>;
}
