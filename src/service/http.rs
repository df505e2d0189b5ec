//! HTTP implementation of the remote data service traits.
//!
//! Wraps reqwest with service-side politeness: a governor rate limiter in
//! front of every request, a short-TTL moka cache for GET responses that
//! is invalidated by any write, and bounded retry for transient failures.

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Jitter, Quota, RateLimiter};
use moka::future::Cache;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use super::errors::ServiceError;
use super::retry::RetryHandler;
use super::types::ArticlePage;
use super::{ArticleService, WorkerService};
use crate::config::ServiceConfig;
use crate::query::{self, ListQuery};
use crate::workflow::ArticleStatus;

const ARTICLES_PATH: &str = "api/articles";
const WORKERS_PATH: &str = "api/workers";

/// Rate-limited, caching client for the editorial data service.
pub struct HttpArticleService {
    client: reqwest::Client,
    base_url: Url,
    rate_limiter: Arc<DefaultDirectRateLimiter>,
    cache: Cache<String, serde_json::Value>,
    retry: RetryHandler,
}

impl HttpArticleService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ServiceError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        let per_second =
            NonZeroU32::new(config.rate_limit.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(config.rate_limit.burst_capacity).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_second(per_second).allow_burst(burst);
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(config.cache_ttl_seconds))
            .build();

        Ok(Self {
            client,
            base_url,
            rate_limiter,
            cache,
            retry: RetryHandler::default(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        self.base_url
            .join(path)
            .map_err(|e| ServiceError::InvalidBaseUrl(e.to_string()))
    }

    /// GET with rate limiting, caching, and retry.
    async fn get_json<T>(&self, url: Url, cache_key: String) -> Result<T, ServiceError>
    where
        T: DeserializeOwned,
    {
        if let Some(cached) = self.cache.get(&cache_key).await {
            if let Ok(value) = serde_json::from_value(cached) {
                debug!(key = %cache_key, "service cache hit");
                return Ok(value);
            }
        }

        self.rate_limiter
            .until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100)))
            .await;

        let request_id = Uuid::new_v4();
        debug!(%request_id, %url, "GET request to data service");

        let raw = self
            .retry
            .execute(|| async {
                let response = self
                    .client
                    .get(url.clone())
                    .header("x-request-id", request_id.to_string())
                    .send()
                    .await?;
                Self::check_status(response).await?.json::<serde_json::Value>().await.map_err(ServiceError::from)
            })
            .await?;

        let value: T =
            serde_json::from_value(raw.clone()).map_err(|e| ServiceError::Decode(e.to_string()))?;
        self.cache.insert(cache_key, raw).await;
        Ok(value)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(ServiceError::Http {
            status: status.as_u16(),
            message: message.chars().take(200).collect(),
        })
    }

    /// Drop cached responses whose key contains `pattern`. Called after
    /// every write so the next list fetch observes the mutation.
    async fn invalidate_cache_pattern(&self, pattern: &str) {
        let stale: Vec<String> = self
            .cache
            .iter()
            .filter(|(key, _)| key.contains(pattern))
            .map(|(key, _)| key.as_ref().clone())
            .collect();

        for key in stale {
            self.cache.invalidate(&key).await;
        }
        debug!(pattern, "invalidated cached service responses");
    }
}

#[async_trait]
impl ArticleService for HttpArticleService {
    async fn list_articles(&self, query: &ListQuery) -> Result<ArticlePage, ServiceError> {
        let descriptor = query::encode(query);
        let mut url = self.endpoint(ARTICLES_PATH)?;
        url.set_query(Some(&descriptor));

        let cache_key = format!("{ARTICLES_PATH}?{descriptor}");
        self.get_json(url, cache_key).await
    }

    async fn set_status(&self, id: u64, target: ArticleStatus) -> Result<(), ServiceError> {
        let url = self.endpoint(&format!("{ARTICLES_PATH}/{id}/status"))?;

        self.rate_limiter
            .until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100)))
            .await;

        debug!(article_id = id, target = %target, "status change request");
        self.retry
            .execute(|| async {
                let response = self
                    .client
                    .put(url.clone())
                    .json(&serde_json::json!({ "status": target }))
                    .send()
                    .await?;
                Self::check_status(response).await.map(|_| ())
            })
            .await?;

        self.invalidate_cache_pattern(ARTICLES_PATH).await;
        Ok(())
    }

    async fn delete_article(&self, id: u64) -> Result<(), ServiceError> {
        let url = self.endpoint(&format!("{ARTICLES_PATH}/{id}"))?;

        self.rate_limiter
            .until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100)))
            .await;

        debug!(article_id = id, "delete request");
        self.retry
            .execute(|| async {
                let response = self.client.delete(url.clone()).send().await?;
                Self::check_status(response).await.map(|_| ())
            })
            .await?;

        self.invalidate_cache_pattern(ARTICLES_PATH).await;
        Ok(())
    }
}

#[async_trait]
impl WorkerService for HttpArticleService {
    async fn running_workers(&self) -> Result<Vec<String>, ServiceError> {
        let url = self.endpoint(WORKERS_PATH)?;
        self.get_json(url, WORKERS_PATH.to_string()).await
    }
}
