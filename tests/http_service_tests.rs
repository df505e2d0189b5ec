// HTTP client behavior against a stub service: descriptor encoding on the
// wire, response decoding, write-through cache invalidation, and retry.

use copydesk::config::{RateLimitConfig, ServiceConfig};
use copydesk::query::{ListQuery, Sort, SortField, SortOrder};
use copydesk::service::{ArticleService, HttpArticleService, ServiceError, WorkerService};
use copydesk::workflow::ArticleStatus;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate, Respond};

fn service_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst_capacity: 1000,
        },
        cache_ttl_seconds: 60,
    }
}

fn article_json(id: u64, status: i64) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("article {id}"),
        "user": { "name": "wang" },
        "status": status,
        "tags": ["news"],
        "content": "body",
        "created_at": "2017-03-01T08:00:00Z",
        "updated_at": "2017-03-02T09:30:00Z"
    })
}

#[tokio::test]
async fn list_sends_the_encoded_descriptor_and_decodes_the_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("page", "2"))
        .and(query_param("status", "draft,publish"))
        .and(query_param("sort_field", "updated_at"))
        .and(query_param("sort_order", "descend"))
        .and(query_param("search", "graph theory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [article_json(1, 1), article_json(2, 2)],
            "total_count": 42
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpArticleService::new(&service_config(&server.uri())).unwrap();
    let query = ListQuery::default()
        .with_page(2)
        .with_filters([ArticleStatus::Draft, ArticleStatus::Publish].into())
        .with_sort(Some(Sort::new(SortField::UpdatedAt, SortOrder::Descend)))
        .with_search("graph theory");

    let page = client.list_articles(&query).await.unwrap();
    assert_eq!(page.total_count, 42);
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].author, "wang");
    assert_eq!(page.items[1].status, ArticleStatus::Publish);
}

#[tokio::test]
async fn identical_queries_are_served_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            "total_count": 0
        })))
        .expect(1) // second call must not reach the wire
        .mount(&server)
        .await;

    let client = HttpArticleService::new(&service_config(&server.uri())).unwrap();
    let query = ListQuery::default();
    client.list_articles(&query).await.unwrap();
    client.list_articles(&query).await.unwrap();
}

#[tokio::test]
async fn a_status_write_invalidates_the_list_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            "total_count": 0
        })))
        .expect(2) // refetched after the write
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/articles/7/status"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpArticleService::new(&service_config(&server.uri())).unwrap();
    let query = ListQuery::default();
    client.list_articles(&query).await.unwrap();
    client.set_status(7, ArticleStatus::Publish).await.unwrap();
    client.list_articles(&query).await.unwrap();
}

#[tokio::test]
async fn set_status_puts_the_wire_integer() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/articles/9/status"))
        .and(wiremock::matchers::body_json(json!({ "status": 3 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpArticleService::new(&service_config(&server.uri())).unwrap();
    client.set_status(9, ArticleStatus::Pinned).await.unwrap();
}

#[tokio::test]
async fn delete_hits_the_article_resource() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/articles/11"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpArticleService::new(&service_config(&server.uri())).unwrap();
    client.delete_article(11).await.unwrap();
}

struct FlakyOnce {
    hits: std::sync::atomic::AtomicU32,
}

impl Respond for FlakyOnce {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        if self.hits.fetch_add(1, std::sync::atomic::Ordering::SeqCst) == 0 {
            ResponseTemplate::new(503)
        } else {
            ResponseTemplate::new(200).set_body_json(json!({
                "items": [],
                "total_count": 5
            }))
        }
    }
}

#[tokio::test]
async fn server_errors_are_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(FlakyOnce {
            hits: std::sync::atomic::AtomicU32::new(0),
        })
        .expect(2)
        .mount(&server)
        .await;

    let client = HttpArticleService::new(&service_config(&server.uri())).unwrap();
    let page = client.list_articles(&ListQuery::default()).await.unwrap();
    assert_eq!(page.total_count, 5);
}

#[tokio::test]
async fn client_errors_surface_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such list"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpArticleService::new(&service_config(&server.uri())).unwrap();
    let error = client.list_articles(&ListQuery::default()).await.unwrap_err();
    match error {
        ServiceError::Http { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("no such list"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_status_on_the_wire_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [article_json(1, 9)],
            "total_count": 1
        })))
        .mount(&server)
        .await;

    let client = HttpArticleService::new(&service_config(&server.uri())).unwrap();
    let error = client.list_articles(&ListQuery::default()).await.unwrap_err();
    assert!(matches!(error, ServiceError::Decode(_)), "got {error:?}");
}

#[tokio::test]
async fn workers_endpoint_returns_the_running_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/workers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["poj", "hdu"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpArticleService::new(&service_config(&server.uri())).unwrap();
    let running = client.running_workers().await.unwrap();
    assert_eq!(running, vec!["poj".to_string(), "hdu".to_string()]);
}
