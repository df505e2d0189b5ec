// Last-navigation-wins under real async completion-order inversion: the
// fetch for a superseded query resolves late and must never reach the
// view state.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use copydesk::controller::ListController;
use copydesk::query::{self, ListQuery};
use copydesk::service::{Article, ArticlePage, ArticleService, ServiceError};
use copydesk::workflow::ArticleStatus;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

fn page_with(id: u64, total: u64) -> ArticlePage {
    ArticlePage {
        items: vec![Article {
            id,
            title: format!("article {id}"),
            author: "zhou".to_string(),
            status: ArticleStatus::Publish,
            tags: vec![],
            content: String::new(),
            created_at: Utc.with_ymd_and_hms(2017, 5, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2017, 5, 2, 0, 0, 0).unwrap(),
        }],
        total_count: total,
    }
}

/// Service whose list responses are gated: each fetch blocks until the
/// test releases it through the sender armed for that exact query.
struct GatedService {
    gates: Mutex<HashMap<String, oneshot::Receiver<Result<ArticlePage, ServiceError>>>>,
}

impl GatedService {
    fn new() -> (Arc<Self>, GateControl) {
        let service = Arc::new(Self {
            gates: Mutex::new(HashMap::new()),
        });
        (service.clone(), GateControl { service })
    }
}

struct GateControl {
    service: Arc<GatedService>,
}

impl GateControl {
    fn arm(&self, query: &ListQuery) -> oneshot::Sender<Result<ArticlePage, ServiceError>> {
        let (tx, rx) = oneshot::channel();
        self.service
            .gates
            .lock()
            .unwrap()
            .insert(query::encode(query), rx);
        tx
    }
}

#[async_trait]
impl ArticleService for GatedService {
    async fn list_articles(&self, query: &ListQuery) -> Result<ArticlePage, ServiceError> {
        let gate = self.gates.lock().unwrap().remove(&query::encode(query));
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ServiceError::Transport("gate dropped".into()))),
            None => Ok(ArticlePage::empty()),
        }
    }

    async fn set_status(&self, _id: u64, _target: ArticleStatus) -> Result<(), ServiceError> {
        Ok(())
    }

    async fn delete_article(&self, _id: u64) -> Result<(), ServiceError> {
        Ok(())
    }
}

#[tokio::test]
async fn late_result_for_superseded_query_is_discarded() {
    let query_a = ListQuery::default().with_search("query-a");
    let query_b = ListQuery::default().with_search("query-b");

    let (service, control) = GatedService::new();
    let gate_a = control.arm(&query_a);
    let gate_b = control.arm(&query_b);

    let mut controller = ListController::new(service);

    // Navigate to A, then immediately to B while A is still in flight.
    controller.open(&query_a);
    controller.open(&query_b);
    for _ in 0..2 {
        let event = controller.next_event().await.unwrap();
        controller.handle_event(event);
    }
    assert!(controller.state().loading);

    // B resolves first and lands.
    gate_b.send(Ok(page_with(2, 200))).unwrap();
    let event = controller.next_event().await.unwrap();
    controller.handle_event(event);
    assert_eq!(controller.state().total_count, 200);
    assert!(!controller.state().loading);

    // A limps in afterwards; its page must not replace B's.
    gate_a.send(Ok(page_with(1, 100))).unwrap();
    let event = tokio::time::timeout(Duration::from_secs(1), controller.next_event())
        .await
        .expect("stale completion should still be delivered")
        .unwrap();
    controller.handle_event(event);

    assert_eq!(controller.state().total_count, 200, "stale fetch applied");
    assert_eq!(controller.state().items[0].id, 2);
    assert_eq!(controller.query().search.as_deref(), Some("query-b"));
}

#[tokio::test]
async fn rapid_filter_changes_reflect_only_the_latest_query() {
    let unfiltered = ListQuery::default();
    let drafts_only = ListQuery::default().with_filters([ArticleStatus::Draft].into());

    let (service, control) = GatedService::new();
    let gate_first = control.arm(&unfiltered);
    let gate_second = control.arm(&drafts_only);

    let mut controller = ListController::new(service);
    controller.open(&unfiltered);
    let event = controller.next_event().await.unwrap();
    controller.handle_event(event);

    // Second navigation before the first fetch resolves.
    controller.set_filters([ArticleStatus::Draft].into(), None);
    let event = controller.next_event().await.unwrap();
    controller.handle_event(event);

    // Release both, superseded one first.
    gate_first.send(Ok(page_with(10, 10))).unwrap();
    gate_second.send(Ok(page_with(20, 20))).unwrap();
    controller.run_until_idle().await;
    // Drain any straggler events before asserting.
    while let Ok(Some(event)) =
        tokio::time::timeout(Duration::from_millis(50), controller.next_event()).await
    {
        controller.handle_event(event);
    }

    assert_eq!(controller.state().total_count, 20);
    assert_eq!(
        controller.query().status_filters,
        [ArticleStatus::Draft].into()
    );
}

#[tokio::test]
async fn loading_is_true_exactly_while_a_fetch_is_in_flight() {
    let slow_query = ListQuery::default().with_search("slow");

    let (service, control) = GatedService::new();
    let gate = control.arm(&slow_query);
    let mut controller = ListController::new(service);

    assert!(!controller.state().loading);
    controller.open(&slow_query);
    let event = controller.next_event().await.unwrap();
    controller.handle_event(event);
    assert!(controller.state().loading);

    gate.send(Ok(page_with(1, 1))).unwrap();
    let event = controller.next_event().await.unwrap();
    controller.handle_event(event);
    assert!(!controller.state().loading);
}
