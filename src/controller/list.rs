//! The query-synchronized list controller.
//!
//! All mutation methods (`set_filters`, `set_page`, `set_search`) build a
//! new [`ListQuery`], encode it, and request navigation; none of them
//! fetch. The fetch starts exclusively in [`ListController::on_navigate`],
//! the single point where query changes are observed, which is what makes
//! browser back/forward behave identically to UI-driven navigation.
//!
//! Fetches are tagged with a monotonically increasing epoch. A completion
//! whose epoch is not the current one belongs to a superseded navigation
//! and is discarded, never queued or merged (last-navigation-wins).

use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use super::navigation::LocationBus;
use crate::query::{self, ListQuery, Sort};
use crate::service::{Article, ArticlePage, ArticleService, ServiceError};
use crate::workflow::ArticleStatus;

/// View state published to the presentation layer.
///
/// Owned exclusively by the controller; the presentation layer reads a
/// reference and never mutates it.
#[derive(Debug, Default)]
pub struct ListViewState {
    pub items: Vec<Article>,
    pub loading: bool,
    pub total_count: u64,
}

/// Events processed by the controller, strictly in arrival order.
#[derive(Debug)]
pub enum ListEvent {
    /// The location changed (UI navigation, reload, or history traversal).
    Navigated(String),
    /// A fetch issued under `epoch` finished.
    FetchResolved {
        epoch: u64,
        result: Result<ArticlePage, ServiceError>,
    },
}

pub struct ListController {
    service: Arc<dyn ArticleService>,
    locations: LocationBus,
    state: ListViewState,
    /// Mirror of the query decoded from the last navigation event.
    query: ListQuery,
    /// Bumped on every navigation; stale fetch completions carry an older
    /// value and are dropped.
    epoch: u64,
    last_error: Option<ServiceError>,
    events_tx: UnboundedSender<ListEvent>,
    events_rx: UnboundedReceiver<ListEvent>,
}

impl ListController {
    pub fn new(service: Arc<dyn ArticleService>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let locations = LocationBus::new(events_tx.clone());
        Self {
            service,
            locations,
            state: ListViewState::default(),
            query: ListQuery::default(),
            epoch: 0,
            last_error: None,
            events_tx,
            events_rx,
        }
    }

    /// Handle to the navigation history (for back/forward and mounting).
    pub fn locations(&self) -> LocationBus {
        self.locations.clone()
    }

    pub fn state(&self) -> &ListViewState {
        &self.state
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Error from the most recent failed fetch, cleared by the next
    /// successful one.
    pub fn last_error(&self) -> Option<&ServiceError> {
        self.last_error.as_ref()
    }

    /// Mount the list view on `query`.
    pub fn open(&self, query: &ListQuery) {
        self.locations.push(&query::encode(query));
    }

    /// Replace status filters and sort; always resets to page 1.
    pub fn set_filters(&self, filters: BTreeSet<ArticleStatus>, sort: Option<Sort>) {
        let next = self
            .query
            .clone()
            .with_filters(filters)
            .with_sort(sort)
            .first_page();
        self.locations.push(&query::encode(&next));
    }

    /// Move to `page`, optionally changing sort; everything else kept.
    pub fn set_page(&self, page: u32, sort: Option<Sort>) {
        let mut next = self.query.clone().with_page(page);
        if sort.is_some() {
            next = next.with_sort(sort);
        }
        self.locations.push(&query::encode(&next));
    }

    /// Replace the free-text search; filters and sort untouched, page
    /// reset to 1.
    pub fn set_search(&self, text: &str) {
        let next = self.query.clone().with_search(text).first_page();
        self.locations.push(&query::encode(&next));
    }

    /// Invoke a workflow transition on one article. On success the
    /// affected row is patched optimistically; on failure the displayed
    /// status is left unchanged and the error is returned to the caller.
    pub async fn change_status(
        &mut self,
        id: u64,
        target: ArticleStatus,
    ) -> Result<(), ServiceError> {
        match self.service.set_status(id, target).await {
            Ok(()) => {
                if let Some(item) = self.state.items.iter_mut().find(|a| a.id == id) {
                    item.status = target;
                }
                info!(article_id = id, target = %target, "status transition applied");
                Ok(())
            }
            Err(error) => {
                warn!(article_id = id, target = %target, %error, "status transition failed");
                Err(error)
            }
        }
    }

    /// Destructively remove an article, then reload the current view so
    /// the row disappears and the total count is re-reported.
    pub async fn delete(&mut self, id: u64) -> Result<(), ServiceError> {
        self.service.delete_article(id).await?;
        info!(article_id = id, "article deleted, reloading view");
        self.locations.push(&query::encode(&self.query));
        Ok(())
    }

    /// Await the next controller event. Returns None when every sender is
    /// gone, which cannot happen while the controller itself is alive.
    pub async fn next_event(&mut self) -> Option<ListEvent> {
        self.events_rx.recv().await
    }

    /// Process one event.
    pub fn handle_event(&mut self, event: ListEvent) {
        match event {
            ListEvent::Navigated(descriptor) => self.on_navigate(&descriptor),
            ListEvent::FetchResolved { epoch, result } => self.on_fetch_resolved(epoch, result),
        }
    }

    /// Drain queued events, then keep processing until no fetch is in
    /// flight. The driver calls this after any mutation or history step.
    pub async fn run_until_idle(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
        while self.state.loading {
            match self.events_rx.recv().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }
    }

    /// The single fetch trigger. Decodes the descriptor (malformed input
    /// degrades to defaults rather than failing navigation), bumps the
    /// epoch, and spawns the service call; its completion re-enters the
    /// event queue tagged with the epoch it was issued under.
    fn on_navigate(&mut self, descriptor: &str) {
        self.query = query::decode(descriptor);
        self.epoch += 1;
        self.state.loading = true;

        debug!(descriptor, epoch = self.epoch, "navigation observed, issuing fetch");

        let service = Arc::clone(&self.service);
        let events = self.events_tx.clone();
        let epoch = self.epoch;
        let fetch_query = self.query.clone();
        tokio::spawn(async move {
            let result = service.list_articles(&fetch_query).await;
            let _ = events.send(ListEvent::FetchResolved { epoch, result });
        });
    }

    fn on_fetch_resolved(&mut self, epoch: u64, result: Result<ArticlePage, ServiceError>) {
        if epoch != self.epoch {
            debug!(
                stale_epoch = epoch,
                current_epoch = self.epoch,
                "discarding superseded fetch result"
            );
            return;
        }

        match result {
            Ok(page) => {
                self.state.items = page.items;
                self.state.total_count = page.total_count;
                self.state.loading = false;
                self.last_error = None;
                debug!(
                    items = self.state.items.len(),
                    total = self.state.total_count,
                    "list view updated"
                );
            }
            Err(error) => {
                // Prior items and total stay on screen; the operator can
                // retry with any navigation action.
                self.state.loading = false;
                warn!(%error, "list fetch failed, keeping previous view");
                self.last_error = Some(error);
            }
        }
    }
}
