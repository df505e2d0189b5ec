// Copydesk Library - Editorial Console Core
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod controller;
pub mod query;
pub mod service;
pub mod telemetry;
pub mod workers;
pub mod workflow;

// Re-export key types for easy access
pub use config::CopydeskConfig;
pub use controller::{ListController, ListEvent, ListViewState, LocationBus};
pub use query::{ListQuery, Sort, SortField, SortOrder};
pub use service::{
    Article, ArticlePage, ArticleService, HttpArticleService, ServiceError, WorkerService,
};
pub use telemetry::init_telemetry;
pub use workers::{fetch_board, project_roster, WorkerCard, WorkerStatus};
pub use workflow::{legal_transitions, ArticleStatus, Transition, TransitionAction};
