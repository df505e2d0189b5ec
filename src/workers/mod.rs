//! Crawler worker roster projection.
//!
//! The roster is fixed by configuration; the service reports which worker
//! names are currently running. Projection is pure set membership, there
//! are no transition rules here.

use crate::config::WorkerRosterConfig;
use crate::service::{ServiceError, WorkerService};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerStatus {
    Running,
    Stopped,
}

impl WorkerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerStatus::Running => "running",
            WorkerStatus::Stopped => "stopped",
        }
    }
}

/// One roster entry with its observed run state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerCard {
    pub key: String,
    pub label: String,
    pub status: WorkerStatus,
}

/// Project the configured roster against the service's running set.
/// Roster order is preserved; running names outside the roster are
/// ignored (the roster is the source of what the console shows).
pub fn project_roster(roster: &WorkerRosterConfig, running: &[String]) -> Vec<WorkerCard> {
    roster
        .roster
        .iter()
        .map(|entry| WorkerCard {
            key: entry.key.clone(),
            label: entry.label.clone(),
            status: if running.iter().any(|name| name == &entry.key) {
                WorkerStatus::Running
            } else {
                WorkerStatus::Stopped
            },
        })
        .collect()
}

/// Fetch the running set and project the board in one step.
pub async fn fetch_board(
    service: &dyn WorkerService,
    roster: &WorkerRosterConfig,
) -> Result<Vec<WorkerCard>, ServiceError> {
    let running = service.running_workers().await?;
    debug!(running = running.len(), roster = roster.roster.len(), "projecting worker board");
    Ok(project_roster(roster, &running))
}
