//! In-memory navigation subsystem.
//!
//! Keeps the ordered history of location descriptors with a cursor, the
//! way a browser does: pushing truncates everything ahead of the cursor,
//! back/forward move the cursor and re-deliver the descriptor at the new
//! position. Every delivery goes through the same channel the controller
//! consumes, so history traversal and UI-driven navigation are literally
//! the same code path.

use super::list::ListEvent;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

#[derive(Debug)]
struct Inner {
    entries: Vec<String>,
    cursor: Option<usize>,
}

/// Cloneable handle to the navigation history.
#[derive(Debug, Clone)]
pub struct LocationBus {
    inner: Arc<Mutex<Inner>>,
    events: UnboundedSender<ListEvent>,
}

impl LocationBus {
    pub fn new(events: UnboundedSender<ListEvent>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: Vec::new(),
                cursor: None,
            })),
            events,
        }
    }

    /// Navigate to `descriptor`. Re-pushing the current descriptor is a
    /// reload: the event is re-delivered but history does not grow.
    pub fn push(&self, descriptor: &str) {
        let mut inner = self.inner.lock().expect("location history poisoned");
        let is_reload = inner
            .cursor
            .map(|c| inner.entries[c] == descriptor)
            .unwrap_or(false);

        if !is_reload {
            if let Some(cursor) = inner.cursor {
                inner.entries.truncate(cursor + 1);
            }
            inner.entries.push(descriptor.to_string());
            inner.cursor = Some(inner.entries.len() - 1);
        }

        debug!(descriptor, reload = is_reload, "location push");
        let _ = self.events.send(ListEvent::Navigated(descriptor.to_string()));
    }

    /// Step back in history. Returns false at the oldest entry.
    pub fn back(&self) -> bool {
        let mut inner = self.inner.lock().expect("location history poisoned");
        match inner.cursor {
            Some(cursor) if cursor > 0 => {
                inner.cursor = Some(cursor - 1);
                let descriptor = inner.entries[cursor - 1].clone();
                drop(inner);
                debug!(descriptor = %descriptor, "location back");
                let _ = self.events.send(ListEvent::Navigated(descriptor));
                true
            }
            _ => false,
        }
    }

    /// Step forward in history. Returns false at the newest entry.
    pub fn forward(&self) -> bool {
        let mut inner = self.inner.lock().expect("location history poisoned");
        match inner.cursor {
            Some(cursor) if cursor + 1 < inner.entries.len() => {
                inner.cursor = Some(cursor + 1);
                let descriptor = inner.entries[cursor + 1].clone();
                drop(inner);
                debug!(descriptor = %descriptor, "location forward");
                let _ = self.events.send(ListEvent::Navigated(descriptor));
                true
            }
            _ => false,
        }
    }

    /// Descriptor at the cursor, if any navigation has happened.
    pub fn current(&self) -> Option<String> {
        let inner = self.inner.lock().expect("location history poisoned");
        inner.cursor.map(|c| inner.entries[c].clone())
    }

    /// Number of entries currently in history.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("location history poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
