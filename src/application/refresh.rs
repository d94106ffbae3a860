/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Single-flight coordination of token refreshes
//!
//! The first caller to hit an expired token becomes the leader and performs the
//! refresh. Everyone arriving while it is in flight is queued and receives the
//! leader's outcome, in arrival order, once it resolves.

use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tracing::debug;

/// Outcome shared with queued callers: the new access token or an error message
pub type RefreshOutcome = Result<String, String>;

#[derive(Debug, Default)]
enum QueueState {
    #[default]
    Idle,
    Refreshing(Vec<oneshot::Sender<RefreshOutcome>>),
}

/// Queue of callers waiting on a single in-flight refresh
#[derive(Debug, Default, Clone)]
pub struct RefreshQueue {
    state: Arc<Mutex<QueueState>>,
}

/// Role assigned by [`RefreshQueue::enter`]
#[derive(Debug)]
pub enum Ticket {
    /// Perform the refresh and resolve the guard
    Leader(RefreshGuard),
    /// Await the leader's outcome
    Follower(oneshot::Receiver<RefreshOutcome>),
}

/// Held by the leader while it refreshes
///
/// Dropping it without calling [`RefreshGuard::resolve`] rejects the queue.
#[derive(Debug)]
pub struct RefreshGuard {
    queue: RefreshQueue,
    resolved: bool,
}

impl RefreshQueue {
    /// Creates an idle queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Joins the current refresh, or starts one if none is running
    pub fn enter(&self) -> Ticket {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match &mut *state {
            QueueState::Idle => {
                *state = QueueState::Refreshing(Vec::new());
                debug!("Token refresh started");
                Ticket::Leader(RefreshGuard {
                    queue: self.clone(),
                    resolved: false,
                })
            }
            QueueState::Refreshing(waiters) => {
                let (tx, rx) = oneshot::channel();
                waiters.push(tx);
                debug!("Token refresh in flight, queued ({} waiting)", waiters.len());
                Ticket::Follower(rx)
            }
        }
    }

    /// Whether a refresh is in flight
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        matches!(
            *self.state.lock().unwrap_or_else(|e| e.into_inner()),
            QueueState::Refreshing(_)
        )
    }

    /// Number of queued callers
    #[must_use]
    pub fn waiting(&self) -> usize {
        match &*self.state.lock().unwrap_or_else(|e| e.into_inner()) {
            QueueState::Idle => 0,
            QueueState::Refreshing(waiters) => waiters.len(),
        }
    }

    fn drain(&self, outcome: &RefreshOutcome) {
        let waiters = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            match std::mem::take(&mut *state) {
                QueueState::Idle => Vec::new(),
                QueueState::Refreshing(waiters) => waiters,
            }
        };
        debug!("Token refresh settled, releasing {} waiters", waiters.len());
        for waiter in waiters {
            // receiver gone means the caller was cancelled
            let _ = waiter.send(outcome.clone());
        }
    }
}

impl RefreshGuard {
    /// Publishes the outcome to every queued caller and returns the queue to idle
    pub fn resolve(mut self, outcome: RefreshOutcome) {
        self.resolved = true;
        self.queue.drain(&outcome);
    }
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        if !self.resolved {
            self.queue
                .drain(&Err("token refresh was abandoned".to_string()));
        }
    }
}
