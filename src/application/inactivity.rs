/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! Logs an idle session out
//!
//! The monitor runs a background task that sleeps until the activity
//! deadline. Every [`InactivityMonitor::touch`] pushes the deadline back.
//! When the deadline passes the store is logged out and the task ends.

use crate::application::store::AppStore;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, warn};

/// Background idle-logout watchdog
///
/// Dropping the monitor stops it.
#[derive(Debug)]
pub struct InactivityMonitor {
    deadline: Arc<Mutex<Instant>>,
    timeout: Duration,
    handle: JoinHandle<()>,
}

impl InactivityMonitor {
    /// Starts watching `store`; must be called inside a tokio runtime
    pub fn start(store: Arc<AppStore>, timeout: Duration) -> Self {
        let deadline = Arc::new(Mutex::new(Instant::now() + timeout));
        let watched = deadline.clone();

        let handle = tokio::spawn(async move {
            loop {
                let due = *watched.lock().unwrap_or_else(|e| e.into_inner());
                if Instant::now() >= due {
                    break;
                }
                sleep_until(due).await;
            }

            info!("No activity for {:?}, logging out", timeout);
            if let Err(e) = store.logout().await {
                warn!("Logout after inactivity failed: {}", e);
            }
        });

        debug!("Inactivity monitor started ({:?})", timeout);
        Self {
            deadline,
            timeout,
            handle,
        }
    }

    /// Records user activity, postponing the logout
    pub fn touch(&self) {
        *self.deadline.lock().unwrap_or_else(|e| e.into_inner()) = Instant::now() + self.timeout;
    }

    /// Time left before the logout
    #[must_use]
    pub fn remaining(&self) -> Duration {
        let due = *self.deadline.lock().unwrap_or_else(|e| e.into_inner());
        due.saturating_duration_since(Instant::now())
    }

    /// Whether the watchdog has ended, by firing or by being stopped
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Stops watching without logging out
    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for InactivityMonitor {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
