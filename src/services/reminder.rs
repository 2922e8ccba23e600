//! Daily reminder scheduling
//!
//! A background loop wakes on a fixed tick and runs one reminder check
//! against the wall clock. The check itself takes the clock value as an
//! argument, so tests drive it with fixed timestamps and never sleep.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use log::{info, warn};

use crate::error::ZenithResult;
use crate::notify::Notifier;
use crate::services::notification;
use crate::storage::Store;

/// Runs one reminder check against the clock value in `now`.
///
/// Returns whether a reminder was delivered. Delivering marks today as
/// sent, so later ticks inside the same minute stay quiet; the mark is
/// persisted best-effort.
pub fn run_daily_reminder_check(
    store: &Store,
    notifier: &dyn Notifier,
    now: NaiveDateTime,
) -> ZenithResult<bool> {
    let settings = store.settings.get()?;
    let today = now.date();
    let now_hhmm = now.format("%H:%M").to_string();
    let has_transaction_today = store.transactions.any_on(today)?;
    let already_sent_today = store.reminders.was_sent(today)?;

    let Some(reminder) = notification::daily_reminder(
        &settings,
        &now_hhmm,
        has_transaction_today,
        already_sent_today,
    ) else {
        return Ok(false);
    };

    notifier.notify(&reminder);
    store.reminders.mark_sent(today)?;
    if let Err(e) = store.reminders.save() {
        warn!("could not persist reminder log: {}", e);
    }
    info!("daily reminder delivered for {}", today);
    Ok(true)
}

/// Background loop that re-checks the reminder on a fixed tick.
///
/// Checks run one at a time on a single thread. The tick must stay under
/// one minute so the configured HH:MM is never skipped.
pub struct ReminderScheduler {
    stop_tx: mpsc::Sender<()>,
    handle: Option<thread::JoinHandle<()>>,
}

impl ReminderScheduler {
    /// Spawns the scheduler thread
    pub fn start(
        store: Arc<Store>,
        notifier: Arc<dyn Notifier + Send + Sync>,
        tick: Duration,
    ) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel();
        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(tick) {
                Ok(()) | Err(mpsc::RecvTimeoutError::Disconnected) => return,
                Err(mpsc::RecvTimeoutError::Timeout) => {}
            }
            let now = Local::now().naive_local();
            if let Err(e) = run_daily_reminder_check(&store, notifier.as_ref(), now) {
                warn!("reminder check failed: {}", e);
            }
        });
        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Signals the loop to stop and waits for it to finish
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
