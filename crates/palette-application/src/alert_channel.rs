//! Single-slot, auto-expiring notifications.

use palette_core::alert::{Alert, DEFAULT_ALERT_DURATION_MS};
use palette_core::ui::AlertSurface;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Default)]
struct AlertSlot {
    current: Option<Alert>,
    /// Bumped on every `show`; a hide timer only acts if its generation is still current.
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

/// The one notification surface every controller reports through.
///
/// `show` cancels the pending hide timer before scheduling a new one, so at most one
/// timer is ever alive and an alert is never hidden earlier than `duration` after the
/// latest `show`. Must be used from within a tokio runtime.
pub struct AlertChannel {
    surface: Arc<dyn AlertSurface>,
    duration: Duration,
    slot: Arc<Mutex<AlertSlot>>,
}

impl AlertChannel {
    pub fn new(surface: Arc<dyn AlertSurface>, duration: Duration) -> Self {
        Self {
            surface,
            duration,
            slot: Arc::new(Mutex::new(AlertSlot::default())),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Replaces the visible alert and restarts the hide timer.
    pub fn show(&self, message: impl Into<String>, is_success: bool) {
        let visible_for = chrono::Duration::from_std(self.duration).unwrap_or_else(|_| {
            chrono::Duration::milliseconds(DEFAULT_ALERT_DURATION_MS as i64)
        });
        let alert = Alert::new(message, is_success, visible_for);
        if is_success {
            tracing::debug!(message = %alert.message, "[Alert] success");
        } else {
            tracing::info!(message = %alert.message, "[Alert] error");
        }

        let mut slot = lock(&self.slot);

        // Cancel first, then schedule.
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.generation = slot.generation.wrapping_add(1);
        let generation = slot.generation;

        self.surface.display(&alert);
        slot.current = Some(alert);

        let shared = Arc::clone(&self.slot);
        let surface = Arc::clone(&self.surface);
        let duration = self.duration;
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut slot = lock(&shared);
            if slot.generation == generation {
                slot.current = None;
                slot.timer = None;
                surface.hide();
            }
        }));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, true);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, false);
    }

    /// The alert currently visible, if any.
    pub fn current(&self) -> Option<Alert> {
        lock(&self.slot).current.clone()
    }

    /// Whether a hide timer is scheduled and has not fired yet.
    pub fn has_pending_timer(&self) -> bool {
        lock(&self.slot)
            .timer
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }
}

impl Drop for AlertChannel {
    fn drop(&mut self) {
        if let Some(timer) = lock(&self.slot).timer.take() {
            timer.abort();
        }
    }
}

fn lock(slot: &Mutex<AlertSlot>) -> MutexGuard<'_, AlertSlot> {
    slot.lock().unwrap_or_else(|e| e.into_inner())
}
