//! Countdown timer with lifecycle-bound cancellation

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::domain::entities::otp_session::OtpSession;

/// Owned handle for the per-session countdown task
///
/// The task ticks the shared session once per second and exits on its
/// own once the session reports it is no longer ticking. Dropping the
/// handle aborts the task, so a torn-down screen can never be ticked.
pub struct CountdownTimer {
    handle: JoinHandle<()>,
}

impl CountdownTimer {
    /// Spawn the countdown task for a session
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(session: Arc<Mutex<OtpSession>>) -> Self {
        let session_id = session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .id;

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; skip it so the
            // session only loses a second per elapsed second.
            interval.tick().await;

            loop {
                interval.tick().await;

                let keep_ticking = {
                    let mut session = session
                        .lock()
                        .unwrap_or_else(|poisoned| poisoned.into_inner());
                    session.tick()
                };

                if !keep_ticking {
                    tracing::debug!(
                        session_id = %session_id,
                        event = "otp_timer_stopped",
                        "Countdown finished or session left the active state"
                    );
                    break;
                }
            }
        });

        Self { handle }
    }

    /// Stop the countdown immediately
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the countdown task has exited
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
