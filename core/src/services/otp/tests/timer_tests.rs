//! Unit tests for the countdown timer, driven by paused tokio time

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::entities::otp_session::{OtpSession, OtpStatus};
use crate::services::otp::CountdownTimer;

fn shared_session(max_attempts: u32, initial_seconds: u32) -> Arc<Mutex<OtpSession>> {
    Arc::new(Mutex::new(OtpSession::with_budgets(
        max_attempts,
        initial_seconds,
    )))
}

/// Advance paused time one second at a time so each interval tick is
/// processed before the next
async fn advance_seconds(seconds: u32) {
    for _ in 0..seconds {
        tokio::time::advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
    }
}

async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_timer_decrements_once_per_second() {
    let session = shared_session(3, 120);
    let _timer = CountdownTimer::start(Arc::clone(&session));
    settle().await;

    advance_seconds(5).await;

    let session = session.lock().unwrap();
    assert_eq!(session.seconds_remaining, 115);
    assert_eq!(session.status, OtpStatus::Active);
}

#[tokio::test(start_paused = true)]
async fn test_timer_expires_session_and_stops() {
    let session = shared_session(3, 2);
    let timer = CountdownTimer::start(Arc::clone(&session));
    settle().await;

    advance_seconds(5).await;
    settle().await;

    {
        let session = session.lock().unwrap();
        assert_eq!(session.seconds_remaining, 0);
        assert_eq!(session.status, OtpStatus::Expired);
    }
    assert!(timer.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_timer_stops_after_verification() {
    let session = shared_session(3, 120);
    let timer = CountdownTimer::start(Arc::clone(&session));
    settle().await;

    advance_seconds(2).await;
    session.lock().unwrap().mark_verified();
    advance_seconds(3).await;
    settle().await;

    // No further decrement after the session left the active state
    assert_eq!(session.lock().unwrap().seconds_remaining, 118);
    assert!(timer.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_ticking() {
    let session = shared_session(3, 120);
    let timer = CountdownTimer::start(Arc::clone(&session));
    settle().await;

    advance_seconds(2).await;
    timer.cancel();
    settle().await;
    advance_seconds(3).await;

    assert_eq!(session.lock().unwrap().seconds_remaining, 118);
}

#[tokio::test(start_paused = true)]
async fn test_drop_aborts_the_task() {
    let session = shared_session(3, 120);
    let timer = CountdownTimer::start(Arc::clone(&session));
    settle().await;

    advance_seconds(1).await;
    drop(timer);
    settle().await;
    advance_seconds(3).await;

    // A dropped screen is never ticked again
    assert_eq!(session.lock().unwrap().seconds_remaining, 119);
}
