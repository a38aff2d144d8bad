//! Delay schedule: exponential growth between attempts, clamped at the
//! configured ceiling, with no delay after the final attempt.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use syncguard::{RetryExecutor, RetryPolicy};

/// Runs an always-failing operation and returns the waits observed between
/// consecutive invocations.
async fn observed_delays(policy: RetryPolicy) -> Vec<u64> {
    let times: Arc<Mutex<Vec<Duration>>> = Arc::new(Mutex::new(Vec::new()));
    let started = tokio::time::Instant::now();

    let result: Result<(), String> = RetryExecutor::new(policy)
        .execute(|attempt| {
            let times = Arc::clone(&times);
            async move {
                times.lock().unwrap().push(started.elapsed());
                Err(format!("fail {attempt}"))
            }
        })
        .await;
    assert!(result.is_err());

    let times = times.lock().unwrap();
    times
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).as_millis() as u64)
        .collect()
}

#[tokio::test(start_paused = true)]
async fn five_attempts_wait_four_growing_delays() {
    let delays = observed_delays(RetryPolicy {
        max_attempts: 5,
        ..RetryPolicy::default()
    })
    .await;
    assert_eq!(delays, vec![1000, 2000, 4000, 8000]);
}

#[tokio::test(start_paused = true)]
async fn sixth_attempt_delay_is_clamped_at_the_ceiling() {
    let delays = observed_delays(RetryPolicy {
        max_attempts: 6,
        ..RetryPolicy::default()
    })
    .await;
    assert_eq!(delays, vec![1000, 2000, 4000, 8000, 10000]);
}

#[tokio::test(start_paused = true)]
async fn extreme_factor_saturates_at_the_ceiling_mid_retry() {
    let policy = RetryPolicy {
        max_attempts: 3,
        backoff_factor: 1e306,
        ..RetryPolicy::default()
    };
    assert!(policy.validate().is_ok());

    // The second wait jumps straight to the ceiling; the growth step must
    // clamp there rather than overflow.
    let delays = observed_delays(policy).await;
    assert_eq!(delays, vec![1000, 10000]);
}

#[tokio::test(start_paused = true)]
async fn no_delay_follows_the_final_attempt() {
    let started = tokio::time::Instant::now();
    let result: Result<(), String> = RetryExecutor::new(RetryPolicy {
        max_attempts: 2,
        ..RetryPolicy::default()
    })
    .execute(|attempt| async move { Err(format!("fail {attempt}")) })
    .await;

    assert!(result.is_err());
    // One inter-attempt wait only; the call returns as soon as the second
    // attempt fails.
    assert_eq!(started.elapsed().as_millis(), 1000);
}
