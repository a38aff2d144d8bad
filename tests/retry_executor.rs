//! Retry executor behavior: attempt accounting, outcome propagation, and the
//! boundary cases around the final attempt.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use syncguard::retry::{execute_with_default_retry, execute_without_retry};
use syncguard::{RetryExecutor, RetryPolicy};

#[tokio::test(start_paused = true)]
async fn always_failing_operation_runs_exactly_max_attempts_times() {
    let calls = Arc::new(AtomicU32::new(0));
    let executor = RetryExecutor::new(RetryPolicy::default());

    let result: Result<(), String> = executor
        .execute(|attempt| {
            let calls = Arc::clone(&calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(format!("boom {attempt}"))
            }
        })
        .await;

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    // The propagated failure is the one produced by the final invocation
    assert_eq!(result.unwrap_err(), "boom 2");
}

#[tokio::test(start_paused = true)]
async fn returns_first_success_without_further_attempts() {
    let calls = Arc::new(AtomicU32::new(0));
    let executor = RetryExecutor::new(RetryPolicy {
        max_attempts: 5,
        ..RetryPolicy::default()
    });

    let result: Result<&str, String> = executor
        .execute(|attempt| {
            let calls = Arc::clone(&calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                if attempt < 2 {
                    Err(format!("transient {attempt}"))
                } else {
                    Ok("ok")
                }
            }
        })
        .await;

    assert_eq!(result.unwrap(), "ok");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn single_attempt_policy_never_delays() {
    let calls = Arc::new(AtomicU32::new(0));
    let executor = RetryExecutor::new(RetryPolicy::no_retry());
    let started = tokio::time::Instant::now();

    let result: Result<(), String> = executor
        .execute(|_attempt| {
            let calls = Arc::clone(&calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err("permanent".to_string())
            }
        })
        .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(started.elapsed(), std::time::Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn zero_attempt_policy_behaves_as_a_single_attempt() {
    let calls = Arc::new(AtomicU32::new(0));
    let invalid = RetryPolicy {
        max_attempts: 0,
        ..RetryPolicy::default()
    };
    assert!(invalid.validate().is_err());
    let started = tokio::time::Instant::now();

    let result: Result<(), String> = RetryExecutor::new(invalid)
        .execute(|_attempt| {
            let calls = Arc::clone(&calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err("boom".to_string())
            }
        })
        .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(started.elapsed(), std::time::Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn end_to_end_two_failures_then_success() {
    let calls = Arc::new(AtomicU32::new(0));
    let times = Arc::new(std::sync::Mutex::new(Vec::new()));
    let executor = RetryExecutor::new(RetryPolicy::default().with_label("journal.save"));
    let started = tokio::time::Instant::now();

    let result: Result<&str, String> = executor
        .execute(|attempt| {
            let calls = Arc::clone(&calls);
            let times = Arc::clone(&times);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                times.lock().unwrap().push(started.elapsed());
                match attempt {
                    0 => Err("E1".to_string()),
                    1 => Err("E2".to_string()),
                    _ => Ok("ok"),
                }
            }
        })
        .await;

    assert_eq!(result.unwrap(), "ok");
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    let times = times.lock().unwrap();
    assert_eq!(times[0].as_millis(), 0);
    assert_eq!((times[1] - times[0]).as_millis(), 1000);
    assert_eq!((times[2] - times[1]).as_millis(), 2000);
}

#[tokio::test(start_paused = true)]
async fn identical_configuration_yields_identical_outcomes() {
    // An operation that is a pure function of the attempt index
    let run = |policy: RetryPolicy| async move {
        RetryExecutor::new(policy)
            .execute(|attempt| async move {
                if attempt < 1 {
                    Err(format!("fail {attempt}"))
                } else {
                    Ok(format!("value {attempt}"))
                }
            })
            .await
    };

    let first: Result<String, String> = run(RetryPolicy::default()).await;
    let second: Result<String, String> = run(RetryPolicy::default()).await;
    assert_eq!(first, second);
    assert_eq!(first.unwrap(), "value 1");
}

#[tokio::test(start_paused = true)]
async fn helper_without_retry_invokes_once() {
    let calls = Arc::new(AtomicU32::new(0));
    let result: Result<(), String> = execute_without_retry(|_attempt| {
        let calls = Arc::clone(&calls);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err("boom".to_string())
        }
    })
    .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn helper_default_retry_uses_three_attempts() {
    let calls = Arc::new(AtomicU32::new(0));
    let result: Result<(), String> = execute_with_default_retry(|_attempt| {
        let calls = Arc::clone(&calls);
        async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err("boom".to_string())
        }
    })
    .await;

    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}
