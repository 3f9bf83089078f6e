//! Per-request deadline.
//!
//! A `DeadlineGuard` owns one timer task. When the timer elapses it cancels
//! the guard's token; dropping the guard aborts the timer, so no cancellation
//! can fire after the request has settled.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct DeadlineGuard {
    deadline: Duration,
    token: CancellationToken,
    timer: JoinHandle<()>,
}

impl DeadlineGuard {
    /// Start the timer. Must be called within a Tokio runtime.
    pub fn arm(deadline: Duration) -> Self {
        let token = CancellationToken::new();
        let timer_token = token.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(deadline).await;
            tracing::debug!(deadline_secs = deadline.as_secs_f64(), "Request deadline elapsed");
            timer_token.cancel();
        });

        Self {
            deadline,
            token,
            timer,
        }
    }

    /// Token cancelled when the deadline elapses.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_expired(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drive `fut` until it completes or the deadline elapses. On expiry the
    /// future is dropped, which cancels whatever it had in flight.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, Duration>
    where
        F: Future,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => Err(self.deadline),
            output = fut => Ok(output),
        }
    }
}

impl Drop for DeadlineGuard {
    fn drop(&mut self) {
        self.timer.abort();
    }
}
