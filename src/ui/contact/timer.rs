use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// One-shot deferred task, at most one pending at a time.
///
/// Scheduling replaces (aborts) whatever was pending. Dropping the timer
/// cancels the pending task, so a reset never outlives its form.
pub struct ResetTimer {
    runtime: Handle,
    pending: Option<JoinHandle<()>>,
}

impl ResetTimer {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: None,
        }
    }

    /// Run `on_fire` once after `delay`, cancelling any earlier schedule.
    pub fn schedule<F>(&mut self, delay: Duration, on_fire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        tracing::debug!(delay_ms = delay.as_millis() as u64, "Form reset scheduled");
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire();
        }));
    }

    /// Abort the pending task. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                tracing::debug!("Pending form reset cancelled");
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_delay() {
        let (tx, rx) = mpsc::channel();
        let mut timer = ResetTimer::new(Handle::current());
        timer.schedule(Duration::from_secs(5), move || {
            let _ = tx.send(1);
        });

        tokio::time::sleep(Duration::from_millis(4_900)).await;
        assert!(rx.try_recv().is_err());
        assert!(timer.is_pending());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(rx.try_recv(), Ok(1));
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn rescheduling_cancels_earlier_task() {
        let (tx, rx) = mpsc::channel();
        let mut timer = ResetTimer::new(Handle::current());
        let first = tx.clone();
        timer.schedule(Duration::from_secs(5), move || {
            let _ = first.send("first");
        });
        tokio::time::sleep(Duration::from_secs(3)).await;
        timer.schedule(Duration::from_secs(5), move || {
            let _ = tx.send("second");
        });

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(rx.try_recv(), Ok("second"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn drop_cancels_pending_task() {
        let (tx, rx) = mpsc::channel::<()>();
        let mut timer = ResetTimer::new(Handle::current());
        timer.schedule(Duration::from_secs(5), move || {
            let _ = tx.send(());
        });
        drop(timer);

        tokio::time::sleep(Duration::from_secs(10)).await;
        // Sender dropped with the aborted task and nothing was sent.
        assert_eq!(rx.try_recv(), Err(mpsc::TryRecvError::Disconnected));
    }
}
