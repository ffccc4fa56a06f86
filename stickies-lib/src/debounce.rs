//! Trailing-edge debouncing.
//!
//! Each call to [`Debouncer::schedule`] cancels whatever was scheduled before it, so of a
//! burst of calls less than `delay` apart only the last one ever completes.

use std::{future::Future, time::Duration};

use futures::future::{AbortHandle, Abortable};
use tokio::{task::JoinHandle, time::Instant};

/// Quiet period used for search input.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<AbortHandle>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `value` to be delivered once `delay` has passed.
    ///
    /// The returned future resolves to `Some(value)` at the deadline, or to `None` as soon as it
    /// is superseded by another call to `schedule` or by [`Debouncer::cancel`]. The deadline is
    /// fixed when this is called, not when the future is first polled.
    pub fn schedule<T>(&mut self, value: T) -> impl Future<Output = Option<T>> + Send + 'static
    where
        T: Send + 'static,
    {
        self.cancel();

        let (handle, registration) = AbortHandle::new_pair();
        self.pending = Some(handle);

        let deadline = Instant::now() + self.delay;

        async move {
            Abortable::new(tokio::time::sleep_until(deadline), registration)
                .await
                .ok()
                .map(|()| value)
        }
    }

    /// Run `callback` with `value` once `delay` has passed, unless superseded first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call<T, F>(&mut self, value: T, callback: F) -> JoinHandle<()>
    where
        T: Send + 'static,
        F: FnOnce(T) + Send + 'static,
    {
        let scheduled = self.schedule(value);

        tokio::spawn(async move {
            if let Some(value) = scheduled.await {
                callback(value);
            }
        })
    }

    /// Cancel the pending invocation, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use tokio::time::sleep;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_single_call_fires_after_delay() {
        let mut debouncer = Debouncer::default();
        let start = Instant::now();

        let value = debouncer.schedule("milk").await;

        assert_eq!(value, Some("milk"));
        assert!(start.elapsed() >= DEFAULT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_fires_once_with_last_value() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        let record = |fired: &Arc<Mutex<Vec<String>>>| {
            let fired = fired.clone();
            move |text: String| fired.lock().push(text)
        };

        let first = debouncer.call("m".to_string(), record(&fired));
        sleep(Duration::from_millis(50)).await;
        let second = debouncer.call("mi".to_string(), record(&fired));

        first.await.unwrap();
        second.await.unwrap();

        assert_eq!(*fired.lock(), vec!["mi".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_resolves_immediately() {
        let mut debouncer = Debouncer::new(Duration::from_secs(10));

        let first = debouncer.schedule(1);
        let second = debouncer.schedule(2);
        let start = Instant::now();

        assert_eq!(first.await, None);
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(second.await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let mut debouncer = Debouncer::default();

        let scheduled = debouncer.schedule(());
        debouncer.cancel();

        assert_eq!(scheduled.await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_outside_window_both_fire() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        for text in ["a", "b"] {
            let fired = fired.clone();
            debouncer
                .call(text, move |t| fired.lock().push(t))
                .await
                .unwrap();
        }

        assert_eq!(*fired.lock(), vec!["a", "b"]);
    }
}
