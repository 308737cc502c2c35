//! The single running countdown task and its owner.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use super::ExpiryTimer;

const TICK: Duration = Duration::from_secs(1);

/// Delivered to the countdown callback from the tick task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    /// One second elapsed; `remaining_secs` is still above zero.
    Tick { remaining_secs: u64 },
    /// Reached zero. Last event; the task ends after delivering it.
    Expired,
}

/// Decrements the live-task count when the task future is dropped (finished or aborted).
struct LiveGuard(Arc<AtomicUsize>);

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Running tick task. Aborted on drop.
#[derive(Debug)]
pub(crate) struct CountdownHandle {
    task: JoinHandle<()>,
}

impl CountdownHandle {
    fn spawn<F>(window: Duration, live: Arc<AtomicUsize>, mut on_event: F) -> Self
    where
        F: FnMut(CountdownEvent) + Send + 'static,
    {
        live.fetch_add(1, Ordering::SeqCst);
        let guard = LiveGuard(live);
        let mut timer = ExpiryTimer::new(window);

        let task = tokio::spawn(async move {
            let _guard = guard;
            if timer.is_expired() {
                on_event(CountdownEvent::Expired);
                return;
            }
            let mut ticks = interval_at(Instant::now() + TICK, TICK);
            loop {
                ticks.tick().await;
                if timer.tick() {
                    on_event(CountdownEvent::Expired);
                    return;
                }
                on_event(CountdownEvent::Tick {
                    remaining_secs: timer.remaining_secs(),
                });
            }
        });

        Self { task }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Owner of at most one countdown.
#[derive(Debug, Default)]
pub struct CountdownSlot {
    current: Option<CountdownHandle>,
    live: Arc<AtomicUsize>,
}

impl CountdownSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any running countdown, then start a new one over `window`.
    /// Must be called from within a tokio runtime.
    pub fn start<F>(&mut self, window: Duration, on_event: F)
    where
        F: FnMut(CountdownEvent) + Send + 'static,
    {
        self.cancel();
        self.current = Some(CountdownHandle::spawn(
            window,
            Arc::clone(&self.live),
            on_event,
        ));
    }

    /// Abort the running countdown, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            if !handle.is_finished() {
                tracing::debug!("countdown superseded");
            }
        }
    }

    /// True while a countdown task is still ticking.
    pub fn is_running(&self) -> bool {
        self.current.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Number of tick tasks that have not yet been dropped by the runtime.
    pub fn live_tasks(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}
