//! Tick delivery for the simulation loop.
//!
//! The loop never sleeps itself. After each tick it asks a [`Scheduler`] for
//! another one after the tick period, and whoever owns the scheduler hands
//! due ticks back to [`Simulation::on_tick`](crate::Simulation::on_tick) on
//! the thread that owns the simulation.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

/// Something that can deliver a tick once `delay` has elapsed.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration);
}

/// Deterministic scheduler on a virtual clock.
///
/// Nothing happens until [`advance`](Self::advance) moves the clock, which
/// makes tick timing exact in tests and headless runs.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    deadlines: Vec<Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Ticks requested but not yet delivered.
    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.deadlines.iter().min().copied()
    }

    /// Moves the clock forward by `by`, calling `fire` for each deadline
    /// reached, earliest first. Ticks scheduled from inside `fire` also run
    /// if they fall inside the window. Returns how many fired.
    pub fn advance<F>(&mut self, by: Duration, mut fire: F) -> usize
    where
        F: FnMut(&mut Self),
    {
        let until = self.now + by;
        let mut fired = 0;
        while let Some(deadline) = self.pop_due(until) {
            self.now = deadline;
            fire(self);
            fired += 1;
        }
        self.now = until;
        fired
    }

    fn pop_due(&mut self, until: Duration) -> Option<Duration> {
        let (index, &deadline) = self
            .deadlines
            .iter()
            .enumerate()
            .min_by_key(|(_, deadline)| **deadline)?;
        (deadline <= until).then(|| self.deadlines.remove(index))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) {
        self.deadlines.push(self.now + delay);
    }
}

/// Scheduler backed by tokio timers.
///
/// Each request becomes a sleeping task on the runtime. When it wakes it
/// posts to a channel that the owning thread drains with
/// [`take_due`](Self::take_due) or awaits with
/// [`next_due`](Self::next_due), so ticks still run on that thread.
pub struct TokioScheduler {
    handle: Handle,
    tx: mpsc::UnboundedSender<()>,
    rx: mpsc::UnboundedReceiver<()>,
    wake: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            tx,
            rx,
            wake: None,
        }
    }

    /// Called from the runtime whenever a tick becomes due, e.g. to ask a
    /// UI to repaint and drain the queue.
    pub fn with_waker(mut self, wake: impl Fn() + Send + Sync + 'static) -> Self {
        self.wake = Some(Arc::new(wake));
        self
    }

    /// Number of ticks that became due since the last call.
    pub fn take_due(&mut self) -> usize {
        let mut due = 0;
        while self.rx.try_recv().is_ok() {
            due += 1;
        }
        due
    }

    /// Waits for the next due tick.
    pub async fn next_due(&mut self) {
        // The sender lives in `self`, so the channel never closes here.
        let _ = self.rx.recv().await;
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration) {
        let tx = self.tx.clone();
        let wake = self.wake.clone();
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(()).is_ok() {
                if let Some(wake) = wake {
                    wake();
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn manual_fires_in_deadline_order() {
        let mut sched = ManualScheduler::new();
        sched.schedule(30 * MS);
        sched.schedule(10 * MS);
        assert_eq!(sched.next_deadline(), Some(10 * MS));

        let mut seen = Vec::new();
        let fired = sched.advance(20 * MS, |s| seen.push(s.now()));
        assert_eq!(fired, 1);
        assert_eq!(seen, vec![10 * MS]);
        assert_eq!(sched.now(), 20 * MS);
        assert_eq!(sched.pending(), 1);
    }

    #[test]
    fn manual_runs_ticks_scheduled_while_firing() {
        let mut sched = ManualScheduler::new();
        sched.schedule(Duration::ZERO);
        let fired = sched.advance(1000 * MS, |s| s.schedule(300 * MS));
        // Fires at 0, 300, 600 and 900; the one for 1200 stays queued.
        assert_eq!(fired, 4);
        assert_eq!(sched.next_deadline(), Some(1200 * MS));
    }

    #[tokio::test]
    async fn tokio_delivers_after_delay() {
        let mut sched = TokioScheduler::new(Handle::current());
        sched.schedule(5 * MS);
        assert_eq!(sched.take_due(), 0);

        tokio::time::timeout(Duration::from_secs(5), sched.next_due())
            .await
            .expect("tick never arrived");
        assert_eq!(sched.take_due(), 0);
    }

    #[tokio::test]
    async fn tokio_calls_waker() {
        let woken = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&woken);
        let mut sched = TokioScheduler::new(Handle::current())
            .with_waker(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        sched.schedule(MS);
        sched.schedule(MS);
        for _ in 0..2 {
            tokio::time::timeout(Duration::from_secs(5), sched.next_due())
                .await
                .expect("tick never arrived");
        }
        assert_eq!(woken.load(Ordering::SeqCst), 2);
    }
}
