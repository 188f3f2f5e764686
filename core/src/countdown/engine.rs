//! Countdown engine and its repeating scheduler
//!
//! The engine owns the target, the clock and a two-state latch
//! (`Counting` → `Reached`). It can be driven two ways:
//! - **Polling**: call [`CountdownEngine::tick`] from an external loop
//! - **Scheduled**: [`CountdownEngine::run`] / [`CountdownEngine::subscribe`]
//!   spawn a tokio task that ticks on the configured cadence and return a
//!   [`CountdownHandle`] for cancellation

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use launchpad_types::LaunchConfig;
use time::OffsetDateTime;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::{Clock, CountdownError, CountdownSnapshot, SystemClock, TargetInstant, compute};

/// Cadence used when none is configured
pub const DEFAULT_CADENCE: Duration = Duration::from_millis(1000);

/// Latch state of an engine. `Reached` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownState {
    #[default]
    Counting,
    Reached,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub snapshot: CountdownSnapshot,
    /// True only on the tick that moved the engine into `Reached`
    pub just_reached: bool,
}

/// Notification emitted by [`CountdownEngine::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownEvent {
    Tick(CountdownSnapshot),
    /// Sent once, right after the first reached snapshot
    Reached,
}

#[derive(Debug)]
pub struct CountdownEngine<C: Clock = SystemClock> {
    target: TargetInstant,
    cadence: Duration,
    clock: C,
    state: CountdownState,
}

impl CountdownEngine<SystemClock> {
    pub fn new(target: TargetInstant) -> Self {
        Self::with_clock(target, SystemClock)
    }

    /// Build an engine from the launch section of the app config.
    ///
    /// The target string is parsed here, so a bad config fails at construction
    /// rather than on the first tick.
    pub fn from_config(config: &LaunchConfig) -> Result<Self, CountdownError> {
        let target = TargetInstant::parse(&config.target)?;
        Self::new(target).with_cadence(Duration::from_millis(config.cadence_ms))
    }
}

impl<C: Clock> CountdownEngine<C> {
    pub fn with_clock(target: TargetInstant, clock: C) -> Self {
        Self {
            target,
            cadence: DEFAULT_CADENCE,
            clock,
            state: CountdownState::Counting,
        }
    }

    pub fn with_cadence(mut self, cadence: Duration) -> Result<Self, CountdownError> {
        if cadence.is_zero() {
            return Err(CountdownError::ZeroCadence);
        }
        self.cadence = cadence;
        Ok(self)
    }

    pub fn target(&self) -> TargetInstant {
        self.target
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn is_reached(&self) -> bool {
        self.state == CountdownState::Reached
    }

    /// Snapshot for the current clock reading without touching the latch
    pub fn peek(&self) -> CountdownSnapshot {
        if self.is_reached() {
            return CountdownSnapshot::REACHED;
        }
        compute(self.clock.now(), self.target.as_datetime())
    }

    /// Read the clock and advance the latch.
    pub fn tick(&mut self) -> Tick {
        let now = self.clock.now();
        self.tick_at(now)
    }

    /// Advance the latch against an explicit `now`.
    ///
    /// After the engine has reached its target every call returns the zeroed
    /// snapshot, even if `now` moves back before the target.
    pub fn tick_at(&mut self, now: OffsetDateTime) -> Tick {
        if self.is_reached() {
            return Tick {
                snapshot: CountdownSnapshot::REACHED,
                just_reached: false,
            };
        }

        let snapshot = compute(now, self.target.as_datetime());
        tracing::debug!(
            days = snapshot.days,
            hours = snapshot.hours,
            minutes = snapshot.minutes,
            seconds = snapshot.seconds,
            "countdown tick"
        );

        let just_reached = snapshot.reached;
        if just_reached {
            self.state = CountdownState::Reached;
            tracing::info!(target_instant = %self.target, "countdown reached target");
        }

        Tick {
            snapshot,
            just_reached,
        }
    }

    /// Tick immediately, then on every cadence interval, on a tokio task.
    ///
    /// `on_tick` sees every snapshot. `on_reached` runs once after the first
    /// reached snapshot, and the task then stops. Calling this on an engine
    /// that already reached its target does nothing. Must be called from
    /// within a tokio runtime.
    pub fn run<T, R>(mut self, mut on_tick: T, on_reached: R) -> CountdownHandle
    where
        T: FnMut(CountdownSnapshot) + Send + 'static,
        R: FnOnce() + Send + 'static,
    {
        let cancelled = Arc::new(Mutex::new(false));
        if self.is_reached() {
            return CountdownHandle {
                cancelled,
                task: None,
            };
        }

        let gate = Arc::clone(&cancelled);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.cadence);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut on_reached = Some(on_reached);

            loop {
                interval.tick().await;
                if !self.dispatch_tick(&gate, &mut on_tick, &mut on_reached) {
                    break;
                }
            }
        });

        CountdownHandle {
            cancelled,
            task: Some(task),
        }
    }

    /// Run one scheduled tick while holding the cancel gate.
    ///
    /// `cancel()` takes the same lock, so it either sees the tick finished or
    /// the tick sees the flag and does nothing. Returns false when the task
    /// should stop.
    fn dispatch_tick<T, R>(
        &mut self,
        gate: &Mutex<bool>,
        on_tick: &mut T,
        on_reached: &mut Option<R>,
    ) -> bool
    where
        T: FnMut(CountdownSnapshot),
        R: FnOnce(),
    {
        let cancelled = lock_gate(gate);
        if *cancelled {
            return false;
        }

        let tick = self.tick();
        on_tick(tick.snapshot);

        if tick.just_reached {
            if let Some(notify) = on_reached.take() {
                notify();
            }
            return false;
        }
        true
    }

    /// Like [`run`](Self::run), but delivers ticks over a channel.
    ///
    /// The receiver yields `None` once the engine stops, either because it
    /// reached its target or because it was cancelled.
    pub fn subscribe(self) -> (CountdownHandle, mpsc::UnboundedReceiver<CountdownEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let reached_tx = tx.clone();

        let handle = self.run(
            move |snapshot| {
                let _ = tx.send(CountdownEvent::Tick(snapshot));
            },
            move || {
                let _ = reached_tx.send(CountdownEvent::Reached);
            },
        );

        (handle, rx)
    }
}

/// Owner's handle to a scheduled countdown.
#[derive(Debug)]
pub struct CountdownHandle {
    cancelled: Arc<Mutex<bool>>,
    task: Option<JoinHandle<()>>,
}

impl CountdownHandle {
    /// Stop the countdown. No callback fires after this returns. Idempotent.
    ///
    /// Waits for a tick that is already dispatching to finish, so it must not
    /// be called from inside `on_tick` or `on_reached`.
    pub fn cancel(&self) {
        {
            let mut cancelled = lock_gate(&self.cancelled);
            if !*cancelled {
                *cancelled = true;
                tracing::debug!("countdown cancelled");
            }
        }
        if let Some(task) = &self.task {
            task.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        *lock_gate(&self.cancelled)
    }

    /// True once the task has exited (reached, cancelled, or never started)
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(|task| task.is_finished())
    }

    /// Wait for the countdown task to exit.
    pub async fn join(mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

fn lock_gate(gate: &Mutex<bool>) -> MutexGuard<'_, bool> {
    // A panicking callback leaves a plain bool behind
    gate.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
