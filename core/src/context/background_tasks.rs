use crate::countdown::CountdownHandle;

/// Long-running tasks owned by the app
#[derive(Debug, Default)]
pub struct BackgroundTasks {
    pub countdown: Option<CountdownHandle>,
}

impl BackgroundTasks {
    /// Swap in a new countdown, cancelling the previous one.
    pub fn replace_countdown(&mut self, handle: CountdownHandle) {
        if let Some(previous) = self.countdown.replace(handle) {
            previous.cancel();
        }
    }

    /// Cancel the running countdown. Returns false if none was running.
    pub fn stop_countdown(&mut self) -> bool {
        match self.countdown.take() {
            Some(handle) => {
                let was_running = !handle.is_finished();
                handle.cancel();
                was_running
            }
            None => false,
        }
    }

    pub fn countdown_running(&self) -> bool {
        self.countdown.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn abort_all(&mut self) {
        if let Some(handle) = self.countdown.take() {
            handle.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::{CountdownEngine, ManualClock, TargetInstant};
    use std::time::Duration;
    use time::macros::datetime;

    fn engine() -> CountdownEngine<ManualClock> {
        let target = TargetInstant::from_datetime(datetime!(2025-12-21 19:00:00 +05:30));
        CountdownEngine::with_clock(target, ManualClock::new(datetime!(2025-12-01 0:00 UTC)))
    }

    #[tokio::test(start_paused = true)]
    async fn replacing_cancels_previous_countdown() {
        let mut tasks = BackgroundTasks::default();
        let (first, _first_rx) = engine().subscribe();
        tasks.replace_countdown(first);
        let (second, _second_rx) = engine().subscribe();
        tasks.replace_countdown(second);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(tasks.countdown_running());
        assert!(tasks.stop_countdown());
        assert!(!tasks.stop_countdown());
        assert!(!tasks.countdown_running());
    }
}
