// src/animation/ticker.rs
//
// Guarded periodic driver.
// The running latch makes sure at most one periodic stream exists at a time.

use std::time::Duration;
use tracing::debug;

/// Cadence of the animation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Opaque id for one scheduled periodic stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// Periodic-callback capability supplied by the platform shell.
///
/// The shell owns the clock: it feeds elapsed time through `advance` and the
/// driver collects how many periods fired since it last asked.
pub trait Timer {
    fn schedule(&mut self, period: Duration) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
    fn advance(&mut self, elapsed: Duration);
    fn take_fired(&mut self, handle: TimerHandle) -> u32;
}

pub struct Ticker<T: Timer> {
    timer: T,
    period: Duration,
    handle: Option<TimerHandle>,
}

impl<T: Timer> Ticker<T> {
    pub fn new(timer: T, period: Duration) -> Self {
        Self {
            timer,
            period,
            handle: None,
        }
    }

    /// Begin ticking. Ignored (returns false) while already running.
    pub fn start(&mut self) -> bool {
        if self.handle.is_some() {
            return false;
        }
        let handle = self.timer.schedule(self.period);
        debug!(?handle, period_ms = self.period.as_millis() as u64, "ticker started");
        self.handle = Some(handle);
        true
    }

    /// Stop ticking. Ignored (returns false) when not running.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                self.timer.cancel(handle);
                debug!(?handle, "ticker stopped");
                true
            }
            None => false,
        }
    }

    /// Feed elapsed time to the timer and return how many ticks are due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.timer.advance(elapsed);
        match self.handle {
            Some(handle) => self.timer.take_fired(handle),
            None => 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts calls into the timer capability; every advance fires once
    /// while a stream is live.
    #[derive(Default)]
    struct CountingTimer {
        scheduled: u32,
        cancelled: u32,
        live: bool,
        pending: u32,
    }

    impl Timer for CountingTimer {
        fn schedule(&mut self, _period: Duration) -> TimerHandle {
            self.scheduled += 1;
            self.live = true;
            self.pending = 0;
            TimerHandle(u64::from(self.scheduled))
        }

        fn cancel(&mut self, _handle: TimerHandle) {
            self.cancelled += 1;
            self.live = false;
            self.pending = 0;
        }

        fn advance(&mut self, _elapsed: Duration) {
            if self.live {
                self.pending += 1;
            }
        }

        fn take_fired(&mut self, _handle: TimerHandle) -> u32 {
            std::mem::take(&mut self.pending)
        }
    }

    #[test]
    fn test_stop_before_start_is_noop() {
        let mut ticker = Ticker::new(CountingTimer::default(), TICK_INTERVAL);
        assert!(!ticker.stop());
        assert_eq!(ticker.timer().cancelled, 0);
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_double_start_schedules_once() {
        let mut ticker = Ticker::new(CountingTimer::default(), TICK_INTERVAL);
        assert!(ticker.start());
        assert!(!ticker.start());
        assert_eq!(ticker.timer().scheduled, 1);
        assert!(ticker.is_running());

        assert!(ticker.stop());
        assert!(!ticker.stop());
        assert_eq!(ticker.timer().cancelled, 1);

        // restart after stop schedules a fresh stream
        assert!(ticker.start());
        assert_eq!(ticker.timer().scheduled, 2);
    }

    #[test]
    fn test_advance_reports_nothing_when_stopped() {
        let mut ticker = Ticker::new(CountingTimer::default(), TICK_INTERVAL);
        assert_eq!(ticker.advance(TICK_INTERVAL), 0);

        // time spent stopped does not carry over into the new stream
        ticker.start();
        assert_eq!(ticker.advance(TICK_INTERVAL), 1);
        assert_eq!(ticker.advance(TICK_INTERVAL), 1);

        ticker.stop();
        assert_eq!(ticker.advance(TICK_INTERVAL), 0);
    }
}
