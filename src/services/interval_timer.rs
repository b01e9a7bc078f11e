// src/services/interval_timer.rs
//
// Frame-clock driven implementation of the Timer capability.
// The nannou update loop hands it each frame's delta; every active stream
// accumulates that time and converts whole periods into fired ticks.

use std::collections::HashMap;
use std::time::Duration;

use crate::animation::{Timer, TimerHandle};

#[derive(Debug)]
struct Stream {
    period: Duration,
    accumulated: Duration,
    fired: u32,
}

#[derive(Debug, Default)]
pub struct IntervalTimer {
    streams: HashMap<TimerHandle, Stream>,
    next_id: u64,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_streams(&self) -> usize {
        self.streams.len()
    }
}

impl Timer for IntervalTimer {
    fn schedule(&mut self, period: Duration) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.streams.insert(
            handle,
            Stream {
                // a zero period would fire forever within one frame
                period: period.max(Duration::from_millis(1)),
                accumulated: Duration::ZERO,
                fired: 0,
            },
        );
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.streams.remove(&handle);
    }

    fn advance(&mut self, elapsed: Duration) {
        for stream in self.streams.values_mut() {
            stream.accumulated += elapsed;
            while stream.accumulated >= stream.period {
                stream.accumulated -= stream.period;
                stream.fired += 1;
            }
        }
    }

    fn take_fired(&mut self, handle: TimerHandle) -> u32 {
        self.streams
            .get_mut(&handle)
            .map(|stream| std::mem::take(&mut stream.fired))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_period_across_frames() {
        let mut timer = IntervalTimer::new();
        let handle = timer.schedule(Duration::from_millis(50));

        // three ~60fps frames are not quite a period
        for _ in 0..2 {
            timer.advance(Duration::from_millis(17));
            assert_eq!(timer.take_fired(handle), 0);
        }
        timer.advance(Duration::from_millis(17));
        assert_eq!(timer.take_fired(handle), 1);
        // taking drains the count
        assert_eq!(timer.take_fired(handle), 0);

        // a long frame fires several periods at once
        timer.advance(Duration::from_millis(149));
        assert_eq!(timer.take_fired(handle), 3);
    }

    #[test]
    fn test_cancelled_stream_stops_firing() {
        let mut timer = IntervalTimer::new();
        let handle = timer.schedule(Duration::from_millis(50));
        timer.advance(Duration::from_millis(60));
        timer.cancel(handle);
        assert_eq!(timer.active_streams(), 0);
        timer.advance(Duration::from_millis(60));
        assert_eq!(timer.take_fired(handle), 0);
    }

    #[test]
    fn test_handles_are_not_reused() {
        let mut timer = IntervalTimer::new();
        let first = timer.schedule(Duration::from_millis(50));
        timer.cancel(first);
        let second = timer.schedule(Duration::from_millis(50));
        assert_ne!(first, second);
    }
}
