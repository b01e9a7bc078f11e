pub mod interval_timer;

pub use interval_timer::IntervalTimer;
