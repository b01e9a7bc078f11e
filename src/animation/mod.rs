pub mod state;
pub mod ticker;

pub use state::{AnimationState, Progress, SCALE_STEP};
pub use ticker::{Ticker, Timer, TimerHandle, TICK_INTERVAL};
