pub mod ladder_stage;

pub use ladder_stage::{Stage, StageConfig, NODE_COUNT};
