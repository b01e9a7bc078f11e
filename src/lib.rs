// src/lib.rs
//
// ladderline: a click-driven ladder line animation.
// The chain/animation core only talks to the Surface and Timer traits;
// main.rs supplies nannou-backed implementations.

pub mod animation;
pub mod chain;
pub mod config;
pub mod draw;
pub mod error;
pub mod services;
pub mod stage;

pub use error::{LadderError, LadderResult};
