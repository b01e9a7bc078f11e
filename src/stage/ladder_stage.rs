// src/stage/ladder_stage.rs
//
// The stage wires the chain, the ticker and the drawing surface together.
// A press starts the current node; every tick redraws, then advances.

use std::time::Duration;
use tracing::{debug, info};

use crate::animation::{Progress, Ticker, Timer, TICK_INTERVAL};
use crate::chain::Chain;
use crate::config::Config;
use crate::draw::{Color, LadderLayout, Surface};
use crate::error::{LadderError, LadderResult};

/// Number of rungs on the ladder.
pub const NODE_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct StageConfig {
    pub node_count: usize,
    pub background: Color,
    pub stroke: Color,
    pub tick_interval: Duration,
}

impl StageConfig {
    /// Stage settings styled from the config file.
    pub fn from_config(config: &Config) -> Self {
        Self {
            node_count: NODE_COUNT,
            background: config.style.background,
            stroke: config.style.stroke,
            tick_interval: TICK_INTERVAL,
        }
    }

    /// Ladder geometry for a surface of the given size.
    pub fn layout(&self, width: f32, height: f32) -> LadderLayout {
        LadderLayout {
            width,
            height,
            node_count: self.node_count,
            stroke_color: self.stroke,
        }
    }
}

pub struct Stage<S: Surface, T: Timer> {
    config: StageConfig,
    layout: LadderLayout,
    chain: Chain,
    ticker: Ticker<T>,
    surface: S,
}

impl<S: Surface, T: Timer> Stage<S, T> {
    /// Build the chain and paint the first frame.
    pub fn new(config: StageConfig, surface: S, timer: T) -> LadderResult<Self> {
        let (width, height) = (surface.width(), surface.height());
        if !(width > 0.0 && height > 0.0) {
            return Err(LadderError::surface_unavailable(format!(
                "surface is {}x{}",
                width, height
            )));
        }

        let chain = Chain::new(config.node_count)?;
        // geometry always follows the surface it is drawn on
        let layout = config.layout(width, height);
        let ticker = Ticker::new(timer, config.tick_interval);

        info!(
            nodes = config.node_count,
            width, height, "ladder stage ready"
        );

        let mut stage = Self {
            config,
            layout,
            chain,
            ticker,
            surface,
        };
        stage.render();
        Ok(stage)
    }

    /// Clear to the background and redraw the visible chain.
    pub fn render(&mut self) {
        self.surface.clear(self.config.background);
        self.chain.draw(&mut self.surface, &self.layout);
    }

    /// Primary action. Starts the current node and the ticker unless an
    /// animation is already running.
    pub fn press(&mut self) -> bool {
        if !self.chain.start_if_idle() {
            debug!("press ignored, animation in progress");
            return false;
        }
        self.ticker.start();
        true
    }

    /// Let `elapsed` time pass and run every tick that fell due.
    /// Returns the number of ticks processed.
    pub fn update(&mut self, elapsed: Duration) -> u32 {
        let due = self.ticker.advance(elapsed);
        let mut processed = 0;
        for _ in 0..due {
            processed += 1;
            if self.tick() == Progress::Completed {
                break;
            }
        }
        processed
    }

    /// One tick: draw the current state, then advance it.
    fn tick(&mut self) -> Progress {
        self.render();
        let progress = self.chain.tick();
        if progress.is_completed() {
            self.ticker.stop();
            debug!(
                current = self.chain.current_index(),
                direction = self.chain.direction().sign(),
                "animation cycle complete"
            );
        }
        progress
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn ticker(&self) -> &Ticker<T> {
        &self.ticker
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
