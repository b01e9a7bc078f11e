// src/chain/traversal.rs
//
// The ladder chain: owns every node, tracks which one is animating and the
// direction of travel. Reaching either end flips the direction in place.

use tracing::{debug, info};

use super::{Direction, Neighbor, Node};
use crate::animation::Progress;
use crate::draw::{LadderLayout, Surface};
use crate::error::{LadderError, LadderResult};

#[derive(Debug, Clone)]
pub struct Chain {
    nodes: Vec<Node>,
    current: usize,
    direction: Direction,
}

impl Chain {
    /// Build all nodes up front and link neighbours by index.
    pub fn new(node_count: usize) -> LadderResult<Self> {
        if node_count < 1 {
            return Err(LadderError::InvalidNodeCount(node_count));
        }
        let nodes = (0..node_count).map(|i| Node::new(i, node_count)).collect();
        Ok(Self {
            nodes,
            current: 0,
            direction: Direction::Forward,
        })
    }

    /// Start the current node if it is idle.
    pub fn start_if_idle(&mut self) -> bool {
        let started = self.nodes[self.current].try_start();
        if started {
            debug!(
                node = self.current,
                dir = self.nodes[self.current].state().dir(),
                "node animation started"
            );
        }
        started
    }

    /// Advance the current node one step. On completion move to the neighbour
    /// in the travel direction, or flip the direction when at an end.
    pub fn tick(&mut self) -> Progress {
        let progress = self.nodes[self.current].advance();
        if progress.is_completed() {
            match self.nodes[self.current].neighbor(self.direction) {
                Neighbor::Step(next) => {
                    debug!(from = self.current, to = next, "chain stepped");
                    self.current = next;
                }
                Neighbor::Boundary => {
                    self.direction = self.direction.reversed();
                    info!(node = self.current, direction = ?self.direction, "chain bounced");
                }
            }
        }
        progress
    }

    /// Draw the visible prefix of the chain, head up to the current node.
    pub fn draw<S: Surface>(&self, surface: &mut S, layout: &LadderLayout) {
        self.nodes[self.current].draw(&self.nodes, surface, layout);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn current(&self) -> &Node {
        &self.nodes[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn is_animating(&self) -> bool {
        !self.current().state().is_idle()
    }
}
