// src/chain/node.rs
//
// One link of the ladder chain.
// Adjacency is stored as indices into the chain's node arena.

use super::Direction;
use crate::animation::{AnimationState, Progress};
use crate::draw::{LadderLayout, Surface};

/// Where the chain goes after a node completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    Step(usize),
    /// No node in that direction: the chain bounces.
    Boundary,
}

#[derive(Debug, Clone)]
pub struct Node {
    index: usize,
    prev: Option<usize>,
    next: Option<usize>,
    state: AnimationState,
}

impl Node {
    pub(crate) fn new(index: usize, node_count: usize) -> Self {
        Self {
            index,
            prev: index.checked_sub(1),
            next: (index + 1 < node_count).then_some(index + 1),
            state: AnimationState::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn advance(&mut self) -> Progress {
        self.state.advance()
    }

    pub fn try_start(&mut self) -> bool {
        self.state.begin_if_idle()
    }

    pub fn neighbor(&self, direction: Direction) -> Neighbor {
        let link = match direction {
            Direction::Backward => self.prev,
            Direction::Forward => self.next,
        };
        link.map_or(Neighbor::Boundary, Neighbor::Step)
    }

    /// Draw every row from the head of the chain up to and including this
    /// node, in index order. `nodes` is the arena this node lives in.
    pub fn draw<S: Surface>(&self, nodes: &[Node], surface: &mut S, layout: &LadderLayout) {
        let mut head = self;
        while let Some(prev) = head.prev {
            head = &nodes[prev];
        }

        let mut node = head;
        loop {
            layout.draw_row(surface, node.index, &node.state);
            if node.index == self.index {
                break;
            }
            match node.next {
                Some(next) => node = &nodes[next],
                None => break,
            }
        }
    }
}
