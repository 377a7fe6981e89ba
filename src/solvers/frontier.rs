use std::collections::{HashSet, VecDeque};

use super::{
    SolveError,
    node::{NodeId, SearchTree},
};
use crate::maze::Coord;

/// Order in which a [`Frontier`] hands back its nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Last in, first out. Gives depth-first search.
    Stack,
    /// First in, first out. Gives breadth-first search.
    Queue,
}

/// Discovered nodes still waiting to be expanded.
#[derive(Debug)]
pub struct Frontier {
    discipline: Discipline,
    nodes: VecDeque<(NodeId, Coord)>,
    /// States currently in `nodes`, for constant-time membership checks
    states: HashSet<Coord>,
}

impl Frontier {
    pub fn new(discipline: Discipline) -> Self {
        Frontier {
            discipline,
            nodes: VecDeque::new(),
            states: HashSet::new(),
        }
    }

    pub fn add(&mut self, tree: &SearchTree, id: NodeId) {
        let state = tree.get(id).state;
        self.nodes.push_back((id, state));
        self.states.insert(state);
    }

    pub fn contains_state(&self, state: Coord) -> bool {
        self.states.contains(&state)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Takes the next node according to the frontier's discipline.
    /// Fails with [`SolveError::EmptyFrontier`] when nothing is left.
    pub fn remove(&mut self) -> Result<NodeId, SolveError> {
        let (id, state) = match self.discipline {
            Discipline::Stack => self.nodes.pop_back(),
            Discipline::Queue => self.nodes.pop_front(),
        }
        .ok_or(SolveError::EmptyFrontier)?;
        self.states.remove(&state);
        Ok(id)
    }
}
