//! Graph view of a transition table

use crate::state_machine::{Transition, TransitionTable};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

/// A directed graph view over a [`TransitionTable`].
///
/// Nodes are the distinct state names in first-seen order and every
/// transition becomes one edge, so parallel edges are kept exactly as the
/// table lists them.
pub struct StateGraph<'a> {
    /// Node weights are state names, edge weights borrow the table's transitions.
    pub graph: DiGraph<&'a str, &'a Transition>,

    /// Maps a state name to its node.
    pub state_index: HashMap<&'a str, NodeIndex>,
}

impl<'a> StateGraph<'a> {
    pub fn from_table(table: &'a TransitionTable) -> Self {
        let mut graph = DiGraph::new();
        let mut state_index = HashMap::new();

        for state in table.states() {
            state_index.insert(state, graph.add_node(state));
        }

        for transition in table {
            if let (Some(&from), Some(&to)) = (
                state_index.get(transition.source()),
                state_index.get(transition.dest()),
            ) {
                graph.add_edge(from, to, transition);
            }
        }

        Self { graph, state_index }
    }

    /// States with no incoming edges, in first-seen order
    pub fn find_initial_states(&self) -> Vec<&'a str> {
        self.states_without(Direction::Incoming)
    }

    /// States with no outgoing edges, in first-seen order
    pub fn find_terminal_states(&self) -> Vec<&'a str> {
        self.states_without(Direction::Outgoing)
    }

    fn states_without(&self, direction: Direction) -> Vec<&'a str> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph.edges_directed(idx, direction).next().is_none())
            .map(|idx| self.graph[idx])
            .collect()
    }

    /// Transitions leaving a state, in table order
    pub fn outgoing_transitions(&self, state: &str) -> Vec<&'a Transition> {
        let Some(&idx) = self.state_index.get(state) else {
            return Vec::new();
        };
        let mut edges: Vec<_> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| (edge.id(), *edge.weight()))
            .collect();
        // petgraph walks adjacency lists newest first
        edges.sort_by_key(|(id, _)| *id);
        edges.into_iter().map(|(_, t)| t).collect()
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            total_states: self.graph.node_count(),
            total_transitions: self.graph.edge_count(),
            initial_states: self.find_initial_states().len(),
            terminal_states: self.find_terminal_states().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    pub total_states: usize,
    pub total_transitions: usize,
    pub initial_states: usize,
    pub terminal_states: usize,
}
