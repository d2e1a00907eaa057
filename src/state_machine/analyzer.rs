//! Shape analyzer
//!
//! Summarizes the shape of a state machine graph: linear chains, branching
//! trees, or machines that loop back on themselves. Purely a report; nothing
//! here rejects a table.

use super::{GraphStats, StateGraph, Transition};
use petgraph::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineShape {
    /// No states at all
    Empty,

    /// A -> B -> C -> D
    Linear,

    /// A -> B
    ///   -> C
    Branching,

    /// A -> B -> A
    Cyclic,
}

impl MachineShape {
    pub fn display_name(&self) -> &'static str {
        match self {
            MachineShape::Empty => "Empty",
            MachineShape::Linear => "Linear",
            MachineShape::Branching => "Branching",
            MachineShape::Cyclic => "Cyclic",
        }
    }
}

/// Analysis report containing shape and metrics
#[derive(Debug, Clone)]
pub struct AnalysisReport<'a> {
    pub shape: MachineShape,
    pub stats: GraphStats,
    pub initial_states: Vec<&'a str>,
    pub terminal_states: Vec<&'a str>,
    pub branching_factor: f64,
    pub has_cycles: bool,
    /// Every state that has outgoing transitions, in first-seen order
    pub transitions_by_state: Vec<(&'a str, Vec<&'a Transition>)>,
}

/// Describe the shape of a state graph
pub fn analyze<'a>(graph: &StateGraph<'a>) -> AnalysisReport<'a> {
    let node_count = graph.graph.node_count();
    let has_cycles = petgraph::algo::is_cyclic_directed(&graph.graph);

    let out_degrees: Vec<usize> = graph
        .graph
        .node_indices()
        .map(|idx| graph.graph.edges_directed(idx, Direction::Outgoing).count())
        .collect();

    let branching_factor = if node_count > 0 {
        out_degrees.iter().sum::<usize>() as f64 / node_count as f64
    } else {
        0.0
    };

    let shape = if node_count == 0 {
        MachineShape::Empty
    } else if has_cycles {
        MachineShape::Cyclic
    } else if out_degrees.iter().all(|&d| d <= 1) {
        MachineShape::Linear
    } else {
        MachineShape::Branching
    };

    let transitions_by_state = graph
        .graph
        .node_indices()
        .map(|idx| graph.graph[idx])
        .map(|state| (state, graph.outgoing_transitions(state)))
        .filter(|(_, transitions)| !transitions.is_empty())
        .collect();

    tracing::debug!(
        "Analyzed {} states: shape={}, branching={:.2}",
        node_count,
        shape.display_name(),
        branching_factor
    );

    AnalysisReport {
        shape,
        stats: graph.stats(),
        initial_states: graph.find_initial_states(),
        terminal_states: graph.find_terminal_states(),
        branching_factor,
        has_cycles,
        transitions_by_state,
    }
}
