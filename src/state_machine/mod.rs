//! State machine module - the transition model and its graph view

pub mod analyzer;
pub mod graph;
pub mod table;
pub mod transition;

// Re-export key types
pub use analyzer::{AnalysisReport, MachineShape, analyze};
pub use graph::{GraphStats, StateGraph};
pub use table::TransitionTable;
pub use transition::{Seconds, StateName, Transition, Trigger};
