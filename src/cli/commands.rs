//! CLI command implementations
//!
//! This module contains the implementation for each CLI command.

use crate::parser::{TableReader, resolve_table_path};
use crate::state_machine::TransitionTable;
use crate::{Config, Result};
use std::path::Path;

/// Read and normalize the table at `path`
pub fn load_table(path: &Path, config: &Config) -> Result<TransitionTable> {
    let path = resolve_table_path(path);
    let rows = TableReader::new()
        .require_header(config.table.require_header)
        .read_path(&path)?;
    let table = TransitionTable::from_rows(rows)?;
    tracing::info!(
        "Loaded {} transitions between {} states",
        table.len(),
        table.states().len()
    );
    Ok(table)
}

/// Jsonify command implementation
pub mod jsonify {
    use super::*;
    use std::io::Write;

    pub fn execute(table: &TransitionTable, w: &mut impl Write) -> Result<()> {
        crate::cli::output::output_json(w, table)
    }
}

/// Dotify command implementation
pub mod dotify {
    use super::*;
    use std::io::Write;

    pub fn execute(table: &TransitionTable, w: &mut impl Write) -> Result<()> {
        crate::cli::output::output_dot(w, table)
    }
}

/// Dictify command implementation
pub mod dictify {
    use super::*;
    use std::io::Write;

    pub fn execute(table: &TransitionTable, w: &mut impl Write) -> Result<()> {
        crate::cli::output::output_dict(w, table)
    }
}

/// Visualize command implementation
pub mod visualize {
    use super::*;
    use crate::render::{RenderFormat, Renderer, open_in_viewer};

    /// Render the table's graph and optionally open the result
    pub fn execute(
        table: &TransitionTable,
        filename: &Path,
        format: RenderFormat,
        view: bool,
        config: &Config,
    ) -> Result<()> {
        let source = crate::export::to_dot(table);
        let renderer = Renderer::new(config.render.dot_binary.clone());
        let target = renderer.render(&source, filename, format)?;

        if view {
            tracing::info!("Opening {:?}", target);
            open_in_viewer(&target)?;
        }

        Ok(())
    }
}

/// Stats command implementation
pub mod stats {
    use super::*;
    use crate::state_machine::{StateGraph, analyze};
    use std::io::Write;

    pub fn execute(table: &TransitionTable, w: &mut impl Write) -> Result<()> {
        let graph = StateGraph::from_table(table);
        let report = analyze(&graph);
        crate::cli::output::output_stats(w, &report)
    }
}
