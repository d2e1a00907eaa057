//! Output formatting module
//!
//! Writes exports and reports of a transition table to any writer.

use crate::state_machine::{AnalysisReport, TransitionTable};
use crate::{Result, export};
use serde_json::Value;
use std::io::Write;

/// Output the JSON export, followed by a newline
pub fn output_json(w: &mut impl Write, table: &TransitionTable) -> Result<()> {
    let json = export::to_json(table)?;
    writeln!(w, "{}", json)?;
    Ok(())
}

/// Output the DOT source
pub fn output_dot(w: &mut impl Write, table: &TransitionTable) -> Result<()> {
    let dot = export::to_dot(table);
    w.write_all(dot.as_bytes())?;
    Ok(())
}

/// Output the nested source -> dest -> trigger mapping as JSON
pub fn output_dict(w: &mut impl Write, table: &TransitionTable) -> Result<()> {
    let dict = Value::Object(table.dictify());
    serde_json::to_writer_pretty(&mut *w, &dict)?;
    writeln!(w)?; // Add trailing newline
    Ok(())
}

/// Output a shape report as a text table
pub fn output_stats(w: &mut impl Write, report: &AnalysisReport<'_>) -> Result<()> {
    writeln!(w, "State Machine Summary")?;
    writeln!(w, "{}", "=".repeat(40))?;
    writeln!(w, "  {:<20} {}", "Shape:", report.shape.display_name())?;
    writeln!(w, "  {:<20} {}", "States:", report.stats.total_states)?;
    writeln!(w, "  {:<20} {}", "Transitions:", report.stats.total_transitions)?;
    writeln!(w, "  {:<20} {:.2}", "Avg. out-degree:", report.branching_factor)?;
    writeln!(w, "  {:<20} {}", "Cycles:", if report.has_cycles { "yes" } else { "no" })?;
    writeln!(w)?;

    writeln!(w, "Initial states ({}):", report.stats.initial_states)?;
    for state in &report.initial_states {
        writeln!(w, "  - {}", state)?;
    }
    writeln!(w, "Terminal states ({}):", report.stats.terminal_states)?;
    for state in &report.terminal_states {
        writeln!(w, "  - {}", state)?;
    }
    writeln!(w)?;

    writeln!(w, "Transitions by state:")?;
    for (state, transitions) in &report.transitions_by_state {
        writeln!(w, "  {}:", state)?;
        for t in transitions {
            writeln!(w, "    -> {} [{}]", t.dest(), t.display_label())?;
        }
    }

    Ok(())
}
