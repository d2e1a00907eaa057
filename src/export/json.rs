//! JSON export
//!
//! ```json
//! {
//!     "transitions": [
//!         {
//!             "trigger": "EVT_AB",
//!             "source": "A",
//!             "dest": "B"
//!         }
//!     ]
//! }
//! ```
//!
//! Triggers are written as their display string, so the variant is lost:
//! reading an export back yields plain conditions.

use crate::state_machine::{Transition, TransitionTable, Trigger};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use std::io;

const INDENT: &[u8] = b"    ";

#[derive(Debug, Serialize, Deserialize)]
struct JsonDocument {
    transitions: Vec<JsonTransition>,
}

// Field order is the order keys appear in the output
#[derive(Debug, Serialize, Deserialize)]
struct JsonTransition {
    trigger: String,
    source: String,
    dest: String,
}

impl From<&Transition> for JsonTransition {
    fn from(t: &Transition) -> Self {
        Self {
            trigger: t.display_label(),
            source: t.source().to_string(),
            dest: t.dest().to_string(),
        }
    }
}

/// Write the JSON export of `table` to `w`, without a trailing newline
pub fn write_json(w: &mut impl io::Write, table: &TransitionTable) -> Result<()> {
    let document = JsonDocument {
        transitions: table.iter().map(JsonTransition::from).collect(),
    };
    let mut serializer =
        serde_json::Serializer::with_formatter(w, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    Ok(())
}

/// Render `table` as a JSON document
pub fn to_json(table: &TransitionTable) -> Result<String> {
    let mut buf = Vec::new();
    write_json(&mut buf, table)?;
    let json = String::from_utf8(buf).map_err(anyhow::Error::from)?;
    Ok(json)
}

/// Read a JSON export back into a table.
///
/// Every trigger becomes a [`Trigger::Condition`] holding its display
/// string, so exporting the result again reproduces `text` byte for byte.
pub fn from_json(text: &str) -> Result<TransitionTable> {
    let document: JsonDocument = serde_json::from_str(text)?;
    let transitions = document
        .transitions
        .into_iter()
        .enumerate()
        .map(|(idx, t)| {
            if t.source.is_empty() || t.dest.is_empty() {
                return Err(Error::malformed_row(
                    idx + 1,
                    "Transition with an empty source or dest state.",
                ));
            }
            Ok(Transition::new(t.source, t.dest, Trigger::Condition(t.trigger)))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(TransitionTable::new(transitions))
}
