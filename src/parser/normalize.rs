//! Row normalization
//!
//! Turns raw rows into transitions. An empty SOURCE repeats the previous
//! row's resolved source, so a table can list all transitions out of one
//! state without repeating its name.

use super::{RawRow, classify};
use crate::state_machine::Transition;
use crate::{Error, Result};

/// State carried from one row to the next
#[derive(Debug, Default)]
struct Carry {
    last_source: Option<String>,
    transitions: Vec<Transition>,
}

/// Normalize rows into transitions, in input order.
///
/// Row numbers in errors are 1-based positions among the given rows.
pub fn normalize_rows(rows: impl IntoIterator<Item = RawRow>) -> Result<Vec<Transition>> {
    let carry = rows
        .into_iter()
        .enumerate()
        .try_fold(Carry::default(), |carry, (idx, row)| {
            normalize_row(carry, idx + 1, row)
        })?;
    Ok(carry.transitions)
}

fn normalize_row(mut carry: Carry, row_number: usize, row: RawRow) -> Result<Carry> {
    let RawRow {
        source,
        dest,
        trigger,
    } = row;

    let source = if source.is_empty() {
        carry
            .last_source
            .clone()
            .ok_or_else(|| Error::malformed_row(row_number, "Undefined previous source state."))?
    } else {
        carry.last_source = Some(source.clone());
        source
    };

    if dest.is_empty() {
        return Err(Error::malformed_row(row_number, "Undefined destination state."));
    }

    let trigger = classify(&trigger, &dest)?;
    tracing::trace!(
        "Row {}: {} -> {} ({})",
        row_number,
        source,
        dest,
        trigger.kind()
    );

    carry.transitions.push(Transition::new(source, dest, trigger));
    Ok(carry)
}
