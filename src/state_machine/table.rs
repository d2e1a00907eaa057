//! The transition model: an ordered, read-only list of transitions

use crate::parser::{RawRow, normalize_rows};
use crate::state_machine::Transition;
use crate::Result;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// All transitions of one state transition table, in input order.
///
/// Built once from the table rows and never modified afterwards. Exporters
/// only ever borrow it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionTable {
    transitions: Vec<Transition>,
}

impl TransitionTable {
    pub fn new(transitions: Vec<Transition>) -> Self {
        Self { transitions }
    }

    /// Normalize raw rows into a table
    pub fn from_rows(rows: impl IntoIterator<Item = RawRow>) -> Result<Self> {
        let transitions = normalize_rows(rows)?;
        tracing::debug!("Built transition table with {} transitions", transitions.len());
        Ok(Self::new(transitions))
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Distinct state names in first-seen order (source before dest per row)
    pub fn states(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.transitions
            .iter()
            .flat_map(|t| [t.source(), t.dest()])
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Nested `source -> {dest -> display trigger}` view.
    ///
    /// Keys keep first-seen order. A repeated (source, dest) pair keeps the
    /// position of its first occurrence and the trigger of its last.
    pub fn dictify(&self) -> Map<String, Value> {
        let mut dict = Map::new();
        for t in &self.transitions {
            let dests = dict
                .entry(t.source().to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(dests) = dests {
                dests.insert(t.dest().to_string(), Value::String(t.display_label()));
            }
        }
        dict
    }
}

impl<'a> IntoIterator for &'a TransitionTable {
    type Item = &'a Transition;
    type IntoIter = std::slice::Iter<'a, Transition>;

    fn into_iter(self) -> Self::IntoIter {
        self.transitions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_machine::Trigger;

    fn sample() -> TransitionTable {
        TransitionTable::new(vec![
            Transition::new("A", "B", Trigger::Event("EVT_AB".into())),
            Transition::new("A", "C", Trigger::Timer("1".parse().unwrap())),
            Transition::new("B", "C", Trigger::Event("EVT_C".into())),
            Transition::new("C", "A", Trigger::Implied("A".into())),
        ])
    }

    #[test]
    fn test_states_first_seen_order() {
        assert_eq!(sample().states(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_states_of_empty_table() {
        let table = TransitionTable::default();
        assert!(table.is_empty());
        assert!(table.states().is_empty());
    }

    #[test]
    fn test_from_rows_keeps_order() {
        let table = TransitionTable::from_rows(vec![
            RawRow::new("X", "Y", ""),
            RawRow::new("A", "B", "_go"),
            RawRow::new("X", "Y", ""),
        ])
        .unwrap();

        let pairs: Vec<_> = table.iter().map(|t| (t.source(), t.dest())).collect();
        assert_eq!(pairs, vec![("X", "Y"), ("A", "B"), ("X", "Y")]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_dictify() {
        let dict = sample().dictify();
        let keys: Vec<_> = dict.keys().cloned().collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
        assert_eq!(dict["A"]["B"], "EVT_AB");
        assert_eq!(dict["A"]["C"], "(after 1 sec.)");
        assert_eq!(dict["C"]["A"], "A");
    }

    #[test]
    fn test_dictify_last_trigger_wins() {
        let table = TransitionTable::new(vec![
            Transition::new("A", "B", Trigger::Event("first".into())),
            Transition::new("A", "B", Trigger::Event("second".into())),
        ]);
        assert_eq!(table.dictify()["A"]["B"], "second");
        assert_eq!(table.len(), 2);
    }
}
