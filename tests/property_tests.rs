//! Property-based tests for trigger classification and row normalization.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated tables.

use proptest::prelude::*;
use sttp::Error;
use sttp::export::{from_json, to_dot, to_json};
use sttp::parser::{RawRow, classify, normalize_rows};
use sttp::state_machine::{TransitionTable, Trigger};

prop_compose! {
    fn state_name()(name in "[A-Za-z][A-Za-z0-9_ ]{0,8}") -> String {
        name
    }
}

prop_compose! {
    fn raw_trigger()(variant in 0..5u8, text in "[a-z().= ]{1,10}", secs in 0u32..10_000) -> String {
        match variant {
            0 => String::new(),
            1 => format!("_{}", text),
            2 => format!("__{}", secs),
            3 => format!("__{}.5", secs),
            _ => text,
        }
    }
}

prop_compose! {
    fn raw_row()(source in prop::option::weighted(0.7, state_name()), dest in state_name(), trigger in raw_trigger()) -> RawRow {
        RawRow::new(source.unwrap_or_default(), dest, trigger)
    }
}

prop_compose! {
    fn valid_rows()(first in state_name(), rest in prop::collection::vec(raw_row(), 0..20)) -> Vec<RawRow> {
        let mut rows = rest;
        if let Some(row) = rows.first_mut() {
            if row.source.is_empty() {
                row.source = first;
            }
        }
        rows
    }
}

proptest! {
    #[test]
    fn classification_is_total(raw in ".*", dest in state_name()) {
        match classify(&raw, &dest) {
            Ok(_) => {}
            Err(Error::InvalidTimerValue(_)) => prop_assert!(raw.starts_with("__")),
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn double_underscore_is_never_an_event(raw in "__.*", dest in state_name()) {
        if let Ok(trigger) = classify(&raw, &dest) {
            prop_assert!(matches!(trigger, Trigger::Timer(_)), "got {:?}", trigger);
        }
    }

    #[test]
    fn whole_seconds_display_without_decimals(secs in 0u32..1_000_000) {
        let trigger = classify(&format!("__{}", secs), "X").unwrap();
        prop_assert_eq!(trigger.display_label(), format!("(after {} sec.)", secs));
    }

    #[test]
    fn canonical_seconds_display_verbatim(seconds in "(0|[1-9][0-9]{0,60})(\\.[0-9]{0,40}[1-9])?") {
        let trigger = classify(&format!("__{}", seconds), "X").unwrap();
        prop_assert_eq!(trigger.display_label(), format!("(after {} sec.)", seconds));
    }

    #[test]
    fn single_underscore_strips_one_char(name in "[A-Za-z][A-Za-z0-9_]{0,10}") {
        let trigger = classify(&format!("_{}", name), "X").unwrap();
        prop_assert_eq!(trigger, Trigger::Event(name));
    }

    #[test]
    fn empty_source_repeats_previous(rows in valid_rows()) {
        let transitions = normalize_rows(rows.clone()).unwrap();
        prop_assert_eq!(transitions.len(), rows.len());

        let mut last = None;
        for (row, t) in rows.iter().zip(&transitions) {
            if !row.source.is_empty() {
                last = Some(row.source.clone());
            }
            prop_assert_eq!(Some(t.source().to_string()), last.clone());
            prop_assert_eq!(t.dest(), row.dest.as_str());
        }
    }

    #[test]
    fn exporters_preserve_order(rows in valid_rows()) {
        let table = TransitionTable::from_rows(rows).unwrap();

        let json: serde_json::Value = serde_json::from_str(&to_json(&table).unwrap()).unwrap();
        let exported = json["transitions"].as_array().unwrap();
        prop_assert_eq!(exported.len(), table.len());
        for (t, e) in table.iter().zip(exported) {
            prop_assert_eq!(e["source"].as_str().unwrap(), t.source());
            prop_assert_eq!(e["dest"].as_str().unwrap(), t.dest());
            prop_assert_eq!(e["trigger"].as_str().unwrap(), t.display_label());
        }

        let dot = to_dot(&table);
        let edge_count = dot.lines().filter(|l| l.contains(" -> ")).count();
        prop_assert_eq!(edge_count, table.len());
    }

    #[test]
    fn json_reexport_is_idempotent(rows in valid_rows()) {
        let table = TransitionTable::from_rows(rows).unwrap();
        let first = to_json(&table).unwrap();
        let second = to_json(&from_json(&first).unwrap()).unwrap();
        prop_assert_eq!(first, second);
    }
}
