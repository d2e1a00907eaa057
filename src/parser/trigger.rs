//! Trigger classification
//!
//! The TRIGGER column packs four kinds of trigger into one text field,
//! told apart by prefix:
//!
//! | raw text         | trigger                      |
//! |------------------|------------------------------|
//! | `__5`, `__0.5`   | [`Trigger::Timer`]           |
//! | `_EVT_GO`        | [`Trigger::Event`] (`EVT_GO`)|
//! | *(empty)*        | [`Trigger::Implied`] by dest |
//! | anything else    | [`Trigger::Condition`]       |
//!
//! Prefixes are checked in that order, so `__` always wins over `_`.

use crate::Result;
use crate::state_machine::{Seconds, Trigger};

pub const TIMER_PREFIX: &str = "__";
pub const EVENT_PREFIX: char = '_';

/// The syntactic form of a raw trigger, before any value is parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriggerSyntax<'a> {
    Timer(&'a str),
    Event(&'a str),
    Implied,
    Condition(&'a str),
}

impl<'a> TriggerSyntax<'a> {
    fn sniff(raw: &'a str) -> Self {
        if let Some(seconds) = raw.strip_prefix(TIMER_PREFIX) {
            TriggerSyntax::Timer(seconds)
        } else if let Some(name) = raw.strip_prefix(EVENT_PREFIX) {
            TriggerSyntax::Event(name)
        } else if raw.is_empty() {
            TriggerSyntax::Implied
        } else {
            TriggerSyntax::Condition(raw)
        }
    }
}

/// Classify a raw trigger field.
///
/// `dest` names the event of an implied trigger. Fails only for a timer
/// whose remainder is not a number of seconds.
pub fn classify(raw: &str, dest: &str) -> Result<Trigger> {
    match TriggerSyntax::sniff(raw) {
        TriggerSyntax::Timer(seconds) => seconds.parse::<Seconds>().map(Trigger::Timer),
        TriggerSyntax::Event(name) => Ok(Trigger::Event(name.to_string())),
        TriggerSyntax::Implied => Ok(Trigger::Implied(dest.to_string())),
        TriggerSyntax::Condition(text) => Ok(Trigger::Condition(text.to_string())),
    }
}
