//! Transition representation

use crate::Error;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub type StateName = String;

static SECONDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("valid seconds regex"));

/// A non-negative decimal number of seconds, kept as exact text.
///
/// Leading zeros of the integer part and trailing zeros of the fraction are
/// dropped, so `007`, `7.0` and `7` are all `7`. No digits are ever lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seconds(String);

impl Seconds {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Seconds {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if !SECONDS.is_match(text) {
            return Err(Error::InvalidTimerValue(text.to_string()));
        }

        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        let whole = match whole.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        };
        let canonical = match fraction.trim_end_matches('0') {
            "" => whole.to_string(),
            fraction => format!("{}.{}", whole, fraction),
        };
        Ok(Self(canonical))
    }
}

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What causes a transition to fire
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// Free-form text, typically a guard expression such as `if sun.is_up()`
    Condition(String),

    /// A named event
    Event(String),

    /// Fires after the given number of seconds
    Timer(Seconds),

    /// No trigger was given; the event is named after the destination state
    Implied(StateName),
}

impl Trigger {
    /// The human-readable rendering shared by every exporter
    pub fn display_label(&self) -> String {
        self.to_string()
    }

    /// Short name of the variant, used in logs and reports
    pub fn kind(&self) -> &'static str {
        match self {
            Trigger::Condition(_) => "condition",
            Trigger::Event(_) => "event",
            Trigger::Timer(_) => "timer",
            Trigger::Implied(_) => "implied",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Condition(text) => f.write_str(text),
            Trigger::Event(name) => f.write_str(name),
            Trigger::Timer(seconds) => write!(f, "(after {} sec.)", seconds),
            Trigger::Implied(dest) => f.write_str(dest),
        }
    }
}

/// A transition between states
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    source: StateName,
    dest: StateName,
    trigger: Trigger,
}

impl Transition {
    pub fn new(source: impl Into<StateName>, dest: impl Into<StateName>, trigger: Trigger) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
            trigger,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn dest(&self) -> &str {
        &self.dest
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    /// Get display label for the transition
    pub fn display_label(&self) -> String {
        self.trigger.display_label()
    }
}
