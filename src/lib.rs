//! State Transition Table Parser
//!
//! Turns a CSV table describing a finite state machine into a structured
//! transition list, JSON, or Graphviz DOT source.
//!
//! This library provides functionality for:
//! - Reading `SOURCE,DEST,TRIGGER` tables, where an empty source repeats
//!   the previous row's source
//! - Classifying triggers as conditions, events, timers or implied events
//! - Exporting the transitions as JSON or DOT, and rendering DOT with Graphviz
//!
//! ```
//! use sttp::parser::RawRow;
//! use sttp::state_machine::TransitionTable;
//!
//! let table = TransitionTable::from_rows(vec![
//!     RawRow::new("A", "B", "_EVT_AB"),
//!     RawRow::new("", "C", "__1"),
//! ])?;
//! assert!(sttp::export::to_dot(&table).contains("A -> C [label=\"(after 1 sec.)\"]"));
//! # Ok::<(), sttp::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod parser;
pub mod render;
pub mod state_machine;

pub use config::Config;
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
///
/// Logs go to stderr so exported documents on stdout stay clean.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
