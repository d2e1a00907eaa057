//! Exporters - text serializations of a transition table

pub mod dot;
pub mod json;

pub use dot::{quote_id, to_dot};
pub use json::{from_json, to_json, write_json};
