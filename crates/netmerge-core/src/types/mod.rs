//! Core types for net group consolidation.

mod key;
mod record;

pub use key::{ConnectionKey, SinkPattern, UNKNOWN_SINKS};
pub use record::GroupRecord;
