//! spottally-reconcile: display/tally values over baseline + override.
//!
//! The parser baseline is immutable; human corrections live in versioned
//! override records. This crate computes what downstream consumers
//! actually show and sum: "override value if present, else baseline
//! value", with skipped comments dropped from tallies.

mod effective;
mod tally;

pub use effective::{effective, EffectiveClaim};
pub use tally::{tally, TallyEntry};
