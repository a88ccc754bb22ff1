//! spottally-core: raffle-claim extraction engine.
//!
//! Turns a free-form raffle-claim comment into a structured
//! [`ParsedComment`] record via a five-pass pipeline over a shrinking
//! working buffer:
//!
//! 1. payer / tab detection (reads the raw body)
//! 2. random-spot extraction (consumes count phrases from the buffer)
//! 3. specific-spot extraction (consumes remaining numeric material)
//! 4. beneficiary resolution (reads the raw body)
//! 5. review-flag evaluation (reads the raw body plus the totals)
//!
//! The engine is a pure, total function: it returns a complete record for
//! any input and has no error type. Corrections to its output live in an
//! external override layer (see the `spottally-storage` crate), never in
//! the engine.
//!
//! # Public API
//!
//! - [`parse_comment()`] -- run the full pipeline
//! - [`ParsedComment`] -- the output record
//! - [`normalize_name()`] -- username canonicalization
//! - [`PARSER_VERSION`] -- tag stored alongside persisted baselines
//!
//! Individual pass entry functions are also re-exported for selective
//! pipeline execution.

/// Parser logic version, persisted with every stored baseline so that
/// future extraction changes do not silently reinterpret old comments.
pub const PARSER_VERSION: &str = "1.2.0";

pub mod lexicon;
pub mod normalize;
pub mod parse;
pub mod pass1_payer;
pub mod pass2_random;
pub mod pass3_specific;
pub mod pass4_beneficiary;
pub mod pass5_review;
pub mod record;
pub mod scan;

// ── Convenience re-exports: key types ────────────────────────────────

pub use record::ParsedComment;
pub use scan::{Buffer, Spanned, Token};

// ── Convenience re-exports: pipeline entry points ────────────────────

pub use normalize::{is_valid_candidate, normalize_name};
pub use parse::parse_comment;
