use serde::{Deserialize, Serialize};

/// The structured claim facts extracted from one raffle comment.
///
/// Produced exactly once per `(body, author, comment_id)` triple and never
/// mutated afterwards; downstream display corrections are layered on top
/// through the override store, leaving this baseline intact.
///
/// Serialized in camelCase to match the interchange shape consumed by the
/// persistence and override collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedComment {
    /// Opaque external identifier, passed through unchanged.
    pub comment_id: String,
    /// Normalized username of the comment's writer.
    pub author: String,
    /// Original, unmodified comment text, retained for audit/display.
    pub raw: String,
    /// Derived total. Invariant: `spots == specific_spots.len() + random_spots`.
    pub spots: u32,
    /// Explicitly numbered spot claims: distinct positive integers, ascending.
    pub specific_spots: Vec<u32>,
    /// Count of unspecified ("random") spot claims.
    pub random_spots: u32,
    /// Normalized username the spots are claimed on behalf of.
    pub beneficiary: String,
    /// Normalized username financially responsible for the claim.
    pub payer: String,
    /// Claim is owed to the payer rather than self-paid.
    pub is_tab: bool,
    /// Extraction is not trustworthy; a human must confirm or correct it.
    pub needs_review: bool,
}
