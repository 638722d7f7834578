//! Convention recognizers.
//!
//! Pure predicates over the resolved auction (and, where needed, the
//! hand). Each either classifies a call already in the log or proposes
//! the conventional call the hand qualifies for. Nothing here mutates
//! state or consults the legality guard; the decision policy owns
//! ordering and legality.

pub mod ace_asking;
pub mod doubles;
pub mod nt_defense;
pub mod two_suited;
