//! Michaels cue bids and the unusual notrump.

use crate::catalog::ConventionCatalog;
use crate::context::{Relation, Resolver};
use sayc_core::{Call, Hand, Strain, Suit};

/// Their one-of-a-suit opening, when it is still the only action in
/// the auction from either side.
fn their_untouched_opening(resolver: &Resolver) -> Option<(usize, Suit)> {
    if !resolver.opened_by_opponents() {
        return None;
    }
    let (idx, record) = resolver.opening()?;
    if record.call.level() != Some(1) {
        return None;
    }
    let suit = record.call.suit()?;
    // Nothing but passes since the opening.
    let quiet = resolver
        .auction()
        .records
        .iter()
        .skip(idx + 1)
        .all(|r| r.call.is_pass());
    // Partner has not acted.
    let partner_quiet = resolver
        .last_by(Relation::Partner)
        .map_or(true, |(_, r)| r.call.is_pass());
    if quiet && partner_quiet {
        Some((idx, suit))
    } else {
        None
    }
}

/// Michaels: a two-level cue of the opener's suit. Over a minor it
/// shows both majors; over a major, the other major and an unnamed
/// five-card minor.
pub fn michaels(resolver: &Resolver, catalog: &ConventionCatalog, hand: &Hand) -> Option<Call> {
    if !catalog.is_enabled("michaels") {
        return None;
    }
    let (_, opener_suit) = their_untouched_opening(resolver)?;

    let min_hcp = match catalog.str_param("michaels", "style", "wide").as_str() {
        "sound" => 10,
        _ => 8,
    };
    if hand.hcp() < min_hcp {
        return None;
    }

    let shape_fits = if opener_suit.is_minor() {
        hand.length(Suit::Hearts) >= 5 && hand.length(Suit::Spades) >= 5
    } else {
        let other_major = opener_suit.sibling();
        hand.length(other_major) >= 5
            && (hand.length(Suit::Clubs) >= 5 || hand.length(Suit::Diamonds) >= 5)
    };
    if !shape_fits {
        return None;
    }
    Some(Call::bid(2, Strain::from_suit(opener_suit)))
}

/// Unusual 2NT: jump to 2NT over their one-level opening showing 5-5
/// in the two lowest unbid suits.
pub fn unusual_nt(resolver: &Resolver, catalog: &ConventionCatalog, hand: &Hand) -> Option<Call> {
    if !catalog.is_enabled("unusual_nt") {
        return None;
    }
    let (idx, opener_suit) = their_untouched_opening(resolver)?;

    if opener_suit.is_minor() && !catalog.bool_param("unusual_nt", "over_minors", false) {
        return None;
    }
    if catalog.bool_param("unusual_nt", "direct_only", true) {
        // Direct seat only: the opening must be the latest record.
        if idx + 1 != resolver.len() {
            return None;
        }
    }

    let mut unbid: Vec<Suit> = Suit::ALL
        .iter()
        .copied()
        .filter(|&s| s != opener_suit)
        .collect();
    unbid.truncate(2); // ALL is ascending, so these are the two lowest
    if unbid.iter().any(|&s| hand.length(s) < 5) {
        return None;
    }
    if hand.hcp() < 6 {
        return None;
    }
    Some(Call::bid(2, Strain::Notrump))
}
