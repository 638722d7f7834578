//! Defending against their 1NT opening (DONT).

use crate::catalog::ConventionCatalog;
use crate::context::{Relation, Resolver};
use sayc_core::{Call, Hand, Strain, Suit};

/// Whether their 1NT opening is the latest action and partner has not
/// acted.
fn their_one_nt(resolver: &Resolver) -> bool {
    if !resolver.opened_by_opponents() {
        return false;
    }
    let Some((idx, record)) = resolver.opening() else {
        return false;
    };
    if record.call != Call::bid(1, Strain::Notrump) {
        return false;
    }
    let quiet = resolver
        .auction()
        .records
        .iter()
        .skip(idx + 1)
        .all(|r| r.call.is_pass());
    let partner_quiet = resolver
        .last_by(Relation::Partner)
        .map_or(true, |(_, r)| r.call.is_pass());
    quiet && partner_quiet
}

/// DONT over their 1NT: a six-card suit bids naturally at the two
/// level; a 5-5 two-suiter bids the lower suit of its cheapest
/// combination.
pub fn dont(resolver: &Resolver, catalog: &ConventionCatalog, hand: &Hand) -> Option<Call> {
    if !catalog.is_enabled("dont") {
        return None;
    }
    if !their_one_nt(resolver) {
        return None;
    }
    if hand.hcp() < 6 {
        return None;
    }

    // Six-card suit: bid it.
    for suit in Suit::DESCENDING {
        if hand.length(suit) >= 6 {
            return Some(Call::bid(2, Strain::from_suit(suit)));
        }
    }

    // 5-5: bid the lower suit, cheapest pair first.
    let long: Vec<Suit> = Suit::ALL
        .iter()
        .copied()
        .filter(|&s| hand.length(s) >= 5)
        .collect();
    if long.len() >= 2 {
        return Some(Call::bid(2, Strain::from_suit(long[0])));
    }
    None
}
