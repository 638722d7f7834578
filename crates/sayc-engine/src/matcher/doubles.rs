//! Conventional and competitive doubles.

use crate::catalog::ConventionCatalog;
use crate::context::{Relation, Resolver};
use sayc_core::{Call, Hand, Suit};

/// Their suited overcall of partner's suited opening: the overcall
/// call, when it is the opponents' latest action and we have not yet
/// acted over the opening.
fn overcall_of_partners_opening(resolver: &Resolver) -> Option<(Suit, Call)> {
    let opening_suit = resolver.partner_opening_suit()?;
    let (idx, overcall) = resolver.their_last_action()?;
    let overcall_suit = overcall.suit()?;
    let (open_idx, _) = resolver.opening()?;
    if idx <= open_idx || resolver.i_acted_since(open_idx) {
        return None;
    }
    if overcall_suit == opening_suit {
        return None;
    }
    Some((opening_suit, overcall))
}

/// Support double: partner opened a suit, the opponents overcalled
/// below the configured level, and we hold support. Shows the fit
/// without raising the level.
pub fn support_double(
    resolver: &Resolver,
    catalog: &ConventionCatalog,
    hand: &Hand,
) -> Option<Call> {
    if !catalog.is_enabled("support") {
        return None;
    }
    let (opening_suit, overcall) = overcall_of_partners_opening(resolver)?;
    let thru = catalog.level_param("support", "thru", 2);
    if overcall.level()? > thru {
        return None;
    }
    if hand.length(opening_suit) < 3 || hand.hcp() < 6 {
        return None;
    }
    Some(Call::Double)
}

/// Negative double: partner's suit opening was overcalled in a suit;
/// the double shows four or more cards in an unbid major.
pub fn negative_double(
    resolver: &Resolver,
    catalog: &ConventionCatalog,
    hand: &Hand,
) -> Option<Call> {
    if !catalog.is_enabled("negative") {
        return None;
    }
    let (_, overcall) = overcall_of_partners_opening(resolver)?;
    let thru = catalog.level_param("negative", "thru", 2);
    if overcall.level()? > thru {
        return None;
    }
    if hand.hcp() < 6 {
        return None;
    }
    let has_major = resolver
        .unbid_majors()
        .iter()
        .any(|&m| hand.length(m) >= 4);
    if !has_major {
        return None;
    }
    Some(Call::Double)
}

/// Responsive double: partner acted (double or overcall), the
/// opponents raised their own suit, and we hold both unbid suits.
pub fn responsive_double(
    resolver: &Resolver,
    catalog: &ConventionCatalog,
    hand: &Hand,
) -> Option<Call> {
    if !catalog.is_enabled("responsive") {
        return None;
    }
    if !resolver.opened_by_opponents() {
        return None;
    }
    let opening_suit = resolver.opening_call()?.suit()?;
    let partner_acted = resolver
        .last_by(Relation::Partner)
        .map_or(false, |(_, r)| !r.call.is_pass());
    if !partner_acted {
        return None;
    }
    // Their latest action must be a raise of the opened suit.
    let (_, raise) = resolver.their_last_action()?;
    if raise.suit() != Some(opening_suit) || raise.level() == Some(1) {
        return None;
    }
    if raise.level()? > catalog.level_param("responsive", "thru", 3) {
        return None;
    }
    if hand.hcp() < 6 {
        return None;
    }
    let unbid = resolver.unbid_suits();
    let both = unbid.iter().filter(|&&s| hand.length(s) >= 4).count() >= 2;
    if !both {
        return None;
    }
    Some(Call::Double)
}

/// Takeout double of their opening: opening values, shortness in
/// their suit, and support for the unbid suits. A very strong hand
/// doubles regardless of shape.
pub fn takeout_double(
    resolver: &Resolver,
    catalog: &ConventionCatalog,
    hand: &Hand,
) -> Option<Call> {
    if !catalog.is_enabled("takeout") {
        return None;
    }
    if !resolver.opened_by_opponents() {
        return None;
    }
    let partner_acted = resolver
        .last_by(Relation::Partner)
        .map_or(false, |(_, r)| !r.call.is_pass());
    if partner_acted {
        return None;
    }
    let (_, action) = resolver.their_last_action()?;
    let suit = action.suit()?;

    if hand.hcp() >= 17 {
        return Some(Call::Double);
    }
    let min_hcp = if catalog.bool_param("takeout", "relaxed", false) {
        10
    } else {
        11
    };
    if hand.hcp() < min_hcp {
        return None;
    }
    if hand.length(suit) > 2 {
        return None;
    }
    let unbid = resolver.unbid_suits();
    let supported = unbid.iter().filter(|&&s| hand.length(s) >= 3).count();
    if supported < 2 {
        return None;
    }
    Some(Call::Double)
}

/// Reopening (balancing) double: their contract followed by two
/// passes, shortness in their suit, and something in the other suits.
pub fn reopening_double(
    resolver: &Resolver,
    catalog: &ConventionCatalog,
    hand: &Hand,
) -> Option<Call> {
    if !catalog.is_enabled("reopening") {
        return None;
    }
    if !resolver.is_balancing_seat() {
        return None;
    }
    let (_, action) = resolver.their_last_action()?;
    let suit = action.suit()?;
    if hand.hcp() < 8 || hand.length(suit) > 2 {
        return None;
    }
    let unbid = resolver.unbid_suits();
    let supported = unbid.iter().filter(|&&s| hand.length(s) >= 3).count();
    if supported < 2 {
        return None;
    }
    Some(Call::Double)
}
