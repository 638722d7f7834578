//! First responses to partner's opening, uncontested auctions only.
//! Contested auctions route through the competitive rules instead.

use super::{BidRule, DecisionContext};
use sayc_core::{Call, Hand, Strain, Suit};

/// Partner's opening, when the opponents have stayed silent and we
/// have not yet acted over it.
fn partner_opening(ctx: &DecisionContext) -> Option<Call> {
    let r = &ctx.resolver;
    if !r.opened_by_partner() || !r.opponents_silent() {
        return None;
    }
    let (idx, record) = r.opening()?;
    if r.i_acted_since(idx) {
        return None;
    }
    Some(record.call)
}

fn opened_major(ctx: &DecisionContext) -> Option<Suit> {
    let opening = partner_opening(ctx)?;
    if opening.level() != Some(1) {
        return None;
    }
    opening.suit().filter(|s| s.is_major())
}

/// Responses to the strong artificial 2C.
pub struct TwoClubResponse;

impl BidRule for TwoClubResponse {
    fn name(&self) -> &'static str {
        "2C response"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if partner_opening(ctx)? != Call::bid(2, Strain::Clubs) {
            return None;
        }
        let hand = ctx.hand;
        if hand.hcp() >= 8 {
            // Positive: a good five-card suit, else 2NT balanced.
            for suit in Suit::DESCENDING {
                if hand.length(suit) >= 5 && hand.good_suit(suit) {
                    let level = if suit.is_major() { 2 } else { 3 };
                    return Some(Call::bid(level, Strain::from_suit(suit)));
                }
            }
            if hand.is_balanced() {
                return Some(Call::bid(2, Strain::Notrump));
            }
        }
        // Waiting.
        Some(Call::bid(2, Strain::Diamonds))
    }
}

/// Placing the contract after 2C - 2D - 2NT: show a five-card major,
/// else raise to game.
pub struct TwoClubNotrumpPlacement;

impl BidRule for TwoClubNotrumpPlacement {
    fn name(&self) -> &'static str {
        "2NT placement"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let r = &ctx.resolver;
        if !r.opened_by_partner() || !r.opponents_silent() {
            return None;
        }
        if r.opening_call()? != Call::bid(2, Strain::Clubs) {
            return None;
        }
        let (_, mine) = r.last_by(crate::context::Relation::Me)?;
        if mine.call != Call::bid(2, Strain::Diamonds) {
            return None;
        }
        if r.partner_last_call()? != Call::bid(2, Strain::Notrump) {
            return None;
        }
        let hand = ctx.hand;
        for major in [Suit::Spades, Suit::Hearts] {
            if hand.length(major) >= 5 {
                return Some(Call::bid(3, Strain::from_suit(major)));
            }
        }
        Some(Call::bid(3, Strain::Notrump))
    }
}

/// Responses to a weak two.
pub struct WeakTwoResponse;

impl BidRule for WeakTwoResponse {
    fn name(&self) -> &'static str {
        "weak two response"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let opening = partner_opening(ctx)?;
        if opening.level() != Some(2) {
            return None;
        }
        let suit = opening.suit()?;
        if suit == Suit::Clubs {
            return None;
        }
        let hand = ctx.hand;
        let support = hand.length(suit);

        if support >= 3 && hand.hcp() >= 14 && suit.is_major() {
            return Some(Call::bid(4, Strain::from_suit(suit)));
        }
        if support >= 3 && hand.hcp() <= 13 {
            // Raise the preempt, constructive or obstructive.
            return Some(Call::bid(3, Strain::from_suit(suit)));
        }
        if hand.hcp() >= 15 {
            // Feature ask.
            return Some(Call::bid(2, Strain::Notrump));
        }
        // New suit is forcing; needs a real suit and real values.
        for candidate in Suit::DESCENDING {
            if candidate == suit {
                continue;
            }
            if hand.length(candidate) >= 5 && hand.good_suit(candidate) && hand.hcp() >= 10 {
                let level = if candidate > suit { 2 } else { 3 };
                return Some(Call::bid(level, Strain::from_suit(candidate)));
            }
        }
        None
    }
}

/// The ladder over partner's 1NT: transfers, Stayman, and raises.
pub struct OneNotrumpResponse;

impl BidRule for OneNotrumpResponse {
    fn name(&self) -> &'static str {
        "1NT response"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if partner_opening(ctx)? != Call::bid(1, Strain::Notrump) {
            return None;
        }
        let hand = ctx.hand;
        let catalog = ctx.catalog;
        let spades = hand.length(Suit::Spades);
        let hearts = hand.length(Suit::Hearts);

        // Texas: six-card major with game values.
        if catalog.is_enabled("texas_transfers") && (10..=15).contains(&hand.hcp()) {
            if hearts >= 6 {
                return Some(Call::bid(4, Strain::Diamonds));
            }
            if spades >= 6 {
                return Some(Call::bid(4, Strain::Hearts));
            }
        }
        // Stayman with a four-card major.
        if catalog.is_enabled("stayman") && hand.hcp() >= 8 && (spades == 4 || hearts == 4) {
            return Some(Call::bid(2, Strain::Clubs));
        }
        // Jacoby transfers, any strength.
        if catalog.is_enabled("jacoby_transfers") {
            if hearts >= 5 && hearts >= spades {
                return Some(Call::bid(2, Strain::Diamonds));
            }
            if spades >= 5 {
                return Some(Call::bid(2, Strain::Hearts));
            }
        }
        // Relay to clubs with a weak six-card minor.
        if catalog.is_enabled("minor_transfer") && hand.hcp() <= 7 {
            if hand.length(Suit::Clubs) >= 6 || hand.length(Suit::Diamonds) >= 6 {
                return Some(Call::bid(2, Strain::Spades));
            }
        }
        if (8..=9).contains(&hand.hcp()) {
            return Some(Call::bid(2, Strain::Notrump));
        }
        if (10..=15).contains(&hand.hcp()) {
            return Some(Call::bid(3, Strain::Notrump));
        }
        None
    }
}

/// Passed-hand 2C over partner's third or fourth seat major opening.
pub struct Drury;

impl BidRule for Drury {
    fn name(&self) -> &'static str {
        "drury"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if !ctx.catalog.is_enabled("drury") || !ctx.resolver.i_am_passed_hand() {
            return None;
        }
        let major = opened_major(ctx)?;
        let hand = ctx.hand;
        if hand.length(major) >= 3 && (10..=12).contains(&hand.support_points(major)) {
            return Some(Call::bid(2, Strain::Clubs));
        }
        None
    }
}

/// Jacoby 2NT: game-forcing major raise.
pub struct JacobyTwoNotrump;

impl BidRule for JacobyTwoNotrump {
    fn name(&self) -> &'static str {
        "jacoby 2NT"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if !ctx.catalog.is_enabled("jacoby_2nt") || ctx.resolver.i_am_passed_hand() {
            return None;
        }
        let major = opened_major(ctx)?;
        if ctx.hand.length(major) >= 4 && ctx.hand.hcp() >= 13 {
            return Some(Call::bid(2, Strain::Notrump));
        }
        None
    }
}

/// Splinter: double jump in a short suit agreeing partner's major.
pub struct Splinter;

impl BidRule for Splinter {
    fn name(&self) -> &'static str {
        "splinter"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if !ctx.catalog.is_enabled("splinters") {
            return None;
        }
        let major = opened_major(ctx)?;
        let hand = ctx.hand;
        if hand.length(major) < 4 || !(10..=14).contains(&hand.hcp()) {
            return None;
        }
        for suit in Suit::DESCENDING {
            if suit == major || hand.length(suit) > 1 {
                continue;
            }
            let level = if suit > major { 3 } else { 4 };
            return Some(Call::bid(level, Strain::from_suit(suit)));
        }
        None
    }
}

/// Bergen raises, off by default.
pub struct BergenRaise;

impl BidRule for BergenRaise {
    fn name(&self) -> &'static str {
        "bergen raise"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if !ctx.catalog.is_enabled("bergen") {
            return None;
        }
        let major = opened_major(ctx)?;
        let hand = ctx.hand;
        if hand.length(major) < 4 {
            return None;
        }
        match hand.support_points(major) {
            7..=9 => Some(Call::bid(3, Strain::Clubs)),
            10..=12 => Some(Call::bid(3, Strain::Diamonds)),
            _ => None,
        }
    }
}

/// Limit and simple raises of partner's major.
pub struct MajorRaise;

impl BidRule for MajorRaise {
    fn name(&self) -> &'static str {
        "major raise"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let major = opened_major(ctx)?;
        let hand = ctx.hand;
        if hand.length(major) < 3 {
            return None;
        }
        let points = hand.support_points(major);
        if (10..=12).contains(&points) {
            return Some(Call::bid(3, Strain::from_suit(major)));
        }
        if (6..=9).contains(&points) {
            return Some(Call::bid(2, Strain::from_suit(major)));
        }
        None
    }
}

/// Strong jump shift.
pub struct JumpShift;

impl BidRule for JumpShift {
    fn name(&self) -> &'static str {
        "jump shift"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let opening = partner_opening(ctx)?;
        if opening.level() != Some(1) {
            return None;
        }
        let opened = opening.suit()?;
        let hand = ctx.hand;
        if hand.hcp() < 19 {
            return None;
        }
        for suit in Suit::DESCENDING {
            if suit == opened {
                continue;
            }
            if hand.length(suit) >= 5 && hand.good_suit(suit) {
                let level = if suit > opened { 2 } else { 3 };
                return Some(Call::bid(level, Strain::from_suit(suit)));
            }
        }
        None
    }
}

/// A new suit at the one level (6+) or the two level (10+).
pub struct NewSuit;

fn one_level_suit(hand: &Hand, opened: Suit) -> Option<Suit> {
    // Four-card suits biddable at the one level, longest first,
    // up the line on ties.
    let mut best: Option<Suit> = None;
    for suit in Suit::ALL {
        if suit <= opened || hand.length(suit) < 4 {
            continue;
        }
        match best {
            Some(b) if hand.length(b) >= hand.length(suit) => {}
            _ => best = Some(suit),
        }
    }
    best
}

impl BidRule for NewSuit {
    fn name(&self) -> &'static str {
        "new suit"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let opening = partner_opening(ctx)?;
        if opening.level() != Some(1) {
            return None;
        }
        let opened = opening.suit()?;
        let hand = ctx.hand;
        if hand.hcp() >= 6 {
            if let Some(suit) = one_level_suit(hand, opened) {
                return Some(Call::bid(1, Strain::from_suit(suit)));
            }
        }
        if hand.hcp() >= 10 {
            // Two over one: a real suit below the opening.
            for suit in Suit::DESCENDING {
                if suit >= opened {
                    continue;
                }
                if hand.length(suit) >= 5 {
                    return Some(Call::bid(2, Strain::from_suit(suit)));
                }
            }
        }
        None
    }
}

/// Raising partner's minor.
pub struct MinorRaise;

impl BidRule for MinorRaise {
    fn name(&self) -> &'static str {
        "minor raise"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let opening = partner_opening(ctx)?;
        if opening.level() != Some(1) {
            return None;
        }
        let minor = opening.suit().filter(|s| s.is_minor())?;
        let hand = ctx.hand;
        if hand.length(minor) < 4 {
            return None;
        }
        let points = hand.support_points(minor);
        if (10..=12).contains(&points) {
            return Some(Call::bid(3, Strain::from_suit(minor)));
        }
        if (6..=9).contains(&points) {
            return Some(Call::bid(2, Strain::from_suit(minor)));
        }
        None
    }
}

/// Notrump responses to a one-of-a-suit opening.
pub struct NotrumpLadder;

impl BidRule for NotrumpLadder {
    fn name(&self) -> &'static str {
        "notrump response"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let opening = partner_opening(ctx)?;
        if opening.level() != Some(1) || opening.strain() == Some(Strain::Notrump) {
            return None;
        }
        let hand = ctx.hand;
        if (13..=15).contains(&hand.hcp()) && hand.is_balanced() {
            return Some(Call::bid(2, Strain::Notrump));
        }
        if (16..=18).contains(&hand.hcp()) && hand.is_balanced() {
            return Some(Call::bid(3, Strain::Notrump));
        }
        if (6..=10).contains(&hand.hcp()) {
            return Some(Call::bid(1, Strain::Notrump));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ConventionCatalog;
    use sayc_core::{Auction, Seat};

    fn propose(rule: &dyn BidRule, auction: &Auction, hand: &str) -> Option<Call> {
        let catalog = ConventionCatalog::default();
        let hand = Hand::parse(hand);
        let ctx = DecisionContext::new(auction, &catalog, &hand);
        rule.propose(&ctx)
    }

    #[test]
    fn test_new_suit_at_one_level() {
        let auction = Auction::bidding(Seat::North, "1C P");
        assert_eq!(
            propose(&NewSuit, &auction, "KQ54.J65.KJ3.432"),
            Some(Call::bid(1, Strain::Spades))
        );
        // Up the line with two four-card suits.
        assert_eq!(
            propose(&NewSuit, &auction, "KQ54.J654.KJ3.43"),
            Some(Call::bid(1, Strain::Hearts))
        );
    }

    #[test]
    fn test_two_over_one_needs_ten() {
        let auction = Auction::bidding(Seat::North, "1S P");
        // 11 HCP with five diamonds.
        assert_eq!(
            propose(&NewSuit, &auction, "432.K2.AQJ43.J32"),
            Some(Call::bid(2, Strain::Diamonds))
        );
        // 8 HCP: no two-level bid.
        assert_eq!(propose(&NewSuit, &auction, "432.32.KQJ43.J32"), None);
    }

    #[test]
    fn test_major_raises() {
        let auction = Auction::bidding(Seat::North, "1S P");
        // Simple raise.
        assert_eq!(
            propose(&MajorRaise, &auction, "K54.J65.Q432.432"),
            Some(Call::bid(2, Strain::Spades))
        );
        // Limit raise.
        assert_eq!(
            propose(&MajorRaise, &auction, "K954.A65.Q432.32"),
            Some(Call::bid(3, Strain::Spades))
        );
    }

    #[test]
    fn test_jacoby_two_nt() {
        let auction = Auction::bidding(Seat::North, "1S P");
        assert_eq!(
            propose(&JacobyTwoNotrump, &auction, "KQ54.A65.KQ32.32"),
            Some(Call::bid(2, Strain::Notrump))
        );
    }

    #[test]
    fn test_splinter_levels() {
        let auction = Auction::bidding(Seat::North, "1S P");
        // Singleton club, four trumps, 11 HCP.
        assert_eq!(
            propose(&Splinter, &auction, "KQ54.A654.Q432.2"),
            Some(Call::bid(4, Strain::Clubs))
        );

        let auction = Auction::bidding(Seat::North, "1H P");
        // Singleton spade splinters at the three level.
        assert_eq!(
            propose(&Splinter, &auction, "2.KQ54.A654.Q432"),
            Some(Call::bid(3, Strain::Spades))
        );
    }

    #[test]
    fn test_one_nt_response_ladder() {
        let auction = Auction::bidding(Seat::North, "1N P");
        // Five spades: transfer.
        assert_eq!(
            propose(&OneNotrumpResponse, &auction, "KQ543.J65.432.32"),
            Some(Call::bid(2, Strain::Hearts))
        );
        // Four hearts, 9 HCP: Stayman.
        assert_eq!(
            propose(&OneNotrumpResponse, &auction, "K54.QJ65.K432.32"),
            Some(Call::bid(2, Strain::Clubs))
        );
        // Six hearts, 10 HCP: Texas.
        assert_eq!(
            propose(&OneNotrumpResponse, &auction, "2.KQJ432.A32.432"),
            Some(Call::bid(4, Strain::Diamonds))
        );
        // 8 balanced: invite.
        assert_eq!(
            propose(&OneNotrumpResponse, &auction, "K54.Q65.K432.432"),
            Some(Call::bid(2, Strain::Notrump))
        );
        // 10 flat: game.
        assert_eq!(
            propose(&OneNotrumpResponse, &auction, "K54.Q65.KQ32.Q32"),
            Some(Call::bid(3, Strain::Notrump))
        );
        // 4 HCP: pass it along.
        assert_eq!(propose(&OneNotrumpResponse, &auction, "J54.Q65.J432.432"), None);
    }

    #[test]
    fn test_two_club_response() {
        let auction = Auction::bidding(Seat::North, "2C P");
        // Weak: waiting 2D.
        assert_eq!(
            propose(&TwoClubResponse, &auction, "432.J65.Q432.432"),
            Some(Call::bid(2, Strain::Diamonds))
        );
        // Positive with a good major.
        assert_eq!(
            propose(&TwoClubResponse, &auction, "AQJ43.K65.432.32"),
            Some(Call::bid(2, Strain::Spades))
        );
        // Positive balanced.
        assert_eq!(
            propose(&TwoClubResponse, &auction, "K543.K65.A32.432"),
            Some(Call::bid(2, Strain::Notrump))
        );
    }

    #[test]
    fn test_two_club_nt_placement() {
        let auction = Auction::bidding(Seat::North, "2C P 2D P 2N P");
        // Five spades: show them.
        assert_eq!(
            propose(&TwoClubNotrumpPlacement, &auction, "KJ543.654.432.32"),
            Some(Call::bid(3, Strain::Spades))
        );
        // No five-card major: raise to game.
        assert_eq!(
            propose(&TwoClubNotrumpPlacement, &auction, "K543.654.Q432.32"),
            Some(Call::bid(3, Strain::Notrump))
        );
    }

    #[test]
    fn test_weak_two_response() {
        let auction = Auction::bidding(Seat::North, "2H P");
        // Three-card support: raise the preempt.
        assert_eq!(
            propose(&WeakTwoResponse, &auction, "432.K65.Q432.432"),
            Some(Call::bid(3, Strain::Hearts))
        );
        // 15 HCP without support: feature ask.
        assert_eq!(
            propose(&WeakTwoResponse, &auction, "AQ54.2.AK32.Q432"),
            Some(Call::bid(2, Strain::Notrump))
        );
    }

    #[test]
    fn test_drury_needs_a_passed_hand() {
        let auction = Auction::bidding(Seat::North, "P P 1S P");
        assert_eq!(
            propose(&Drury, &auction, "K954.A65.Q432.32"),
            Some(Call::bid(2, Strain::Clubs))
        );

        // Unpassed: the limit raise applies instead.
        let auction = Auction::bidding(Seat::North, "1S P");
        assert_eq!(propose(&Drury, &auction, "K954.A65.Q432.32"), None);
    }

    #[test]
    fn test_notrump_ladder() {
        let auction = Auction::bidding(Seat::North, "1D P");
        // 6-10 catch-all.
        assert_eq!(
            propose(&NotrumpLadder, &auction, "K54.Q65.32.QJ432"),
            Some(Call::bid(1, Strain::Notrump))
        );
        // 13-15 balanced.
        assert_eq!(
            propose(&NotrumpLadder, &auction, "K54.KQ5.A32.Q432"),
            Some(Call::bid(2, Strain::Notrump))
        );
    }

    #[test]
    fn test_responses_require_quiet_opponents() {
        let auction = Auction::bidding(Seat::North, "1C 1H");
        assert_eq!(propose(&NewSuit, &auction, "KQ54.J65.KJ3.432"), None);
    }
}
