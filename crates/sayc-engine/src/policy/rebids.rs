//! Opener's second call, uncontested auctions only.

use super::{BidRule, DecisionContext};
use crate::context::Relation;
use sayc_core::{Call, Strain, Suit};

/// My opening and partner's (non-pass) response, when the opponents
/// have stayed silent and I have not yet rebid.
fn my_opening_and_response(ctx: &DecisionContext) -> Option<(Call, Call)> {
    let r = &ctx.resolver;
    if !r.opened_by_me() || !r.opponents_silent() {
        return None;
    }
    let (open_idx, opening) = r.opening()?;
    if r.i_acted_since(open_idx) {
        return None;
    }
    let (resp_idx, response) = r.last_by(Relation::Partner)?;
    if resp_idx <= open_idx || !response.call.is_bid() {
        return None;
    }
    Some((opening.call, response.call))
}

/// Answering Stayman.
pub struct StaymanAnswer;

impl BidRule for StaymanAnswer {
    fn name(&self) -> &'static str {
        "stayman answer"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if !ctx.catalog.is_enabled("stayman") {
            return None;
        }
        let (opening, response) = my_opening_and_response(ctx)?;
        if opening != Call::bid(1, Strain::Notrump) || response != Call::bid(2, Strain::Clubs) {
            return None;
        }
        if ctx.hand.length(Suit::Hearts) >= 4 {
            return Some(Call::bid(2, Strain::Hearts));
        }
        if ctx.hand.length(Suit::Spades) >= 4 {
            return Some(Call::bid(2, Strain::Spades));
        }
        Some(Call::bid(2, Strain::Diamonds))
    }
}

/// Completing Jacoby, Texas, and minor-suit transfers.
pub struct TransferAcceptance;

impl BidRule for TransferAcceptance {
    fn name(&self) -> &'static str {
        "transfer acceptance"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let (opening, response) = my_opening_and_response(ctx)?;
        if opening != Call::bid(1, Strain::Notrump) {
            return None;
        }
        let catalog = ctx.catalog;
        if catalog.is_enabled("jacoby_transfers") {
            if response == Call::bid(2, Strain::Diamonds) {
                return Some(Call::bid(2, Strain::Hearts));
            }
            if response == Call::bid(2, Strain::Hearts) {
                return Some(Call::bid(2, Strain::Spades));
            }
        }
        if catalog.is_enabled("texas_transfers") {
            if response == Call::bid(4, Strain::Diamonds) {
                return Some(Call::bid(4, Strain::Hearts));
            }
            if response == Call::bid(4, Strain::Hearts) {
                return Some(Call::bid(4, Strain::Spades));
            }
        }
        if catalog.is_enabled("minor_transfer") && response == Call::bid(2, Strain::Spades) {
            return Some(Call::bid(3, Strain::Clubs));
        }
        None
    }
}

/// Opener's rebid after 2C - 2D.
pub struct TwoClubRebid;

impl BidRule for TwoClubRebid {
    fn name(&self) -> &'static str {
        "2C rebid"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let (opening, response) = my_opening_and_response(ctx)?;
        if opening != Call::bid(2, Strain::Clubs) || response != Call::bid(2, Strain::Diamonds) {
            return None;
        }
        let hand = ctx.hand;
        if hand.is_balanced() && (22..=24).contains(&hand.hcp()) {
            return Some(Call::bid(2, Strain::Notrump));
        }
        let suit = hand.longest_suit();
        let level = if suit > Suit::Diamonds { 2 } else { 3 };
        Some(Call::bid(level, Strain::from_suit(suit)))
    }
}

/// Continuing after partner's Drury 2C.
pub struct DruryContinuation;

impl BidRule for DruryContinuation {
    fn name(&self) -> &'static str {
        "drury continuation"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if !ctx.catalog.is_enabled("drury") {
            return None;
        }
        let (opening, response) = my_opening_and_response(ctx)?;
        let major = opening.suit().filter(|s| s.is_major())?;
        if opening.level() != Some(1) || response != Call::bid(2, Strain::Clubs) {
            return None;
        }
        // Drury only exists opposite a passed hand.
        let (open_idx, _) = ctx.resolver.opening()?;
        let partner_passed_first = (0..open_idx).any(|i| {
            ctx.resolver.relation_at(i) == Some(Relation::Partner)
                && ctx.resolver.call_at(i).map_or(false, |c| c.is_pass())
        });
        if !partner_passed_first {
            return None;
        }
        if ctx.hand.total_points() >= 14 {
            return Some(Call::bid(4, Strain::from_suit(major)));
        }
        Some(Call::bid(2, Strain::from_suit(major)))
    }
}

/// Raising partner's major-suit response with four-card support.
pub struct RaiseResponder;

impl BidRule for RaiseResponder {
    fn name(&self) -> &'static str {
        "raise responder"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let (opening, response) = my_opening_and_response(ctx)?;
        if opening.level() != Some(1) || opening.strain() == Some(Strain::Notrump) {
            return None;
        }
        if response.level() != Some(1) {
            return None;
        }
        let major = response.suit().filter(|s| s.is_major())?;
        let hand = ctx.hand;
        if hand.length(major) < 4 {
            return None;
        }
        let points = hand.support_points(major);
        if points >= 19 {
            return Some(Call::bid(4, Strain::from_suit(major)));
        }
        if points >= 16 {
            return Some(Call::bid(3, Strain::from_suit(major)));
        }
        Some(Call::bid(2, Strain::from_suit(major)))
    }
}

/// Balanced rebids: 1NT with 12-14, a jump 2NT with 18-19.
pub struct NotrumpRebid;

impl BidRule for NotrumpRebid {
    fn name(&self) -> &'static str {
        "notrump rebid"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let (opening, response) = my_opening_and_response(ctx)?;
        if opening.level() != Some(1) || opening.strain() == Some(Strain::Notrump) {
            return None;
        }
        if response.level() != Some(1) || response.strain() == Some(Strain::Notrump) {
            return None;
        }
        let hand = ctx.hand;
        if !hand.is_balanced() {
            return None;
        }
        if (12..=14).contains(&hand.hcp()) {
            return Some(Call::bid(1, Strain::Notrump));
        }
        if (18..=19).contains(&hand.hcp()) {
            return Some(Call::bid(2, Strain::Notrump));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ConventionCatalog;
    use sayc_core::{Auction, Hand, Seat};

    fn propose(rule: &dyn BidRule, auction: &Auction, hand: &str) -> Option<Call> {
        let catalog = ConventionCatalog::default();
        let hand = Hand::parse(hand);
        let ctx = DecisionContext::new(auction, &catalog, &hand);
        rule.propose(&ctx)
    }

    #[test]
    fn test_stayman_answer() {
        let auction = Auction::bidding(Seat::North, "1N P 2C P");
        assert_eq!(
            propose(&StaymanAnswer, &auction, "K54.AQ65.KQ3.Q32"),
            Some(Call::bid(2, Strain::Hearts))
        );
        assert_eq!(
            propose(&StaymanAnswer, &auction, "KQ54.A65.KQ3.Q32"),
            Some(Call::bid(2, Strain::Spades))
        );
        assert_eq!(
            propose(&StaymanAnswer, &auction, "K54.A65.KQ32.Q32"),
            Some(Call::bid(2, Strain::Diamonds))
        );
    }

    #[test]
    fn test_transfer_acceptance() {
        let auction = Auction::bidding(Seat::North, "1N P 2D P");
        assert_eq!(
            propose(&TransferAcceptance, &auction, "K54.A65.KQ32.Q32"),
            Some(Call::bid(2, Strain::Hearts))
        );

        let auction = Auction::bidding(Seat::North, "1N P 4H P");
        assert_eq!(
            propose(&TransferAcceptance, &auction, "K54.A65.KQ32.Q32"),
            Some(Call::bid(4, Strain::Spades))
        );
    }

    #[test]
    fn test_two_club_rebid() {
        let auction = Auction::bidding(Seat::North, "2C P 2D P");
        // 23 balanced.
        assert_eq!(
            propose(&TwoClubRebid, &auction, "AK54.AQ6.KQ3.AJ2"),
            Some(Call::bid(2, Strain::Notrump))
        );
        // Long spades: natural rebid.
        assert_eq!(
            propose(&TwoClubRebid, &auction, "AKQJ54.AK6.A3.A2"),
            Some(Call::bid(2, Strain::Spades))
        );
    }

    #[test]
    fn test_raise_responder() {
        let auction = Auction::bidding(Seat::North, "1C P 1S P");
        // Minimum with four trumps.
        assert_eq!(
            propose(&RaiseResponder, &auction, "KQ54.A65.432.K32"),
            Some(Call::bid(2, Strain::Spades))
        );
        // 17 support points: jump.
        assert_eq!(
            propose(&RaiseResponder, &auction, "KQ54.A65.2.KQ432"),
            Some(Call::bid(3, Strain::Spades))
        );
    }

    #[test]
    fn test_notrump_rebid() {
        let auction = Auction::bidding(Seat::North, "1D P 1S P");
        // 13 balanced.
        assert_eq!(
            propose(&NotrumpRebid, &auction, "K54.A65.KQ32.Q32"),
            Some(Call::bid(1, Strain::Notrump))
        );
        // 18 balanced: jump.
        assert_eq!(
            propose(&NotrumpRebid, &auction, "AK4.A65.KJ32.QJ2"),
            Some(Call::bid(2, Strain::Notrump))
        );
    }

    #[test]
    fn test_drury_continuation() {
        let auction = Auction::bidding(Seat::North, "P P 1S P 2C P");
        // Dealer passed, third-seat 1S, partner's Drury 2C; minimum.
        assert_eq!(
            propose(&DruryContinuation, &auction, "AQ543.K65.Q32.32"),
            Some(Call::bid(2, Strain::Spades))
        );
    }
}
