//! Competitive bidding: doubles, overcalls, two-suited actions, and
//! balancing. These rules apply once the auction is contested.

use super::{BidRule, DecisionContext};
use crate::context::Relation;
use crate::matcher::{doubles, nt_defense, two_suited};
use sayc_core::{Call, Strain, Suit};

pub struct SupportDoubleRule;

impl BidRule for SupportDoubleRule {
    fn name(&self) -> &'static str {
        "support double"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        doubles::support_double(&ctx.resolver, ctx.catalog, ctx.hand)
    }
}

pub struct NegativeDoubleRule;

impl BidRule for NegativeDoubleRule {
    fn name(&self) -> &'static str {
        "negative double"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        doubles::negative_double(&ctx.resolver, ctx.catalog, ctx.hand)
    }
}

pub struct ResponsiveDoubleRule;

impl BidRule for ResponsiveDoubleRule {
    fn name(&self) -> &'static str {
        "responsive double"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        doubles::responsive_double(&ctx.resolver, ctx.catalog, ctx.hand)
    }
}

/// Responder's actions after interference over our 1NT.
pub struct Lebensohl;

impl BidRule for Lebensohl {
    fn name(&self) -> &'static str {
        "lebensohl"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if !ctx.catalog.is_enabled("lebensohl") {
            return None;
        }
        let r = &ctx.resolver;
        if !r.opened_by_partner() || r.opening_call() != Some(Call::bid(1, Strain::Notrump)) {
            return None;
        }
        let (_, overcall) = r.their_last_action()?;
        let their_suit = overcall.suit()?;
        if overcall.level() != Some(2) {
            return None;
        }
        let hand = ctx.hand;
        let long = Suit::DESCENDING
            .into_iter()
            .find(|&s| s != their_suit && hand.length(s) >= 5)?;

        if hand.hcp() < 10 {
            // Weak and invitational hands compete: bid the suit at the
            // two level if it ranks above their suit, else relay
            // through 2NT.
            if long > their_suit {
                return Some(Call::bid(2, Strain::from_suit(long)));
            }
            return Some(Call::bid(2, Strain::Notrump));
        }
        // Direct three-level bid is forcing.
        Some(Call::bid(3, Strain::from_suit(long)))
    }
}

pub struct MichaelsCue;

impl BidRule for MichaelsCue {
    fn name(&self) -> &'static str {
        "michaels cue"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        two_suited::michaels(&ctx.resolver, ctx.catalog, ctx.hand)
    }
}

pub struct UnusualNotrump;

impl BidRule for UnusualNotrump {
    fn name(&self) -> &'static str {
        "unusual notrump"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        two_suited::unusual_nt(&ctx.resolver, ctx.catalog, ctx.hand)
    }
}

pub struct DontOverNotrump;

impl BidRule for DontOverNotrump {
    fn name(&self) -> &'static str {
        "dont"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        nt_defense::dont(&ctx.resolver, ctx.catalog, ctx.hand)
    }
}

/// Their one-level suit opening with nothing after it but passes, and
/// a silent partner: the seat for direct overcalls.
fn their_open_suit_direct(ctx: &DecisionContext) -> Option<Suit> {
    let r = &ctx.resolver;
    if !r.opened_by_opponents() {
        return None;
    }
    let (idx, record) = r.opening()?;
    let suit = record.call.suit()?;
    let quiet = r
        .auction()
        .records
        .iter()
        .skip(idx + 1)
        .all(|rec| rec.call.is_pass());
    let partner_quiet = r
        .last_by(Relation::Partner)
        .map_or(true, |(_, rec)| rec.call.is_pass());
    if quiet && partner_quiet {
        Some(suit)
    } else {
        None
    }
}

/// Preemptive jump overcall with a good six-card suit.
pub struct WeakJumpOvercall;

impl BidRule for WeakJumpOvercall {
    fn name(&self) -> &'static str {
        "weak jump overcall"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let their_suit = their_open_suit_direct(ctx)?;
        if ctx.resolver.opening_call()?.level() != Some(1) {
            return None;
        }
        let hand = ctx.hand;
        if !(5..=10).contains(&hand.hcp()) {
            return None;
        }
        let suit = Suit::DESCENDING
            .into_iter()
            .find(|&s| s != their_suit && hand.length(s) >= 6 && hand.good_suit(s))?;
        let level = if suit > their_suit { 2 } else { 3 };
        Some(Call::bid(level, Strain::from_suit(suit)))
    }
}

/// Simple natural overcall.
pub struct NaturalOvercall;

impl BidRule for NaturalOvercall {
    fn name(&self) -> &'static str {
        "overcall"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let r = &ctx.resolver;
        if !r.opened_by_opponents() {
            return None;
        }
        let partner_acted = r
            .last_by(Relation::Partner)
            .map_or(false, |(_, rec)| !rec.call.is_pass());
        if partner_acted {
            return None;
        }
        let (_, action) = r.their_last_action()?;
        let their_level = action.level()?;
        let their_suit = action.suit()?;
        if their_level > 2 {
            return None;
        }
        let hand = ctx.hand;
        // Ascending scan so the higher suit wins a length tie.
        let suit = Suit::ALL
            .into_iter()
            .filter(|&s| s != their_suit)
            .max_by_key(|&s| hand.length(s))?;
        if hand.length(suit) < 5 || !hand.good_suit(suit) {
            return None;
        }
        let level = if suit > their_suit {
            their_level
        } else {
            their_level + 1
        };
        if level > 2 {
            return None;
        }
        let mut min_hcp = if level == 1 { 8 } else { 10 };
        if ctx.auction.vulnerability.we {
            min_hcp += 2;
        }
        if hand.hcp() < min_hcp {
            return None;
        }
        Some(Call::bid(level, Strain::from_suit(suit)))
    }
}

pub struct TakeoutDoubleRule;

impl BidRule for TakeoutDoubleRule {
    fn name(&self) -> &'static str {
        "takeout double"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        doubles::takeout_double(&ctx.resolver, ctx.catalog, ctx.hand)
    }
}

/// Partner made a takeout double and the next hand passed: we are
/// forced to act.
pub struct AdvanceAfterTakeout;

impl BidRule for AdvanceAfterTakeout {
    fn name(&self) -> &'static str {
        "takeout advance"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let r = &ctx.resolver;
        if !r.opened_by_opponents() {
            return None;
        }
        let (dbl_idx, partner) = r.last_by(Relation::Partner)?;
        if partner.call != Call::Double {
            return None;
        }
        // Only forced when nothing but passes followed the double.
        let quiet = r
            .auction()
            .records
            .iter()
            .skip(dbl_idx + 1)
            .all(|rec| rec.call.is_pass());
        if !quiet {
            return None;
        }
        let contract = r.last_contract()?;
        let their_level = contract.level()?;
        let their_suit = contract.suit()?;
        let hand = ctx.hand;

        // Notrump with a stopper and some values.
        if (6..=10).contains(&hand.hcp()) && hand.has_stopper(their_suit) && hand.is_balanced() {
            return Some(Call::bid(their_level, Strain::Notrump));
        }
        // Longest suit outside theirs, majors preferred on ties.
        let suit = Suit::ALL
            .into_iter()
            .filter(|&s| s != their_suit)
            .max_by_key(|&s| (hand.length(s), s.is_major()))?;
        let mut level = if suit > their_suit {
            their_level
        } else {
            their_level + 1
        };
        if (9..=11).contains(&hand.hcp()) {
            // Invitational jump.
            level += 1;
        }
        Some(Call::bid(level, Strain::from_suit(suit)))
    }
}

/// Advancing partner's overcall: raise, cue-bid raise, or notrump.
pub struct AdvanceAfterOvercall;

impl BidRule for AdvanceAfterOvercall {
    fn name(&self) -> &'static str {
        "overcall advance"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let r = &ctx.resolver;
        if !r.opened_by_opponents() {
            return None;
        }
        let (idx, partner) = r.last_by(Relation::Partner)?;
        let overcall_suit = partner.call.suit()?;
        let overcall_level = partner.call.level()?;
        if r.i_acted_since(idx) {
            return None;
        }
        let their_suit = r.opening_call()?.suit()?;
        if overcall_suit == their_suit {
            return None;
        }
        let hand = ctx.hand;
        let support = hand.length(overcall_suit);

        if support >= 3 {
            let points = hand.support_points(overcall_suit);
            if points >= 10 {
                // Cue-bid raise: limit or better.
                return Some(Call::bid(overcall_level + 1, Strain::from_suit(their_suit)));
            }
            if points >= 6 {
                return Some(Call::bid(overcall_level + 1, Strain::from_suit(overcall_suit)));
            }
        }
        if (8..=11).contains(&hand.hcp()) && hand.has_stopper(their_suit) {
            return Some(Call::bid(overcall_level, Strain::Notrump));
        }
        None
    }
}

/// Responder's raise of partner's opening in competition, once the
/// conventional doubles have had their chance.
pub struct CompetitiveRaise;

impl BidRule for CompetitiveRaise {
    fn name(&self) -> &'static str {
        "competitive raise"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let r = &ctx.resolver;
        let opening_suit = r.partner_opening_suit()?;
        if r.opponents_silent() {
            return None;
        }
        let (open_idx, _) = r.opening()?;
        if r.i_acted_since(open_idx) {
            return None;
        }
        let hand = ctx.hand;
        if hand.length(opening_suit) < 3 {
            return None;
        }
        let points = hand.support_points(opening_suit);
        let contract = r.last_contract()?;
        // Cheapest level at which the raise outranks the contract.
        let needs_higher = contract
            .strain()
            .map_or(false, |st| Strain::from_suit(opening_suit).idx() <= st.idx());
        let raise_level = contract.level()? + u8::from(needs_higher);
        if (10..=12).contains(&points) {
            return Some(Call::bid(raise_level + 1, Strain::from_suit(opening_suit)));
        }
        if (6..=9).contains(&points) {
            return Some(Call::bid(raise_level, Strain::from_suit(opening_suit)));
        }
        None
    }
}

pub struct ReopeningDoubleRule;

impl BidRule for ReopeningDoubleRule {
    fn name(&self) -> &'static str {
        "reopening double"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        doubles::reopening_double(&ctx.resolver, ctx.catalog, ctx.hand)
    }
}

/// Balancing with a suit or notrump rather than a double.
pub struct BalancingBid;

impl BidRule for BalancingBid {
    fn name(&self) -> &'static str {
        "balancing bid"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let r = &ctx.resolver;
        if !r.is_balancing_seat() {
            return None;
        }
        let contract = r.last_contract()?;
        let their_level = contract.level()?;
        let their_suit = contract.suit()?;
        if their_level > 2 {
            return None;
        }
        let hand = ctx.hand;

        if (11..=14).contains(&hand.hcp()) && hand.is_balanced() && hand.has_stopper(their_suit) {
            return Some(Call::bid(their_level, Strain::Notrump));
        }
        let suit = Suit::ALL
            .into_iter()
            .filter(|&s| s != their_suit)
            .max_by_key(|&s| hand.length(s))?;
        if hand.length(suit) >= 5 && hand.hcp() >= 7 {
            let level = if suit > their_suit {
                their_level
            } else {
                their_level + 1
            };
            return Some(Call::bid(level, Strain::from_suit(suit)));
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
    fn test_natural_overcall_levels() {
        let auction = Auction::bidding(Seat::North, "1D");
        // 8 HCP, good spades: 1S.
        assert_eq!(
            propose(&NaturalOvercall, &auction, "KQJ43.432.32.Q32"),
            Some(Call::bid(1, Strain::Spades))
        );
        // Good clubs need two-level values.
        assert_eq!(propose(&NaturalOvercall, &auction, "432.Q32.32.KQJ43"), None);
        assert_eq!(
            propose(&NaturalOvercall, &auction, "A32.Q2.432.KQJ43"),
            Some(Call::bid(2, Strain::Clubs))
        );
    }

    #[test]
    fn test_overcall_vulnerable_needs_more() {
        let mut auction = Auction::bidding(Seat::North, "1D");
        auction.vulnerability = sayc_core::Vulnerability::new(true, false);
        assert_eq!(propose(&NaturalOvercall, &auction, "KQJ43.432.32.Q32"), None);
    }

    #[test]
    fn test_weak_jump_overcall() {
        let auction = Auction::bidding(Seat::North, "1D");
        assert_eq!(
            propose(&WeakJumpOvercall, &auction, "KQJ432.32.2.5432"),
            Some(Call::bid(2, Strain::Spades))
        );
        // Lower-ranked suit jumps to the three level.
        assert_eq!(
            propose(&WeakJumpOvercall, &auction, "32.2.5432.KQJ432"),
            Some(Call::bid(3, Strain::Clubs))
        );
    }

    #[test]
    fn test_takeout_advance_bids_a_major() {
        // (1H) - X - (P): advancer must act.
        let auction = Auction::bidding(Seat::North, "1H X P");
        assert_eq!(
            propose(&AdvanceAfterTakeout, &auction, "Q432.432.J432.32"),
            Some(Call::bid(1, Strain::Spades))
        );
        // Invitational values jump.
        assert_eq!(
            propose(&AdvanceAfterTakeout, &auction, "KQ43.432.A432.32"),
            Some(Call::bid(2, Strain::Spades))
        );
    }

    #[test]
    fn test_overcall_advance() {
        // (1D) - 1S - (P): raise with support.
        let auction = Auction::bidding(Seat::North, "1D 1S P");
        assert_eq!(
            propose(&AdvanceAfterOvercall, &auction, "K54.J65.432.Q432"),
            Some(Call::bid(2, Strain::Spades))
        );
        // Limit raise goes through the cue bid.
        assert_eq!(
            propose(&AdvanceAfterOvercall, &auction, "K954.A65.2.Q5432"),
            Some(Call::bid(2, Strain::Diamonds))
        );
    }

    #[test]
    fn test_competitive_raise() {
        // Partner opened 1S, RHO overcalled 3C above the support
        // double level: raise anyway.
        let auction = Auction::bidding(Seat::North, "1S 3C");
        assert_eq!(
            propose(&CompetitiveRaise, &auction, "K54.J65.Q432.432"),
            Some(Call::bid(3, Strain::Spades))
        );
    }

    #[test]
    fn test_balancing_bid() {
        // (1S) - P - (P): balance with a suit.
        let auction = Auction::bidding(Seat::North, "1S P P");
        assert_eq!(
            propose(&BalancingBid, &auction, "32.KQ543.Q32.J32"),
            Some(Call::bid(2, Strain::Hearts))
        );
        // Balanced with a stopper: notrump.
        assert_eq!(
            propose(&BalancingBid, &auction, "KQ3.K543.Q32.J32"),
            Some(Call::bid(1, Strain::Notrump))
        );
    }

    #[test]
    fn test_lebensohl_relay() {
        // 1NT - (2S): weak with long clubs relays through 2NT.
        let auction = Auction::bidding(Seat::North, "1N 2S");
        assert_eq!(
            propose(&Lebensohl, &auction, "432.32.Q2.KJ5432"),
            Some(Call::bid(2, Strain::Notrump))
        );
        // A suit above theirs is just competitive at the two level.
        let auction = Auction::bidding(Seat::North, "1N 2H");
        assert_eq!(
            propose(&Lebensohl, &auction, "KJ543.32.Q32.432"),
            Some(Call::bid(2, Strain::Spades))
        );
        // Invitational values still compete.
        assert_eq!(
            propose(&Lebensohl, &auction, "KJ543.A2.432.432"),
            Some(Call::bid(2, Strain::Spades))
        );
        // Game-forcing values bid the suit at the three level.
        assert_eq!(
            propose(&Lebensohl, &auction, "AQJ43.32.K32.Q32"),
            Some(Call::bid(3, Strain::Spades))
        );
    }
}
