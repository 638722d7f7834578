//! Opening bids.

use super::{BidRule, DecisionContext};
use sayc_core::{Call, Strain, Suit};

fn no_opening_yet(ctx: &DecisionContext) -> bool {
    ctx.resolver.opening().is_none()
}

/// Fourth seat: three passes in front of us.
fn fourth_seat(ctx: &DecisionContext) -> bool {
    ctx.resolver.len() == 3
}

pub struct StrongTwoClubs;

impl BidRule for StrongTwoClubs {
    fn name(&self) -> &'static str {
        "strong 2C opening"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if !no_opening_yet(ctx) || ctx.hand.hcp() < 22 {
            return None;
        }
        Some(Call::bid(2, Strain::Clubs))
    }
}

pub struct TwoNotrump;

impl BidRule for TwoNotrump {
    fn name(&self) -> &'static str {
        "2NT opening"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if !no_opening_yet(ctx) {
            return None;
        }
        if (20..=21).contains(&ctx.hand.hcp()) && ctx.hand.is_balanced() {
            Some(Call::bid(2, Strain::Notrump))
        } else {
            None
        }
    }
}

pub struct OneNotrump;

impl BidRule for OneNotrump {
    fn name(&self) -> &'static str {
        "1NT opening"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if !no_opening_yet(ctx) {
            return None;
        }
        if (15..=17).contains(&ctx.hand.hcp()) && ctx.hand.is_balanced() {
            Some(Call::bid(1, Strain::Notrump))
        } else {
            None
        }
    }
}

pub struct OneOfASuit;

impl BidRule for OneOfASuit {
    fn name(&self) -> &'static str {
        "suit opening"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if !no_opening_yet(ctx) {
            return None;
        }
        let hand = ctx.hand;
        let opens = if fourth_seat(ctx) {
            hand.rule_of_15()
        } else {
            hand.hcp() >= 12 || hand.rule_of_20()
        };
        if !opens {
            return None;
        }

        // Five-card major first, the longer one, spades on a tie.
        let spades = hand.length(Suit::Spades);
        let hearts = hand.length(Suit::Hearts);
        if spades >= 5 && spades >= hearts {
            return Some(Call::bid(1, Strain::Spades));
        }
        if hearts >= 5 {
            return Some(Call::bid(1, Strain::Hearts));
        }

        // Otherwise the longer minor; 4-4 opens 1D, 3-3 opens 1C.
        let diamonds = hand.length(Suit::Diamonds);
        let clubs = hand.length(Suit::Clubs);
        let strain = if diamonds > clubs {
            Strain::Diamonds
        } else if clubs > diamonds {
            Strain::Clubs
        } else if diamonds >= 4 {
            Strain::Diamonds
        } else {
            Strain::Clubs
        };
        Some(Call::bid(1, strain))
    }
}

pub struct WeakTwo;

impl BidRule for WeakTwo {
    fn name(&self) -> &'static str {
        "weak two"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if !no_opening_yet(ctx) {
            return None;
        }
        let hand = ctx.hand;
        let range = if ctx.auction.vulnerability.we {
            8..=10
        } else {
            5..=10
        };
        if !range.contains(&hand.hcp()) {
            return None;
        }
        // 2C is reserved; weak twos start at diamonds.
        for suit in [Suit::Spades, Suit::Hearts, Suit::Diamonds] {
            if hand.length(suit) == 6 && hand.good_suit(suit) {
                return Some(Call::bid(2, Strain::from_suit(suit)));
            }
        }
        None
    }
}

pub struct Preempt;

impl BidRule for Preempt {
    fn name(&self) -> &'static str {
        "preempt"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        if !no_opening_yet(ctx) || ctx.hand.hcp() > 10 {
            return None;
        }
        for suit in Suit::DESCENDING {
            if ctx.hand.length(suit) >= 7 && ctx.hand.good_suit(suit) {
                return Some(Call::bid(3, Strain::from_suit(suit)));
            }
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
    fn test_one_nt_opening() {
        let auction = Auction::bidding(Seat::North, "");
        // 17 HCP, 4-3-3-3.
        assert_eq!(
            propose(&OneNotrump, &auction, "AQ54.KQ6.KJ3.Q32"),
            Some(Call::bid(1, Strain::Notrump))
        );
        // Unbalanced 16: no.
        assert_eq!(propose(&OneNotrump, &auction, "AQJ54.KQ632.K3.2"), None);
    }

    #[test]
    fn test_two_nt_and_strong_two_clubs() {
        let auction = Auction::bidding(Seat::North, "");
        // 20 balanced.
        assert_eq!(
            propose(&TwoNotrump, &auction, "AQ54.KQ6.KJ3.AQ2"),
            Some(Call::bid(2, Strain::Notrump))
        );
        // 22 HCP.
        assert_eq!(
            propose(&StrongTwoClubs, &auction, "AKQ4.KQ6.KJ3.AQ2"),
            Some(Call::bid(2, Strain::Clubs))
        );
    }

    #[test]
    fn test_five_card_major_first() {
        let auction = Auction::bidding(Seat::North, "");
        assert_eq!(
            propose(&OneOfASuit, &auction, "AQ543.K65.KJ3.32"),
            Some(Call::bid(1, Strain::Spades))
        );
        // 5-5 majors: spades.
        assert_eq!(
            propose(&OneOfASuit, &auction, "AQ543.KQ654.K3.2"),
            Some(Call::bid(1, Strain::Spades))
        );
    }

    #[test]
    fn test_minor_choice() {
        let auction = Auction::bidding(Seat::North, "");
        // 4-4 minors: 1D.
        assert_eq!(
            propose(&OneOfASuit, &auction, "AQ5.K6.KJ32.Q432"),
            Some(Call::bid(1, Strain::Diamonds))
        );
        // 3-3 minors: 1C.
        assert_eq!(
            propose(&OneOfASuit, &auction, "AQ54.K65.KJ3.Q32"),
            Some(Call::bid(1, Strain::Clubs))
        );
    }

    #[test]
    fn test_rule_of_20_opening() {
        let auction = Auction::bidding(Seat::North, "");
        // 11 HCP but 5-5: 11 + 5 + 5 = 21.
        assert_eq!(
            propose(&OneOfASuit, &auction, "AQ543.KQ432.32.2"),
            Some(Call::bid(1, Strain::Spades))
        );
        // 11 flat: pass it along.
        assert_eq!(propose(&OneOfASuit, &auction, "QJ54.K65.QJ3.Q32"), None);
    }

    #[test]
    fn test_fourth_seat_rule_of_15() {
        let auction = Auction::bidding(Seat::North, "P P P");
        // 11 HCP with four spades: 15.
        assert_eq!(
            propose(&OneOfASuit, &auction, "AK32.QJ2.J32.432"),
            Some(Call::bid(1, Strain::Clubs))
        );
        // 12 HCP with two spades: no.
        assert_eq!(propose(&OneOfASuit, &auction, "A2.KQ32.J432.Q32"), None);
    }

    #[test]
    fn test_weak_two() {
        let auction = Auction::bidding(Seat::North, "");
        assert_eq!(
            propose(&WeakTwo, &auction, "32.KQJ432.432.32"),
            Some(Call::bid(2, Strain::Hearts))
        );
        // Six clubs never opens a weak two.
        assert_eq!(propose(&WeakTwo, &auction, "32.432.32.KQJ432"), None);
    }

    #[test]
    fn test_weak_two_vulnerable_range() {
        let mut auction = Auction::bidding(Seat::North, "");
        auction.vulnerability = sayc_core::Vulnerability::new(true, false);
        // 6 HCP: fine nonvul, not vul.
        assert_eq!(propose(&WeakTwo, &auction, "32.KQJ432.5432.2"), None);
    }

    #[test]
    fn test_preempt() {
        let auction = Auction::bidding(Seat::North, "");
        assert_eq!(
            propose(&Preempt, &auction, "2.32.32.KQJ65432"),
            Some(Call::bid(3, Strain::Clubs))
        );
        assert_eq!(propose(&Preempt, &auction, "2.32.32.K8765432"), None);
    }
}
