//! The decision policy: a fixed, priority-ordered chain of bidding
//! rules. The first rule that proposes a call wins; the proposal is
//! routed through the legality guard and an illegal proposal becomes a
//! Pass rather than falling through to later rules. With no match the
//! engine passes, so a call is always produced.

pub mod competitive;
pub mod opening;
pub mod rebids;
pub mod responses;

use crate::catalog::ConventionCatalog;
use crate::context::Resolver;
use crate::legality::ensure_legal;
use crate::matcher::ace_asking::{self, Ask};
use sayc_core::{Auction, Call, CallRecord, Hand};

/// Everything a rule may look at when deciding.
pub struct DecisionContext<'a> {
    pub auction: &'a Auction,
    pub resolver: Resolver<'a>,
    pub catalog: &'a ConventionCatalog,
    pub hand: &'a Hand,
}

impl<'a> DecisionContext<'a> {
    pub fn new(auction: &'a Auction, catalog: &'a ConventionCatalog, hand: &'a Hand) -> Self {
        Self {
            auction,
            resolver: Resolver::new(auction),
            catalog,
            hand,
        }
    }
}

/// One bidding rule. `propose` returns the call this rule would make,
/// or `None` when it does not apply; it never inspects legality.
pub trait BidRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn propose(&self, ctx: &DecisionContext) -> Option<Call>;

    /// The rationale attached to a winning proposal. Defaults to the
    /// rule name; rules covering several conventions refine it.
    fn rationale(&self, _ctx: &DecisionContext) -> &'static str {
        self.name()
    }
}

/// Answer partner's ace or king ask. Sits above everything else so a
/// slam auction is never derailed by a natural rule.
struct AceAskResponse;

impl BidRule for AceAskResponse {
    fn name(&self) -> &'static str {
        "ask response"
    }

    fn propose(&self, ctx: &DecisionContext) -> Option<Call> {
        let ask = ace_asking::partner_ask(&ctx.resolver, ctx.catalog)?;
        Some(ace_asking::respond(ask, ctx.hand))
    }

    fn rationale(&self, ctx: &DecisionContext) -> &'static str {
        ace_asking::partner_ask(&ctx.resolver, ctx.catalog).map_or(self.name(), Ask::name)
    }
}

/// The terminal rule.
struct AlwaysPass;

impl BidRule for AlwaysPass {
    fn name(&self) -> &'static str {
        "pass"
    }

    fn propose(&self, _ctx: &DecisionContext) -> Option<Call> {
        Some(Call::Pass)
    }
}

pub struct RuleChain {
    rules: Vec<Box<dyn BidRule>>,
}

impl RuleChain {
    /// The standard SAYC chain, in priority order: ask responses,
    /// openings, responses, opener rebids, competition, pass.
    pub fn standard() -> Self {
        let mut rules: Vec<Box<dyn BidRule>> = Vec::new();

        rules.push(Box::new(AceAskResponse));

        rules.push(Box::new(opening::StrongTwoClubs));
        rules.push(Box::new(opening::TwoNotrump));
        rules.push(Box::new(opening::OneNotrump));
        rules.push(Box::new(opening::OneOfASuit));
        rules.push(Box::new(opening::WeakTwo));
        rules.push(Box::new(opening::Preempt));

        rules.push(Box::new(responses::TwoClubResponse));
        rules.push(Box::new(responses::TwoClubNotrumpPlacement));
        rules.push(Box::new(responses::WeakTwoResponse));
        rules.push(Box::new(responses::OneNotrumpResponse));
        rules.push(Box::new(responses::Drury));
        rules.push(Box::new(responses::JacobyTwoNotrump));
        rules.push(Box::new(responses::Splinter));
        rules.push(Box::new(responses::BergenRaise));
        rules.push(Box::new(responses::MajorRaise));
        rules.push(Box::new(responses::JumpShift));
        rules.push(Box::new(responses::NewSuit));
        rules.push(Box::new(responses::MinorRaise));
        rules.push(Box::new(responses::NotrumpLadder));

        rules.push(Box::new(rebids::StaymanAnswer));
        rules.push(Box::new(rebids::TransferAcceptance));
        rules.push(Box::new(rebids::TwoClubRebid));
        rules.push(Box::new(rebids::DruryContinuation));
        rules.push(Box::new(rebids::RaiseResponder));
        rules.push(Box::new(rebids::NotrumpRebid));

        rules.push(Box::new(competitive::SupportDoubleRule));
        rules.push(Box::new(competitive::NegativeDoubleRule));
        rules.push(Box::new(competitive::ResponsiveDoubleRule));
        rules.push(Box::new(competitive::Lebensohl));
        rules.push(Box::new(competitive::MichaelsCue));
        rules.push(Box::new(competitive::UnusualNotrump));
        rules.push(Box::new(competitive::DontOverNotrump));
        rules.push(Box::new(competitive::WeakJumpOvercall));
        rules.push(Box::new(competitive::NaturalOvercall));
        rules.push(Box::new(competitive::TakeoutDoubleRule));
        rules.push(Box::new(competitive::AdvanceAfterTakeout));
        rules.push(Box::new(competitive::AdvanceAfterOvercall));
        rules.push(Box::new(competitive::CompetitiveRaise));
        rules.push(Box::new(competitive::ReopeningDoubleRule));
        rules.push(Box::new(competitive::BalancingBid));

        rules.push(Box::new(AlwaysPass));

        Self { rules }
    }

    /// Run the chain and return the chosen call, tagged with the
    /// perspective seat and the winning rule's name.
    pub fn decide(&self, ctx: &DecisionContext) -> CallRecord {
        for rule in &self.rules {
            let Some(proposed) = rule.propose(ctx) else {
                continue;
            };
            tracing::debug!(rule = rule.name(), call = %proposed, "rule selected");
            let call = ensure_legal(proposed, ctx.auction);
            let rationale = if call == proposed {
                rule.rationale(ctx).to_string()
            } else {
                tracing::debug!(rule = rule.name(), "proposal was illegal, passing");
                "pass".to_string()
            };
            return CallRecord::by(ctx.resolver.me(), call).with_rationale(rationale);
        }
        // Unreachable: the chain ends in AlwaysPass.
        CallRecord::by(ctx.resolver.me(), Call::Pass).with_rationale("pass")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sayc_core::{Seat, Strain};

    #[test]
    fn test_ask_response_carries_the_ask_rationale() {
        let chain = RuleChain::standard();
        let catalog = ConventionCatalog::default();

        // 1NT - 4C is Gerber; two aces answer 4S.
        let auction = Auction::bidding(Seat::North, "1N P 4C P");
        let hand = Hand::parse("AK32.A432.Q32.32");
        let ctx = DecisionContext::new(&auction, &catalog, &hand);
        let record = chain.decide(&ctx);
        assert_eq!(record.call, Call::bid(4, Strain::Spades));
        assert_eq!(record.rationale.as_deref(), Some("gerber response"));

        // 4NT over agreed spades is Blackwood.
        let auction = Auction::bidding(Seat::North, "1S P 3S P 4N P");
        let hand = Hand::parse("KQ54.A432.A32.32");
        let ctx = DecisionContext::new(&auction, &catalog, &hand);
        let record = chain.decide(&ctx);
        assert_eq!(record.call, Call::bid(5, Strain::Hearts));
        assert_eq!(record.rationale.as_deref(), Some("blackwood response"));
    }
}
