//! A rule-based SAYC bidding engine.
//!
//! Given the auction so far and the hand of the player to act, the
//! engine produces exactly one legal call, chosen by a deterministic
//! priority-ordered rule chain and checked by the legality guard.
//! Conventions are driven by a configurable card; the default card is
//! standard SAYC.

pub mod catalog;
pub mod context;
pub mod error;
pub mod legality;
pub mod matcher;
pub mod policy;

pub use catalog::{ConventionCatalog, ConventionEntry, ParamValue};
pub use context::{Relation, Resolver};
pub use error::EngineError;
pub use legality::{contract_state, ensure_legal, is_legal, ContractState, Phase};
pub use policy::{BidRule, DecisionContext, RuleChain};

use rand::seq::SliceRandom;
use sayc_core::{Auction, Call, CallRecord, Card, Hand, Rank, Seat, Suit};

/// The engine proper: a convention card plus the standard rule chain.
pub struct Engine {
    catalog: ConventionCatalog,
    chain: RuleChain,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_catalog(ConventionCatalog::default())
    }

    pub fn with_catalog(catalog: ConventionCatalog) -> Self {
        Self {
            catalog,
            chain: RuleChain::standard(),
        }
    }

    pub fn catalog(&self) -> &ConventionCatalog {
        &self.catalog
    }

    /// The next call for the auction's perspective seat. Pure: the
    /// same auction and hand always produce the same record, and the
    /// produced call is always legal.
    pub fn next_call(&self, auction: &Auction, hand: &Hand) -> CallRecord {
        let ctx = DecisionContext::new(auction, &self.catalog, hand);
        self.chain.decide(&ctx)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// A minimal table host: owns the auction between calls so callers
/// don't have to thread it through themselves.
pub struct Table {
    engine: Engine,
    auction: Option<Auction>,
}

impl Table {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            auction: None,
        }
    }

    pub fn start_auction(&mut self, perspective: Seat, we_vulnerable: bool, they_vulnerable: bool) {
        self.auction = Some(Auction::start(perspective, we_vulnerable, they_vulnerable));
    }

    pub fn auction(&self) -> Option<&Auction> {
        self.auction.as_ref()
    }

    /// Record a call made at the table.
    pub fn append_call(&mut self, record: CallRecord) -> Result<(), EngineError> {
        let auction = self.auction.as_mut().ok_or(EngineError::AuctionNotStarted)?;
        auction.push(record);
        Ok(())
    }

    /// Decide, record, and return our next call.
    pub fn next_call(&mut self, hand: &Hand) -> Result<CallRecord, EngineError> {
        let auction = self.auction.as_mut().ok_or(EngineError::AuctionNotStarted)?;
        let record = self.engine.next_call(auction, hand);
        auction.push(record.clone());
        Ok(record)
    }
}

/// Probe whether a call would be accepted right now.
pub fn call_is_legal(call: Call, auction: &Auction) -> bool {
    legality::is_legal(&call, auction)
}

/// Deal four random hands, North first in turn order.
pub fn deal_random_hands(rng: &mut impl rand::Rng) -> [Hand; 4] {
    let mut deck: Vec<Card> = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck.shuffle(rng);
    let mut hands = [Hand::default(), Hand::default(), Hand::default(), Hand::default()];
    for (i, card) in deck.into_iter().enumerate() {
        hands[i % 4].cards.push(card);
    }
    hands
}

#[cfg(test)]
mod tests {
    use super::*;
    use sayc_core::Strain;

    #[test]
    fn test_engine_is_deterministic() {
        let engine = Engine::new();
        let auction = Auction::bidding(Seat::North, "");
        let hand = Hand::parse("AQ54.KQ6.KJ3.Q32");
        let first = engine.next_call(&auction, &hand);
        let second = engine.next_call(&auction, &hand);
        assert_eq!(first, second);
        assert_eq!(first.call, Call::bid(1, Strain::Notrump));
    }

    #[test]
    fn test_table_requires_a_started_auction() {
        let mut table = Table::new(Engine::new());
        let hand = Hand::parse("AQ54.KQ6.KJ3.Q32");
        assert_eq!(table.next_call(&hand), Err(EngineError::AuctionNotStarted));
        assert_eq!(
            table.append_call(CallRecord::new(Call::Pass)),
            Err(EngineError::AuctionNotStarted)
        );

        table.start_auction(Seat::South, false, false);
        let record = table.next_call(&hand).unwrap();
        assert_eq!(record.call, Call::bid(1, Strain::Notrump));
        assert_eq!(table.auction().unwrap().len(), 1);
    }

    #[test]
    fn test_deal_random_hands() {
        let mut rng = rand::thread_rng();
        let hands = deal_random_hands(&mut rng);
        for hand in &hands {
            assert_eq!(hand.cards.len(), 13);
        }
        let total: usize = hands.iter().map(|h| h.cards.len()).sum();
        assert_eq!(total, 52);
    }
}
