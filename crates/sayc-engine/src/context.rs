//! Auction context resolution.
//!
//! Every question about who did what in the auction is answered here,
//! from the perspective seat's point of view. Policy and matcher code
//! query the resolver instead of re-deriving seats from indices, so a
//! sparse log (missing seat tags, missing dealer, omitted passes)
//! degrades in exactly one place.

use sayc_core::{Auction, Call, CallRecord, Seat, Side, Suit};

/// A record author's seat relative to the perspective seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Me,
    Partner,
    Lho,
    Rho,
}

impl Relation {
    pub fn is_ours(self) -> bool {
        matches!(self, Relation::Me | Relation::Partner)
    }
}

pub struct Resolver<'a> {
    auction: &'a Auction,
}

impl<'a> Resolver<'a> {
    pub fn new(auction: &'a Auction) -> Self {
        Self { auction }
    }

    pub fn auction(&self) -> &Auction {
        self.auction
    }

    pub fn me(&self) -> Seat {
        self.auction.perspective
    }

    pub fn my_side(&self) -> Side {
        self.me().side()
    }

    pub fn len(&self) -> usize {
        self.auction.len()
    }

    pub fn is_empty(&self) -> bool {
        self.auction.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<&CallRecord> {
        self.auction.records.get(index)
    }

    pub fn call_at(&self, index: usize) -> Option<Call> {
        self.record(index).map(|r| r.call)
    }

    /// Who made the call at `index`, relative to us. Seat tags and
    /// dealer rotation are authoritative; with neither, fall back to
    /// turn parity counted back from the end of the log (we are about
    /// to act, so the latest record is our RHO's).
    pub fn relation_at(&self, index: usize) -> Option<Relation> {
        if let Some(seat) = self.auction.seat_at(index) {
            let me = self.me();
            return Some(if seat == me {
                Relation::Me
            } else if seat == me.partner() {
                Relation::Partner
            } else if seat == me.lho() {
                Relation::Lho
            } else {
                Relation::Rho
            });
        }
        if index >= self.auction.len() {
            return None;
        }
        Some(match (self.auction.len() - index) % 4 {
            1 => Relation::Rho,
            2 => Relation::Partner,
            3 => Relation::Lho,
            _ => Relation::Me,
        })
    }

    /// Whether the call at `index` came from our side. An unplaceable
    /// caller is treated as an opponent.
    pub fn is_ours(&self, index: usize) -> bool {
        self.relation_at(index).map_or(false, Relation::is_ours)
    }

    pub fn is_partners(&self, index: usize) -> bool {
        self.relation_at(index) == Some(Relation::Partner)
    }

    pub fn is_mine(&self, index: usize) -> bool {
        self.relation_at(index) == Some(Relation::Me)
    }

    /// The opening: index and record of the first contract bid.
    pub fn opening(&self) -> Option<(usize, &CallRecord)> {
        self.auction.opening()
    }

    pub fn opening_call(&self) -> Option<Call> {
        self.opening().map(|(_, r)| r.call)
    }

    pub fn opened_by_me(&self) -> bool {
        self.opening().map_or(false, |(i, _)| self.is_mine(i))
    }

    pub fn opened_by_partner(&self) -> bool {
        self.opening().map_or(false, |(i, _)| self.is_partners(i))
    }

    pub fn opened_by_us(&self) -> bool {
        self.opening().map_or(false, |(i, _)| self.is_ours(i))
    }

    pub fn opened_by_opponents(&self) -> bool {
        self.opening().is_some() && !self.opened_by_us()
    }

    /// The most recent record from a given relative seat.
    pub fn last_by(&self, relation: Relation) -> Option<(usize, &CallRecord)> {
        self.auction
            .records
            .iter()
            .enumerate()
            .rev()
            .find(|(i, _)| self.relation_at(*i) == Some(relation))
    }

    pub fn partner_last_call(&self) -> Option<Call> {
        self.last_by(Relation::Partner).map(|(_, r)| r.call)
    }

    pub fn rho_last_call(&self) -> Option<Call> {
        self.last_by(Relation::Rho).map(|(_, r)| r.call)
    }

    /// The opponents' most recent non-pass call.
    pub fn their_last_action(&self) -> Option<(usize, Call)> {
        self.auction
            .records
            .iter()
            .enumerate()
            .rev()
            .find(|(i, r)| !self.is_ours(*i) && !r.call.is_pass())
            .map(|(i, r)| (i, r.call))
    }

    /// True when the opponents have done nothing but pass.
    pub fn opponents_silent(&self) -> bool {
        self.auction
            .records
            .iter()
            .enumerate()
            .all(|(i, r)| self.is_ours(i) || r.call.is_pass())
    }

    /// True when every opponent call after `index` is a pass.
    pub fn no_interference_since(&self, index: usize) -> bool {
        self.auction
            .records
            .iter()
            .enumerate()
            .skip(index + 1)
            .all(|(i, r)| self.is_ours(i) || r.call.is_pass())
    }

    /// Whether I have made any call after `index`.
    pub fn i_acted_since(&self, index: usize) -> bool {
        self.auction
            .records
            .iter()
            .enumerate()
            .skip(index + 1)
            .any(|(i, _)| self.is_mine(i))
    }

    /// Whether I passed before the opening was made (a passed hand).
    pub fn i_am_passed_hand(&self) -> bool {
        match self.opening() {
            Some((open_idx, _)) => self
                .auction
                .records
                .iter()
                .enumerate()
                .take(open_idx)
                .any(|(i, r)| self.is_mine(i) && r.call.is_pass()),
            None => false,
        }
    }

    /// Pass-out seat: an opposing action followed by two passes.
    pub fn is_balancing_seat(&self) -> bool {
        let n = self.auction.len();
        if n < 3 {
            return false;
        }
        let trailing_passes = self.auction.records[n - 2..]
            .iter()
            .all(|r| r.call.is_pass());
        trailing_passes
            && !self.auction.records[n - 3].call.is_pass()
            && !self.is_ours(n - 3)
    }

    /// Suits bid (as contracts) by a given relative seat.
    pub fn suits_bid_by(&self, relation: Relation) -> Vec<Suit> {
        let mut suits = Vec::new();
        for (i, record) in self.auction.records.iter().enumerate() {
            if self.relation_at(i) != Some(relation) {
                continue;
            }
            if let Some(suit) = record.call.suit() {
                if !suits.contains(&suit) {
                    suits.push(suit);
                }
            }
        }
        suits
    }

    /// Suits bid by either opponent.
    pub fn their_suits(&self) -> Vec<Suit> {
        let mut suits = Vec::new();
        for (i, record) in self.auction.records.iter().enumerate() {
            if self.is_ours(i) {
                continue;
            }
            if let Some(suit) = record.call.suit() {
                if !suits.contains(&suit) {
                    suits.push(suit);
                }
            }
        }
        suits
    }

    /// Suits no one has bid yet.
    pub fn unbid_suits(&self) -> Vec<Suit> {
        let mut bid = Vec::new();
        for record in &self.auction.records {
            if let Some(suit) = record.call.suit() {
                bid.push(suit);
            }
        }
        Suit::ALL.iter().copied().filter(|s| !bid.contains(s)).collect()
    }

    pub fn unbid_majors(&self) -> Vec<Suit> {
        self.unbid_suits().into_iter().filter(|s| s.is_major()).collect()
    }

    /// The suit partner opened, if they opened a suited contract.
    pub fn partner_opening_suit(&self) -> Option<Suit> {
        if !self.opened_by_partner() {
            return None;
        }
        self.opening_call().and_then(|c| c.suit())
    }

    /// The trump suit our side has agreed on: a suit both partners have
    /// bid, or a major our side has raised to game.
    pub fn agreed_trump(&self) -> Option<Suit> {
        let mine = self.suits_bid_by(Relation::Me);
        let partners = self.suits_bid_by(Relation::Partner);
        for suit in Suit::DESCENDING {
            if mine.contains(&suit) && partners.contains(&suit) {
                return Some(suit);
            }
        }
        for (i, record) in self.auction.records.iter().enumerate().rev() {
            if !self.is_ours(i) {
                continue;
            }
            if let (Some(level), Some(suit)) = (record.call.level(), record.call.suit()) {
                if level == 4 && suit.is_major() {
                    return Some(suit);
                }
            }
        }
        None
    }

    /// Our side's most recent contract bid.
    pub fn our_last_bid(&self) -> Option<(usize, Call)> {
        self.auction
            .records
            .iter()
            .enumerate()
            .rev()
            .find(|(i, r)| self.is_ours(*i) && r.call.is_bid())
            .map(|(i, r)| (i, r.call))
    }

    /// The most recent contract bid by anyone.
    pub fn last_contract(&self) -> Option<Call> {
        self.auction.last_bid().map(|(_, r)| r.call)
    }
}
