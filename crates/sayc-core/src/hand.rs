use crate::card::Card;
use crate::rank::Rank;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    /// No singletons, no voids, max one doubleton (4-3-3-3, 4-4-3-2, 5-3-3-2)
    Balanced,
    /// One singleton OR two doubletons, no voids (5-4-2-2, 6-3-2-2, 5-4-3-1)
    SemiBalanced,
    /// Everything else
    Unbalanced,
}

/// A player's thirteen cards, read-only to the bidding engine.
///
/// The engine consumes point counts and suit lengths; it never mutates
/// a hand or deals cards itself.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parse a hand written as "Spades.Hearts.Diamonds.Clubs",
    /// e.g. "AQ54.KQ6.KJ3.Q32". Unknown rank characters are skipped.
    pub fn parse(s: &str) -> Self {
        let mut cards = Vec::new();
        for (i, holding) in s.split('.').take(4).enumerate() {
            let suit = Suit::DESCENDING[i];
            for c in holding.chars() {
                if let Some(rank) = Rank::from_char(c) {
                    cards.push(Card::new(suit, rank));
                }
            }
        }
        Self { cards }
    }

    /// 4-3-2-1 high card points.
    pub fn hcp(&self) -> u8 {
        self.cards.iter().map(|c| c.rank.hcp()).sum()
    }

    pub fn length(&self, suit: Suit) -> u8 {
        self.cards.iter().filter(|c| c.suit == suit).count() as u8
    }

    /// Length points: one per card beyond the fourth in each suit.
    pub fn dist_points(&self) -> u8 {
        Suit::ALL
            .iter()
            .map(|&s| self.length(s).saturating_sub(4))
            .sum()
    }

    /// HCP plus distribution points.
    pub fn total_points(&self) -> u8 {
        self.hcp() + self.dist_points()
    }

    /// Support points when raising partner's `trump`: HCP plus
    /// shortness (void 5, singleton 3, doubleton 1) in the side suits.
    pub fn support_points(&self, trump: Suit) -> u8 {
        let mut shortness = 0;
        for s in Suit::ALL {
            if s == trump {
                continue;
            }
            shortness += match self.length(s) {
                0 => 5,
                1 => 3,
                2 => 1,
                _ => 0,
            };
        }
        self.hcp() + shortness
    }

    pub fn has_rank(&self, suit: Suit, rank: Rank) -> bool {
        self.cards.iter().any(|c| c.suit == suit && c.rank == rank)
    }

    pub fn aces(&self) -> u8 {
        self.cards.iter().filter(|c| c.rank == Rank::Ace).count() as u8
    }

    pub fn kings(&self) -> u8 {
        self.cards.iter().filter(|c| c.rank == Rank::King).count() as u8
    }

    /// Keycards for a trump suit: the four aces plus the trump king.
    pub fn keycards(&self, trump: Suit) -> u8 {
        self.aces() + u8::from(self.has_rank(trump, Rank::King))
    }

    /// A stopper: A, Kx, Qxx, or Jxxx.
    pub fn has_stopper(&self, suit: Suit) -> bool {
        let len = self.length(suit);
        (self.has_rank(suit, Rank::Ace))
            || (self.has_rank(suit, Rank::King) && len >= 2)
            || (self.has_rank(suit, Rank::Queen) && len >= 3)
            || (self.has_rank(suit, Rank::Jack) && len >= 4)
    }

    /// Count honors held in `suit` among the top `n` of A, K, Q, J, T.
    pub fn top_honors(&self, suit: Suit, n: u8) -> u8 {
        const HONORS: [Rank; 5] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];
        let top = &HONORS[..n as usize];
        self.cards
            .iter()
            .filter(|c| c.suit == suit && top.contains(&c.rank))
            .count() as u8
    }

    /// Suit quality gate for overcalls and preempts:
    /// 2 of the top 3 honors, or 3 of the top 5.
    pub fn good_suit(&self, suit: Suit) -> bool {
        self.top_honors(suit, 3) >= 2 || self.top_honors(suit, 5) >= 3
    }

    pub fn shape(&self) -> Shape {
        let mut lengths: Vec<u8> = Suit::ALL.iter().map(|&s| self.length(s)).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));

        let longest = lengths[0];
        let doubletons = lengths.iter().filter(|&&l| l == 2).count();
        let singletons = lengths.iter().filter(|&&l| l == 1).count();
        let voids = lengths.iter().filter(|&&l| l == 0).count();

        if singletons == 0 && voids == 0 && doubletons <= 1 {
            Shape::Balanced
        } else if longest <= 6 && voids == 0 && (singletons == 1 || doubletons == 2) {
            Shape::SemiBalanced
        } else {
            Shape::Unbalanced
        }
    }

    pub fn is_balanced(&self) -> bool {
        matches!(self.shape(), Shape::Balanced)
    }

    pub fn longest_suit(&self) -> Suit {
        // Higher-ranking suit wins a tie, the SAYC order of preference.
        let mut best = Suit::Spades;
        let mut best_len = self.length(Suit::Spades);
        for suit in [Suit::Hearts, Suit::Diamonds, Suit::Clubs] {
            let len = self.length(suit);
            if len > best_len {
                best = suit;
                best_len = len;
            }
        }
        best
    }

    /// Rule of 20: HCP plus the two longest suit lengths.
    pub fn rule_of_20(&self) -> bool {
        let mut lengths: Vec<u8> = Suit::ALL.iter().map(|&s| self.length(s)).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        self.hcp() + lengths[0] + lengths[1] >= 20
    }

    /// Rule of 15 (fourth seat): HCP plus spade length.
    pub fn rule_of_15(&self) -> bool {
        self.hcp() + self.length(Suit::Spades) >= 15
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for suit in Suit::DESCENDING {
            if !first {
                write!(f, ".")?;
            }
            first = false;
            let mut ranks: Vec<Rank> = self
                .cards
                .iter()
                .filter(|c| c.suit == suit)
                .map(|c| c.rank)
                .collect();
            ranks.sort_unstable_by(|a, b| b.cmp(a));
            for r in ranks {
                write!(f, "{}", r.to_char())?;
            }
        }
        Ok(())
    }
}
