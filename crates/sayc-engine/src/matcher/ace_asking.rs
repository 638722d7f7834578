//! Blackwood, Roman Keycard, Gerber, and the follow-up king asks.

use crate::catalog::ConventionCatalog;
use crate::context::{Relation, Resolver};
use sayc_core::{Call, Hand, Rank, Strain, Suit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeycardVariant {
    Rkcb1430,
    Rkcb3014,
}

/// An ask partner has just made, awaiting our step response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ask {
    Blackwood,
    Keycard { trump: Suit, variant: KeycardVariant },
    Gerber,
    BlackwoodKings,
    GerberKings,
}

impl Ask {
    pub fn name(self) -> &'static str {
        match self {
            Ask::Blackwood => "blackwood response",
            Ask::Keycard { .. } => "keycard response",
            Ask::Gerber => "gerber response",
            Ask::BlackwoodKings | Ask::GerberKings => "king response",
        }
    }
}

/// Classify partner's most recent call as an ace or king ask, if it is
/// one. Quantitative 4NT (raising our own notrump) is not an ask.
pub fn partner_ask(resolver: &Resolver, catalog: &ConventionCatalog) -> Option<Ask> {
    let (idx, record) = resolver.last_by(Relation::Partner)?;
    if !resolver.no_interference_since(idx) {
        return None;
    }
    let call = record.call;

    if call == Call::bid(4, Strain::Notrump) {
        return classify_four_nt(resolver, catalog, idx);
    }
    if call == Call::bid(4, Strain::Clubs) {
        return classify_four_clubs(resolver, catalog, idx);
    }
    if call == Call::bid(5, Strain::Notrump) {
        // Kings, but only after our answer to partner's 4NT.
        if partner_asked_earlier(resolver, catalog, idx, Call::bid(4, Strain::Notrump)) {
            return Some(Ask::BlackwoodKings);
        }
    }
    if call == Call::bid(5, Strain::Clubs) {
        if partner_asked_earlier(resolver, catalog, idx, Call::bid(4, Strain::Clubs)) {
            return Some(Ask::GerberKings);
        }
    }
    None
}

fn classify_four_nt(resolver: &Resolver, catalog: &ConventionCatalog, idx: usize) -> Option<Ask> {
    if !catalog.is_enabled("blackwood") {
        return None;
    }
    // 4NT directly over our own notrump is quantitative.
    if let Some((_, our_bid)) = last_our_bid_before(resolver, idx) {
        if our_bid.strain() == Some(Strain::Notrump) {
            return None;
        }
    }
    let variant = match catalog.str_param("blackwood", "variant", "classic").as_str() {
        "rkcb1430" => Some(KeycardVariant::Rkcb1430),
        "rkcb3014" => Some(KeycardVariant::Rkcb3014),
        _ => None,
    };
    match (variant, resolver.agreed_trump()) {
        (Some(variant), Some(trump)) => Some(Ask::Keycard { trump, variant }),
        _ => Some(Ask::Blackwood),
    }
}

fn classify_four_clubs(resolver: &Resolver, catalog: &ConventionCatalog, idx: usize) -> Option<Ask> {
    if !catalog.is_enabled("gerber") {
        return None;
    }
    // Gerber applies over our side's natural notrump only.
    let (_, our_bid) = last_our_bid_before(resolver, idx)?;
    match (our_bid.level(), our_bid.strain()) {
        (Some(level), Some(Strain::Notrump)) if level <= 3 => Some(Ask::Gerber),
        _ => None,
    }
}

/// Whether partner made the given ask earlier in the auction and we
/// answered it (so a new bid now is the king continuation).
fn partner_asked_earlier(
    resolver: &Resolver,
    catalog: &ConventionCatalog,
    before: usize,
    ask_call: Call,
) -> bool {
    for i in (0..before).rev() {
        if resolver.relation_at(i) != Some(Relation::Partner) {
            continue;
        }
        if resolver.call_at(i) != Some(ask_call) {
            continue;
        }
        let classified = if ask_call == Call::bid(4, Strain::Notrump) {
            classify_four_nt(resolver, catalog, i).is_some()
        } else {
            classify_four_clubs(resolver, catalog, i).is_some()
        };
        if !classified {
            return false;
        }
        // We must have answered in between.
        return (i + 1..before).any(|j| {
            resolver.relation_at(j) == Some(Relation::Me)
                && resolver.call_at(j).map_or(false, |c| c.is_bid())
        });
    }
    false
}

fn last_our_bid_before(resolver: &Resolver, idx: usize) -> Option<(usize, Call)> {
    for i in (0..idx).rev() {
        if !resolver.is_ours(i) {
            continue;
        }
        if let Some(call) = resolver.call_at(i) {
            if call.is_bid() {
                return Some((i, call));
            }
        }
    }
    None
}

/// The step response to an ask.
pub fn respond(ask: Ask, hand: &Hand) -> Call {
    match ask {
        Ask::Blackwood => match hand.aces() {
            1 => Call::bid(5, Strain::Diamonds),
            2 => Call::bid(5, Strain::Hearts),
            3 => Call::bid(5, Strain::Spades),
            _ => Call::bid(5, Strain::Clubs), // 0 or 4
        },
        Ask::Keycard { trump, variant } => {
            let keycards = hand.keycards(trump);
            let queen = hand.has_rank(trump, Rank::Queen);
            let (first_step, second_step) = match variant {
                // 1430: 5C = 1 or 4, 5D = 0 or 3.
                KeycardVariant::Rkcb1430 => ([1, 4], [0, 3]),
                // 3014: 5C = 0 or 3, 5D = 1 or 4.
                KeycardVariant::Rkcb3014 => ([0, 3], [1, 4]),
            };
            if first_step.contains(&keycards) {
                Call::bid(5, Strain::Clubs)
            } else if second_step.contains(&keycards) {
                Call::bid(5, Strain::Diamonds)
            } else if queen {
                Call::bid(5, Strain::Spades) // 2 or 5 with the queen
            } else {
                Call::bid(5, Strain::Hearts) // 2 or 5 without
            }
        }
        Ask::Gerber => match hand.aces() {
            1 => Call::bid(4, Strain::Hearts),
            2 => Call::bid(4, Strain::Spades),
            3 => Call::bid(4, Strain::Notrump),
            _ => Call::bid(4, Strain::Diamonds), // 0 or 4
        },
        Ask::BlackwoodKings => match hand.kings() {
            1 => Call::bid(6, Strain::Diamonds),
            2 => Call::bid(6, Strain::Hearts),
            3 => Call::bid(6, Strain::Spades),
            _ => Call::bid(6, Strain::Clubs), // 0 or 4
        },
        Ask::GerberKings => match hand.kings() {
            1 => Call::bid(5, Strain::Hearts),
            2 => Call::bid(5, Strain::Spades),
            3 => Call::bid(5, Strain::Notrump),
            _ => Call::bid(5, Strain::Diamonds), // 0 or 4
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ConventionEntry, ParamValue};
    use sayc_core::{Auction, Seat};

    fn rkcb_catalog() -> ConventionCatalog {
        let mut catalog = ConventionCatalog::default();
        catalog.insert(
            "asking",
            "blackwood",
            ConventionEntry::on().with_param("variant", ParamValue::Text("rkcb1430".into())),
        );
        catalog
    }

    #[test]
    fn test_blackwood_after_suit_agreement() {
        // 1S - 3S - 4NT; responder answers aces.
        let auction = Auction::bidding(Seat::North, "1S P 3S P 4N P");
        let resolver = Resolver::new(&auction);
        let catalog = ConventionCatalog::default();
        assert_eq!(partner_ask(&resolver, &catalog), Some(Ask::Blackwood));

        let hand = Hand::parse("KQ543.A432.A32.2");
        assert_eq!(
            respond(Ask::Blackwood, &hand),
            Call::bid(5, Strain::Hearts)
        );
    }

    #[test]
    fn test_rkcb_when_configured_and_trump_agreed() {
        let auction = Auction::bidding(Seat::North, "1S P 3S P 4N P");
        let resolver = Resolver::new(&auction);
        assert_eq!(
            partner_ask(&resolver, &rkcb_catalog()),
            Some(Ask::Keycard {
                trump: Suit::Spades,
                variant: KeycardVariant::Rkcb1430
            })
        );

        // Two keycards plus the trump queen.
        let hand = Hand::parse("KQ543.A432.432.2");
        let ask = Ask::Keycard {
            trump: Suit::Spades,
            variant: KeycardVariant::Rkcb1430,
        };
        assert_eq!(respond(ask, &hand), Call::bid(5, Strain::Spades));

        // One keycard: first step.
        let hand = Hand::parse("Q5432.A432.432.2");
        assert_eq!(respond(ask, &hand), Call::bid(5, Strain::Clubs));
    }

    #[test]
    fn test_rkcb_without_agreement_falls_back_to_blackwood() {
        // 4NT straight over 1S: no agreed trump.
        let auction = Auction::bidding(Seat::North, "1S P 4N P");
        let resolver = Resolver::new(&auction);
        assert_eq!(partner_ask(&resolver, &rkcb_catalog()), Some(Ask::Blackwood));
    }

    #[test]
    fn test_quantitative_four_nt_is_not_an_ask() {
        let auction = Auction::bidding(Seat::North, "1N P 4N P");
        let resolver = Resolver::new(&auction);
        let catalog = ConventionCatalog::default();
        assert_eq!(partner_ask(&resolver, &catalog), None);
    }

    #[test]
    fn test_gerber_over_our_notrump() {
        let auction = Auction::bidding(Seat::North, "1N P 4C P");
        let resolver = Resolver::new(&auction);
        let catalog = ConventionCatalog::default();
        assert_eq!(partner_ask(&resolver, &catalog), Some(Ask::Gerber));

        let hand = Hand::parse("AK32.A432.Q32.32");
        assert_eq!(respond(Ask::Gerber, &hand), Call::bid(4, Strain::Spades));
    }

    #[test]
    fn test_four_clubs_with_clubs_agreed_is_not_gerber() {
        let auction = Auction::bidding(Seat::North, "1C P 3C P 4C P");
        let resolver = Resolver::new(&auction);
        let catalog = ConventionCatalog::default();
        assert_eq!(partner_ask(&resolver, &catalog), None);
    }

    #[test]
    fn test_king_ask_after_blackwood() {
        // 1S - 3S - 4NT - 5H - 5NT: now kings.
        let auction = Auction::bidding(Seat::North, "1S P 3S P 4N P 5H P 5N P");
        let resolver = Resolver::new(&auction);
        let catalog = ConventionCatalog::default();
        assert_eq!(partner_ask(&resolver, &catalog), Some(Ask::BlackwoodKings));

        let hand = Hand::parse("KQ543.K432.A32.2");
        assert_eq!(
            respond(Ask::BlackwoodKings, &hand),
            Call::bid(6, Strain::Hearts)
        );
    }

    #[test]
    fn test_gerber_king_ask() {
        let auction = Auction::bidding(Seat::North, "1N P 4C P 4S P 5C P");
        let resolver = Resolver::new(&auction);
        let catalog = ConventionCatalog::default();
        assert_eq!(partner_ask(&resolver, &catalog), Some(Ask::GerberKings));

        let hand = Hand::parse("A432.A432.K32.32");
        assert_eq!(
            respond(Ask::GerberKings, &hand),
            Call::bid(5, Strain::Hearts)
        );
    }
}
