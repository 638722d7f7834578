//! Call legality over an auction log.
//!
//! A small state machine tracks the standing contract and its
//! doubled/redoubled status; every proposed call is checked against it.
//! The guard is forgiving by design: an illegal proposal becomes Pass,
//! never an error.

use sayc_core::{Auction, Call, Side};

/// Where the auction stands with respect to doubling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NoContractYet,
    Standing,
    Doubled,
    Redoubled,
}

/// The standing contract and its doubled status, derived by replaying
/// the log. `owner` is `None` when seats cannot be resolved; legality
/// checks then fall back to token-order rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractState {
    pub phase: Phase,
    pub contract: Option<Call>,
    pub owner: Option<Side>,
}

impl ContractState {
    fn initial() -> Self {
        Self {
            phase: Phase::NoContractYet,
            contract: None,
            owner: None,
        }
    }
}

/// Replay the log into a contract state. Out-of-place doubles and
/// redoubles in an imported log are skipped rather than rejected.
pub fn contract_state(auction: &Auction) -> ContractState {
    let mut state = ContractState::initial();
    for (i, record) in auction.records.iter().enumerate() {
        match record.call {
            Call::Bid { .. } => {
                state.phase = Phase::Standing;
                state.contract = Some(record.call);
                state.owner = auction.seat_at(i).map(|s| s.side());
            }
            Call::Double => {
                if state.phase == Phase::Standing {
                    state.phase = Phase::Doubled;
                }
            }
            Call::Redouble => {
                if state.phase == Phase::Doubled {
                    state.phase = Phase::Redoubled;
                }
            }
            Call::Pass => {}
        }
    }
    state
}

/// Whether the perspective seat may make `call` right now.
///
/// When the contract owner's side is unknown, doubling rights degrade
/// to token order: a double needs an undoubled standing contract, a
/// redouble needs the most recent non-pass to be a double. Both are
/// exactly what `Phase` tracks.
pub fn is_legal(call: &Call, auction: &Auction) -> bool {
    let state = contract_state(auction);
    let acting = auction.perspective.side();
    match call {
        Call::Pass => true,
        Call::Bid { level, .. } => {
            if !(1..=7).contains(level) {
                return false;
            }
            match state.contract {
                Some(contract) => call.outranks(&contract),
                None => true,
            }
        }
        Call::Double => {
            state.phase == Phase::Standing && state.owner.map_or(true, |owner| owner != acting)
        }
        Call::Redouble => {
            state.phase == Phase::Doubled && state.owner.map_or(true, |owner| owner == acting)
        }
    }
}

/// Route a proposed call through the guard. Illegal proposals become
/// Pass; Pass is always legal, so the result is a fixed point.
pub fn ensure_legal(proposed: Call, auction: &Auction) -> Call {
    if is_legal(&proposed, auction) {
        proposed
    } else {
        tracing::debug!(proposed = %proposed, "illegal proposal downgraded to pass");
        Call::Pass
    }
}
