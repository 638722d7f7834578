use crate::call::Call;
use crate::seat::{Seat, Vulnerability};
use serde::{Deserialize, Serialize};

/// One auction log entry. The seat tag is optional because imported
/// records are often sparse; the rationale is written by the engine
/// for UI display and never read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    pub call: Call,
    pub seat: Option<Seat>,
    pub rationale: Option<String>,
}

impl CallRecord {
    pub fn new(call: Call) -> Self {
        Self {
            call,
            seat: None,
            rationale: None,
        }
    }

    pub fn by(seat: Seat, call: Call) -> Self {
        Self {
            call,
            seat: Some(seat),
            rationale: None,
        }
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }
}

/// The auction log for one deal: an append-only sequence of calls plus
/// dealer and perspective metadata. The engine is stateless between
/// decisions and re-derives everything from this log each time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Auction {
    /// Who acts first. `None` for logs imported without dealer data;
    /// seat inference then leans on explicit per-call tags.
    pub dealer: Option<Seat>,
    /// The seat whose decisions this engine instance makes.
    pub perspective: Seat,
    pub vulnerability: Vulnerability,
    pub records: Vec<CallRecord>,
}

impl Auction {
    /// Start an auction for the given perspective seat, per-deal
    /// vulnerability relative to that seat's side.
    pub fn start(perspective: Seat, we_vulnerable: bool, they_vulnerable: bool) -> Self {
        Self {
            dealer: None,
            perspective,
            vulnerability: Vulnerability::new(we_vulnerable, they_vulnerable),
            records: Vec::new(),
        }
    }

    pub fn new(dealer: Seat) -> Self {
        Self {
            dealer: Some(dealer),
            perspective: dealer,
            vulnerability: Vulnerability::none(),
            records: Vec::new(),
        }
    }

    pub fn with_perspective(mut self, seat: Seat) -> Self {
        self.perspective = seat;
        self
    }

    pub fn with_vulnerability(mut self, vulnerability: Vulnerability) -> Self {
        self.vulnerability = vulnerability;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: CallRecord) {
        self.records.push(record);
    }

    /// Append an untagged call.
    pub fn add_call(&mut self, call: Call) {
        self.records.push(CallRecord::new(call));
    }

    /// Append a call tagged with its seat.
    pub fn add_call_by(&mut self, seat: Seat, call: Call) {
        self.records.push(CallRecord::by(seat, call));
    }

    /// Parse and add a single call like "1C", "P", or "X", tagging it
    /// with the rotation seat when the dealer is known.
    /// Panics on invalid input — use for tests and known-good data only.
    pub fn bid(&mut self, s: &str) {
        let call: Call = s.parse().expect("invalid call");
        match self.seat_to_act() {
            Some(seat) => self.add_call_by(seat, call),
            None => self.add_call(call),
        }
    }

    /// Parse and add multiple space-separated calls like "P 1C P".
    /// Panics on invalid input — use for tests and known-good data only.
    pub fn bids(&mut self, s: &str) {
        for token in s.split_whitespace() {
            self.bid(token);
        }
    }

    /// Build an auction from space-separated calls, with perspective
    /// set to the seat next to act. Panics on invalid input.
    pub fn bidding(dealer: Seat, calls: &str) -> Self {
        let mut auction = Self::new(dealer);
        auction.bids(calls);
        auction.perspective = auction.seat_to_act().unwrap_or(dealer);
        auction
    }

    /// The seat that made the call at `index`: the explicit tag when
    /// present, else rotation from the nearest tagged record (in either
    /// direction), else rotation from the dealer. `None` when nothing
    /// anchors rotation.
    pub fn seat_at(&self, index: usize) -> Option<Seat> {
        if let Some(record) = self.records.get(index) {
            if let Some(seat) = record.seat {
                return Some(seat);
            }
        }
        self.anchor(index)
            .map(|(i, seat)| seat.advance(rotation_offset(i, index)))
    }

    /// The seat on play after all logged calls, by rotation.
    pub fn seat_to_act(&self) -> Option<Seat> {
        let index = self.records.len();
        self.anchor(index)
            .map(|(i, seat)| seat.advance(rotation_offset(i, index)))
    }

    /// The rotation anchor nearest to `index`: the closest tagged
    /// record (earlier records win ties), falling back to the dealer
    /// at index 0.
    fn anchor(&self, index: usize) -> Option<(usize, Seat)> {
        let mut best: Option<(usize, Seat)> = None;
        for (i, record) in self.records.iter().enumerate() {
            if let Some(seat) = record.seat {
                let dist = index.abs_diff(i);
                if best.map_or(true, |(b, _)| dist < index.abs_diff(b)) {
                    best = Some((i, seat));
                }
            }
        }
        best.or_else(|| self.dealer.map(|d| (0, d)))
    }

    /// Index and record of the opening (first) contract call.
    pub fn opening(&self) -> Option<(usize, &CallRecord)> {
        self.records.iter().enumerate().find(|(_, r)| r.call.is_bid())
    }

    /// The most recent contract call. Doubles and redoubles never
    /// change the last contract.
    pub fn last_bid(&self) -> Option<(usize, &CallRecord)> {
        self.records
            .iter()
            .enumerate()
            .rev()
            .find(|(_, r)| r.call.is_bid())
    }

    /// The most recent call that was not a pass.
    pub fn last_nonpass(&self) -> Option<(usize, &CallRecord)> {
        self.records
            .iter()
            .enumerate()
            .rev()
            .find(|(_, r)| !r.call.is_pass())
    }

    /// True once any contract call has been made.
    pub fn is_open(&self) -> bool {
        self.records.iter().any(|r| r.call.is_bid())
    }

    /// Three passes after a call, or four consecutive passes, end the
    /// auction. The surrounding game layer owns this decision; the
    /// engine only exposes the predicate.
    pub fn is_finished(&self) -> bool {
        let n = self.records.len();
        if n < 4 {
            return false;
        }
        if self.records.iter().all(|r| r.call.is_pass()) {
            return true;
        }
        self.records[n - 3..].iter().all(|r| r.call.is_pass())
    }
}

/// Forward rotation steps from record index `from` to index `to`,
/// walking backward around the table when `to` precedes `from`.
fn rotation_offset(from: usize, to: usize) -> usize {
    if to >= from {
        (to - from) % 4
    } else {
        (4 - (from - to) % 4) % 4
    }
}
