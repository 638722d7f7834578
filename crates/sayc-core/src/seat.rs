use serde::{Deserialize, Serialize};
use std::fmt;

/// A seat at the table. Turn order rotates N -> E -> S -> W -> N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Seat {
    #[default]
    North,
    East,
    South,
    West,
}

/// A partnership: North-South or East-West.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    NS,
    EW,
}

impl Side {
    pub fn contains(self, seat: Seat) -> bool {
        seat.side() == self
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::NS => Side::EW,
            Side::EW => Side::NS,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Side::NS => 0,
            Side::EW => 1,
        }
    }
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub fn side(self) -> Side {
        match self {
            Seat::North | Seat::South => Side::NS,
            Seat::East | Seat::West => Side::EW,
        }
    }

    /// The next seat in turn order.
    pub fn next(self) -> Self {
        match self {
            Seat::North => Seat::East,
            Seat::East => Seat::South,
            Seat::South => Seat::West,
            Seat::West => Seat::North,
        }
    }

    /// Rotate forward by `n` positions in turn order.
    pub fn advance(self, n: usize) -> Self {
        Seat::ALL[(self.idx() + n) % 4]
    }

    pub fn partner(self) -> Self {
        self.next().next()
    }

    /// Left-hand opponent (next to act after us).
    pub fn lho(self) -> Self {
        self.next()
    }

    /// Right-hand opponent (acts immediately before us).
    pub fn rho(self) -> Self {
        self.partner().next()
    }

    pub fn idx(self) -> usize {
        match self {
            Seat::North => 0,
            Seat::East => 1,
            Seat::South => 2,
            Seat::West => 3,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Seat::North),
            'E' => Some(Seat::East),
            'S' => Some(Seat::South),
            'W' => Some(Seat::West),
            _ => None,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Deal vulnerability, relative to the perspective side: `we` is the
/// side whose decisions the engine makes. Fixed for the whole deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Vulnerability {
    pub we: bool,
    pub they: bool,
}

impl Vulnerability {
    pub fn new(we: bool, they: bool) -> Self {
        Self { we, they }
    }

    pub fn none() -> Self {
        Self::default()
    }
}
