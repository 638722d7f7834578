use crate::strain::Strain;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Call {
    Pass,
    Double,
    Redouble,
    Bid { level: u8, strain: Strain },
}

impl Call {
    pub fn bid(level: u8, strain: Strain) -> Self {
        Call::Bid { level, strain }
    }

    pub fn is_bid(&self) -> bool {
        matches!(self, Call::Bid { .. })
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Call::Pass)
    }

    /// Returns the level of this call, if it's a bid.
    pub fn level(&self) -> Option<u8> {
        match self {
            Call::Bid { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Returns the strain of this call, if it's a bid.
    pub fn strain(&self) -> Option<Strain> {
        match self {
            Call::Bid { strain, .. } => Some(*strain),
            _ => None,
        }
    }

    /// Returns the suit of this call, if it's a suited bid.
    pub fn suit(&self) -> Option<Suit> {
        self.strain().and_then(|s| s.to_suit())
    }

    /// Ordering key for a contract bid: level first, then strain rank.
    /// Non-bid calls have no rank.
    pub fn rank(&self) -> Option<(u8, u8)> {
        match self {
            Call::Bid { level, strain } => Some((*level, strain.idx() as u8)),
            _ => None,
        }
    }

    /// True iff `self` is a strictly higher contract than `other`.
    ///
    /// Permissive on purpose: when either side has no rank (pass,
    /// double, redouble), the comparison succeeds so a proposed
    /// contract is never blocked by a malformed or non-bid token.
    pub fn outranks(&self, other: &Call) -> bool {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => a > b,
            _ => true,
        }
    }

    pub fn render(self) -> String {
        match self {
            Call::Pass => "P".to_string(),
            Call::Double => "X".to_string(),
            Call::Redouble => "XX".to_string(),
            Call::Bid { level, strain } => format!("{}{}", level, strain.to_char()),
        }
    }
}

impl FromStr for Call {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_uppercase();
        if s == "P" || s == "PASS" {
            return Ok(Call::Pass);
        }
        if s == "X" || s == "DBL" || s == "DOUBLE" {
            return Ok(Call::Double);
        }
        if s == "XX" || s == "RDBL" || s == "REDOUBLE" {
            return Ok(Call::Redouble);
        }
        if s.len() >= 2 {
            let level_char = s.chars().next().ok_or(())?;
            let level = level_char.to_digit(10).ok_or(())? as u8;
            if (1..=7).contains(&level) {
                let strain_char = s.chars().nth(1).ok_or(())?;
                if let Some(strain) = Strain::from_char(strain_char) {
                    return Ok(Call::Bid { level, strain });
                }
            }
        }
        Err(())
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(s: &str) -> Call {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_round_trip() {
        for s in ["P", "X", "XX", "1C", "3N", "7S"] {
            assert_eq!(call(s).render(), s);
        }
        assert_eq!(call("pass"), Call::Pass);
        assert_eq!(call("1nt"), Call::bid(1, Strain::Notrump));
        assert!("8C".parse::<Call>().is_err());
        assert!("0D".parse::<Call>().is_err());
        assert!("zzz".parse::<Call>().is_err());
    }

    #[test]
    fn test_rank() {
        assert_eq!(call("1C").rank(), Some((1, 0)));
        assert_eq!(call("1N").rank(), Some((1, 4)));
        assert_eq!(call("P").rank(), None);
        assert_eq!(call("X").rank(), None);
    }

    #[test]
    fn test_outranks() {
        assert!(call("1D").outranks(&call("1C")));
        assert!(call("2C").outranks(&call("1N")));
        assert!(!call("1C").outranks(&call("1C")));
        assert!(!call("1H").outranks(&call("2C")));
        // Permissive when either side has no rank.
        assert!(call("1C").outranks(&call("P")));
        assert!(call("X").outranks(&call("7N")));
    }
}
