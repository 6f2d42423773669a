//! Round-one seeding: supported bracket sizes and their matchup tables.

pub mod labels;
pub mod table;

pub use labels::{SwapPair, tournament_seeds};
pub use table::TeamTable;

use serde::{Deserialize, Serialize};

use crate::error::{BracketError, Result};

// ─── MatchupPair ─────────────────────────────────────────────────────────────

/// Two seeds scheduled to meet in the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchupPair {
    pub seed_a: u32,
    pub seed_b: u32,
}

impl MatchupPair {
    pub const fn new(seed_a: u32, seed_b: u32) -> Self {
        Self { seed_a, seed_b }
    }
}

/// First-round order for a 16-seed half of a 32-entrant bracket.
const PAIRS_32: &[MatchupPair] = &[
    MatchupPair::new(1, 16),
    MatchupPair::new(8, 9),
    MatchupPair::new(4, 13),
    MatchupPair::new(5, 12),
    MatchupPair::new(3, 14),
    MatchupPair::new(6, 11),
    MatchupPair::new(7, 10),
    MatchupPair::new(2, 15),
];

/// First-round order for an 8-seed half of a 16-entrant bracket.
const PAIRS_16: &[MatchupPair] = &[
    MatchupPair::new(1, 8),
    MatchupPair::new(4, 5),
    MatchupPair::new(3, 6),
    MatchupPair::new(2, 7),
];

// ─── BracketSize ─────────────────────────────────────────────────────────────

/// Total entrant count of a supported bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracketSize {
    Sixteen,
    ThirtyTwo,
}

impl BracketSize {
    pub fn entrants(self) -> usize {
        match self {
            BracketSize::Sixteen => 16,
            BracketSize::ThirtyTwo => 32,
        }
    }

    /// Entrants per physical side (and per seeded region).
    pub fn half(self) -> usize {
        self.entrants() / 2
    }

    /// Index where a side's list splits into its top and bottom sub-halves.
    pub fn split_point(self) -> usize {
        self.entrants() / 4
    }

    pub fn seed_pairs(self) -> &'static [MatchupPair] {
        match self {
            BracketSize::Sixteen => PAIRS_16,
            BracketSize::ThirtyTwo => PAIRS_32,
        }
    }
}

impl TryFrom<u32> for BracketSize {
    type Error = BracketError;

    fn try_from(n: u32) -> Result<Self> {
        match n {
            16 => Ok(BracketSize::Sixteen),
            32 => Ok(BracketSize::ThirtyTwo),
            other => Err(BracketError::invalid_configuration(format!(
                "bracket size {other} is not supported; use 16 or 32"
            ))),
        }
    }
}

impl std::fmt::Display for BracketSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.entrants())
    }
}

/// Matchup pairs for a bracket of `bracket_size` total entrants.
pub fn seed_pairs(bracket_size: u32) -> Result<&'static [MatchupPair]> {
    BracketSize::try_from(bracket_size).map(BracketSize::seed_pairs)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
