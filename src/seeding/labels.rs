//! Seeded display labels in first-round matchup order.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::{MatchupPair, TeamTable};
use crate::error::{BracketError, Result};

/// Two seeds whose display labels trade places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapPair(pub u32, pub u32);

static SWAP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*[,:/]\s*(\d+)\s*$").expect("swap pattern is valid")
});

impl FromStr for SwapPair {
    type Err = BracketError;

    /// Accepts `A,B`, `A:B` or `A/B`.
    fn from_str(s: &str) -> Result<Self> {
        let caps = SWAP_RE.captures(s).ok_or_else(|| {
            BracketError::invalid_argument(format!("swap pair '{s}' is not of the form A,B"))
        })?;
        let parse = |i: usize| {
            caps[i]
                .parse::<u32>()
                .map_err(|e| BracketError::invalid_argument(format!("seed '{}': {e}", &caps[i])))
        };
        Ok(SwapPair(parse(1)?, parse(2)?))
    }
}

/// Display label for a seeded team.
pub fn seed_label(seed: u32, suffix: &str, team: &str) -> String {
    format!("#{seed} {suffix} - {team}")
}

/// 0-based row of `seed` in a roster of `len` teams.
fn index_of(seed: u32, len: usize) -> Result<usize> {
    match (seed as usize).checked_sub(1) {
        Some(idx) if idx < len => Ok(idx),
        _ => Err(BracketError::invalid_argument(format!(
            "seed {seed} is not in the roster (1..={len})"
        ))),
    }
}

/// Seed `table` in row order and emit labels in matchup-pair order.
///
/// With `swap`, the labels of the two seeds trade places while seed
/// numbers and pairing order stay fixed.
pub fn tournament_seeds(
    table: &TeamTable,
    pairs: &[MatchupPair],
    swap: Option<SwapPair>,
    suffix: &str,
) -> Result<Vec<String>> {
    let mut labels: Vec<String> = table
        .teams()
        .enumerate()
        .map(|(i, team)| seed_label(i as u32 + 1, suffix, team))
        .collect();

    if let Some(SwapPair(a, b)) = swap {
        let ia = index_of(a, labels.len())?;
        let ib = index_of(b, labels.len())?;
        labels.swap(ia, ib);
        log::debug!("swapped labels of seeds {a} and {b}");
    }

    let mut ordered = Vec::with_capacity(pairs.len() * 2);
    for p in pairs {
        let ia = index_of(p.seed_a, labels.len())?;
        let ib = index_of(p.seed_b, labels.len())?;
        ordered.push(labels[ia].clone());
        ordered.push(labels[ib].clone());
    }
    Ok(ordered)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeding::BracketSize;

    fn eight() -> TeamTable {
        TeamTable::from_names(["A", "B", "C", "D", "E", "F", "G", "H"])
    }

    #[test]
    fn test_label_format() {
        assert_eq!(seed_label(3, "3A", "Ames"), "#3 3A - Ames");
        assert_eq!(seed_label(1, "", "Ames"), "#1  - Ames");
    }

    #[test]
    fn test_pair_order() {
        let out = tournament_seeds(&eight(), BracketSize::Sixteen.seed_pairs(), None, "").unwrap();
        let teams: Vec<&str> = out.iter().map(|l| l.rsplit(" - ").next().unwrap()).collect();
        assert_eq!(teams, vec!["A", "H", "D", "E", "C", "F", "B", "G"]);
        assert_eq!(out[0], "#1  - A");
        assert_eq!(out[1], "#8  - H");
    }

    #[test]
    fn test_swap_only_changes_two_labels() {
        let pairs = BracketSize::Sixteen.seed_pairs();
        let plain = tournament_seeds(&eight(), pairs, None, "").unwrap();
        let swapped = tournament_seeds(&eight(), pairs, Some(SwapPair(1, 2)), "").unwrap();
        assert_eq!(plain.len(), swapped.len());
        // seed 1 sits at position 0, seed 2 at position 6
        assert_eq!(swapped[0], plain[6]);
        assert_eq!(swapped[6], plain[0]);
        for i in [1, 2, 3, 4, 5, 7] {
            assert_eq!(swapped[i], plain[i]);
        }
    }

    #[test]
    fn test_swap_unknown_seed() {
        let err = tournament_seeds(
            &eight(),
            BracketSize::Sixteen.seed_pairs(),
            Some(SwapPair(1, 9)),
            "",
        )
        .unwrap_err();
        assert!(matches!(err, BracketError::InvalidArgument(_)));
    }

    #[test]
    fn test_short_roster() {
        let t = TeamTable::from_names(["A", "B", "C"]);
        assert!(tournament_seeds(&t, BracketSize::Sixteen.seed_pairs(), None, "").is_err());
    }

    #[test]
    fn test_swap_pair_from_str() {
        assert_eq!("1,2".parse::<SwapPair>().unwrap(), SwapPair(1, 2));
        assert_eq!(" 3 : 14 ".parse::<SwapPair>().unwrap(), SwapPair(3, 14));
        assert_eq!("5/12".parse::<SwapPair>().unwrap(), SwapPair(5, 12));
        assert!("1-2".parse::<SwapPair>().is_err());
        assert!("a,b".parse::<SwapPair>().is_err());
    }
}
