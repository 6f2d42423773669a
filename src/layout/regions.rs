//! Region crossover: each physical side shows the top of one seeded region
//! and the bottom of the other.

use crate::error::{BracketError, Result};
use crate::seeding::BracketSize;

/// Split both regions at the size's split point and recombine them.
///
/// Returns `(physical_left, physical_right)` where
/// `physical_left = left[..k] ++ right[k..]` and
/// `physical_right = right[..k] ++ left[k..]`.
pub fn split_regions<S: Clone>(
    left: &[S],
    right: &[S],
    size: BracketSize,
) -> Result<(Vec<S>, Vec<S>)> {
    let half = size.half();
    for (name, side) in [("left", left.len()), ("right", right.len())] {
        if side != half {
            return Err(BracketError::invalid_argument(format!(
                "{name} region has {side} entrants; a {size}-team bracket needs {half} per side"
            )));
        }
    }

    let k = size.split_point();
    let (left_top, left_bottom) = left.split_at(k);
    let (right_top, right_bottom) = right.split_at(k);

    let physical_left = [left_top, right_bottom].concat();
    let physical_right = [right_top, left_bottom].concat();
    Ok((physical_left, physical_right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(prefix: &str, n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{prefix}{i}")).collect()
    }

    #[test]
    fn test_split_32() {
        let l = names("L", 16);
        let r = names("R", 16);
        let (pl, pr) = split_regions(&l, &r, BracketSize::ThirtyTwo).unwrap();
        assert_eq!(pl, [&l[..8], &r[8..]].concat());
        assert_eq!(pr, [&r[..8], &l[8..]].concat());
    }

    #[test]
    fn test_split_16() {
        let l = names("L", 8);
        let r = names("R", 8);
        let (pl, pr) = split_regions(&l, &r, BracketSize::Sixteen).unwrap();
        assert_eq!(pl, vec!["L0", "L1", "L2", "L3", "R4", "R5", "R6", "R7"]);
        assert_eq!(pr, vec!["R0", "R1", "R2", "R3", "L4", "L5", "L6", "L7"]);
    }

    #[test]
    fn test_wrong_length() {
        let err = split_regions(&names("L", 8), &names("R", 7), BracketSize::Sixteen).unwrap_err();
        assert!(matches!(err, BracketError::InvalidArgument(_)));
        assert!(err.to_string().contains("right region has 7"));
        assert!(split_regions(&names("L", 8), &names("R", 8), BracketSize::ThirtyTwo).is_err());
    }
}
