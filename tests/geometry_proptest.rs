/// Property-based tests for sub-bracket geometry using proptest
///
/// These tests check the layout invariants over arbitrary leaf counts,
/// including counts that are not powers of two (byes).
use bracket_drawer::LayoutConfig;
use bracket_drawer::layout::geometry::{layout_sub_bracket, num_rounds};
use bracket_drawer::layout::{DrawDirection, MatchTree, split_regions};
use bracket_drawer::seeding::BracketSize;
use proptest::prelude::*;

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("T{i}")).collect()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// Strategy for a geometry config with sensible positive constants
fn config_strategy() -> impl Strategy<Value = LayoutConfig> {
    (0.25f64..4.0, 1.0f64..10.0).prop_map(|(unit_height, round_width)| LayoutConfig {
        unit_height,
        round_width,
        ..LayoutConfig::default()
    })
}

proptest! {
    #[test]
    fn test_single_final_after_ceil_log2_rounds(n in 1usize..=64) {
        let cfg = LayoutConfig::default();
        let l = layout_sub_bracket(&labels(n), DrawDirection::Right, &cfg);

        prop_assert_eq!(l.num_rounds, num_rounds(n));
        prop_assert!(1usize << l.num_rounds >= n);
        prop_assert!(l.num_rounds == 0 || 1usize << (l.num_rounds - 1) < n);
        prop_assert!(l.final_position.is_some());
        if let Some(last) = l.rounds.last() {
            prop_assert_eq!(last.outputs.len(), 1);
        }
    }

    #[test]
    fn test_parents_are_midpoints(n in 2usize..=64, cfg in config_strategy()) {
        let l = layout_sub_bracket(&labels(n), DrawDirection::Right, &cfg);
        for round in &l.rounds {
            prop_assert_eq!(round.outputs.len(), round.inputs.len().div_ceil(2));
            for (k, out) in round.outputs.iter().enumerate() {
                let a = round.inputs[2 * k];
                prop_assert!(approx(out.x, a.x + cfg.round_width));
                match round.inputs.get(2 * k + 1) {
                    Some(b) => {
                        prop_assert!(approx(out.y, (a.y + b.y) / 2.0));
                    }
                    None => {
                        prop_assert!(approx(out.y, a.y));
                    }
                }
            }
        }
    }

    #[test]
    fn test_directions_mirror(n in 1usize..=64, cfg in config_strategy()) {
        let right = layout_sub_bracket(&labels(n), DrawDirection::Right, &cfg);
        let left = layout_sub_bracket(&labels(n), DrawDirection::Left, &cfg);
        let w = cfg.round_width * right.num_rounds as f64;

        for (a, b) in right.leaves.iter().zip(&left.leaves) {
            prop_assert!(approx(b.x, w - a.x));
            prop_assert!(approx(a.y, b.y));
        }
        for (rr, lr) in right.rounds.iter().zip(&left.rounds) {
            for (a, b) in rr.outputs.iter().zip(&lr.outputs) {
                prop_assert!(approx(b.x, w - a.x));
                prop_assert!(approx(a.y, b.y));
            }
        }
    }

    #[test]
    fn test_leaves_descend(n in 1usize..=64, cfg in config_strategy()) {
        let l = layout_sub_bracket(&labels(n), DrawDirection::Right, &cfg);
        for (i, p) in l.leaves.iter().enumerate() {
            prop_assert!(approx(p.y, (n as f64 - i as f64 - 0.5) * cfg.unit_height));
        }
    }

    #[test]
    fn test_every_leaf_reaches_final(n in 1usize..=40) {
        let l = layout_sub_bracket(&labels(n), DrawDirection::Left, &LayoutConfig::default());
        let tree = MatchTree::from_layout(&l);
        let fin = tree.final_slot().unwrap();
        for i in 0..n {
            let path = tree.path_to_final(i);
            prop_assert_eq!(path.len(), l.num_rounds + 1);
            prop_assert_eq!(*path.last().unwrap(), fin);
        }
    }

    #[test]
    fn test_region_split_keeps_every_team(thirty_two in any::<bool>()) {
        let size = if thirty_two { BracketSize::ThirtyTwo } else { BracketSize::Sixteen };
        let left: Vec<String> = (0..size.half()).map(|i| format!("L{i}")).collect();
        let right: Vec<String> = (0..size.half()).map(|i| format!("R{i}")).collect();
        let (pl, pr) = split_regions(&left, &right, size).unwrap();
        let mut all: Vec<String> = pl.into_iter().chain(pr).collect();
        let mut expected: Vec<String> = left.into_iter().chain(right).collect();
        all.sort();
        expected.sort();
        prop_assert_eq!(all, expected);
    }
}
