//! Sub-bracket geometry: leaf placement and the round-by-round halving sweep.
//!
//! Leaves are stacked top to bottom, index 0 highest. Each round merges
//! nodes `2k` and `2k + 1` into a parent at their vertical midpoint, one
//! `round_width` further along the draw direction. A trailing unpaired node
//! (a bye) moves one step along x and keeps its y.

use super::types::{
    Connector, DrawDirection, LeafLabel, Position, RoundLayout, Segment, SubBracketLayout,
};
use crate::config::LayoutConfig;

/// Horizontal offset of a leaf's label from its entry-line endpoint.
const LABEL_INSET: f64 = 0.5;
/// Label baseline lift above the entry line.
const LABEL_LIFT: f64 = 0.1;

/// `ceil(log2(n))`, with 0 for `n <= 1`.
pub fn num_rounds(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

/// Starting x of every leaf for the given direction.
pub fn leaf_x(direction: DrawDirection, rounds: usize, cfg: &LayoutConfig) -> f64 {
    match direction {
        DrawDirection::Right => 0.0,
        DrawDirection::Left => cfg.round_width * rounds as f64,
    }
}

/// Leaf positions for `n` entrants.
pub fn leaf_positions(n: usize, direction: DrawDirection, cfg: &LayoutConfig) -> Vec<Position> {
    let x = leaf_x(direction, num_rounds(n), cfg);
    (0..n)
        .map(|i| Position::new(x, (n as f64 - i as f64 - 0.5) * cfg.unit_height))
        .collect()
}

/// Merge one round of positions pairwise.
pub fn advance_round(
    round: usize,
    inputs: &[Position],
    direction: DrawDirection,
    cfg: &LayoutConfig,
) -> RoundLayout {
    let step = cfg.round_width * direction.sign();
    let elbow = cfg.elbow_offset() * direction.sign();

    let mut outputs = Vec::with_capacity(inputs.len().div_ceil(2));
    let mut connectors = Vec::with_capacity(inputs.len() / 2);
    let mut byes = Vec::new();

    for (k, pair) in inputs.chunks(2).enumerate() {
        match *pair {
            [a, b] => {
                let next_x = a.x + step;
                let elbow_x = a.x + elbow;
                let next_y = (a.y + b.y) / 2.0;
                connectors.push(Connector {
                    upper_stub: Segment::new(a.x, a.y, elbow_x, a.y),
                    lower_stub: Segment::new(b.x, b.y, elbow_x, b.y),
                    elbow: Segment::new(elbow_x, a.y.min(b.y), elbow_x, a.y.max(b.y)),
                    to_parent: Segment::new(elbow_x, next_y, next_x, next_y),
                });
                outputs.push(Position::new(next_x, next_y));
            }
            [a] => {
                log::warn!("round {round}: node {} advances on a bye", 2 * k);
                byes.push(2 * k);
                outputs.push(Position::new(a.x + step, a.y));
            }
            _ => unreachable!("chunks(2) yields one or two items"),
        }
    }

    log::debug!(
        "round {round}: {} -> {} nodes, {} connectors",
        inputs.len(),
        outputs.len(),
        connectors.len()
    );

    RoundLayout {
        round,
        inputs: inputs.to_vec(),
        outputs,
        connectors,
        byes,
    }
}

/// Compute the full geometry for one side of the bracket.
pub fn layout_sub_bracket<S: AsRef<str>>(
    labels: &[S],
    direction: DrawDirection,
    cfg: &LayoutConfig,
) -> SubBracketLayout {
    let n = labels.len();
    let rounds_total = num_rounds(n);
    let leaves = leaf_positions(n, direction, cfg);
    let edge_x = leaf_x(direction, rounds_total, cfg);

    let leaf_labels = labels
        .iter()
        .zip(&leaves)
        .map(|(text, p)| {
            let (line, anchor_x) = match direction {
                DrawDirection::Right => (
                    Segment::new(edge_x - cfg.entry_line, p.y, edge_x, p.y),
                    edge_x - LABEL_INSET,
                ),
                DrawDirection::Left => (
                    Segment::new(edge_x, p.y, edge_x + cfg.entry_line, p.y),
                    edge_x + LABEL_INSET,
                ),
            };
            LeafLabel {
                text: text.as_ref().to_string(),
                line,
                anchor: Position::new(anchor_x, p.y + LABEL_LIFT),
            }
        })
        .collect();

    let mut rounds = Vec::with_capacity(rounds_total);
    let mut current = leaves.clone();
    for r in 0..rounds_total {
        let round = advance_round(r, &current, direction, cfg);
        current = round.outputs.clone();
        rounds.push(round);
    }

    SubBracketLayout {
        direction,
        num_rounds: rounds_total,
        leaves,
        labels: leaf_labels,
        rounds,
        final_position: current.first().copied(),
        x_limits: (-2.0, cfg.round_width * (rounds_total as f64 + 1.0)),
        y_limits: (-1.0, n as f64 * cfg.unit_height + 1.0),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
