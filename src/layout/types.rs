//! Layout types: Position, DrawDirection, Segment, Connector, RoundLayout,
//! SubBracketLayout.

use serde::{Deserialize, Serialize};

// ─── Position ────────────────────────────────────────────────────────────────

/// A point in layout units. `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ─── DrawDirection ───────────────────────────────────────────────────────────

/// Which way successive rounds grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawDirection {
    /// Rounds advance toward +x (physical-left panel).
    Right,
    /// Rounds advance toward -x (physical-right panel).
    Left,
}

impl DrawDirection {
    pub fn sign(self) -> f64 {
        match self {
            DrawDirection::Right => 1.0,
            DrawDirection::Left => -1.0,
        }
    }
}

// ─── Segment ─────────────────────────────────────────────────────────────────

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Position,
    pub to: Position,
}

impl Segment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            from: Position::new(x1, y1),
            to: Position::new(x2, y2),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }

    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }
}

// ─── Connector ───────────────────────────────────────────────────────────────

/// Lines joining two sibling nodes to their parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Child `2k` to the elbow.
    pub upper_stub: Segment,
    /// Child `2k + 1` to the elbow.
    pub lower_stub: Segment,
    /// Vertical join at the elbow x, spanning both children.
    pub elbow: Segment,
    /// Elbow to parent.
    pub to_parent: Segment,
}

impl Connector {
    pub fn segments(&self) -> [Segment; 4] {
        [self.upper_stub, self.lower_stub, self.elbow, self.to_parent]
    }
}

// ─── RoundLayout ─────────────────────────────────────────────────────────────

/// One elimination round of a sub-bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundLayout {
    /// 0-based round number.
    pub round: usize,
    /// Node positions entering the round.
    pub inputs: Vec<Position>,
    /// Node positions leaving the round; `outputs[k]` comes from inputs
    /// `2k` and `2k + 1` (or a lone bye at `2k`).
    pub outputs: Vec<Position>,
    pub connectors: Vec<Connector>,
    /// Input indices that advanced without an opponent.
    pub byes: Vec<usize>,
}

// ─── LeafLabel ───────────────────────────────────────────────────────────────

/// A first-round entrant: its entry line and where its text is centred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafLabel {
    pub text: String,
    pub line: Segment,
    pub anchor: Position,
}

// ─── SubBracketLayout ────────────────────────────────────────────────────────

/// Full geometry for one side of the bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubBracketLayout {
    pub direction: DrawDirection,
    pub num_rounds: usize,
    pub leaves: Vec<Position>,
    pub labels: Vec<LeafLabel>,
    pub rounds: Vec<RoundLayout>,
    /// Winner slot after the last round; `None` only for an empty side.
    pub final_position: Option<Position>,
    /// Axis limits `(min, max)` for this side's panel.
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
}

impl SubBracketLayout {
    /// Every line drawn for this side, entry lines first.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.labels.iter().map(|l| l.line).chain(
            self.rounds
                .iter()
                .flat_map(|r| r.connectors.iter().flat_map(|c| c.segments())),
        )
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sign() {
        assert_eq!(DrawDirection::Right.sign(), 1.0);
        assert_eq!(DrawDirection::Left.sign(), -1.0);
    }

    #[test]
    fn test_segment_orientation() {
        assert!(Segment::new(0.0, 1.0, 3.0, 1.0).is_horizontal());
        assert!(Segment::new(2.0, 1.0, 2.0, 5.0).is_vertical());
        assert!(!Segment::new(0.0, 0.0, 1.0, 1.0).is_horizontal());
    }
}
