//! Line-drawing character sets and junction arms.

// ─── CharSet ─────────────────────────────────────────────────────────────────

/// Which character set to use for bracket lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    #[default]
    Unicode,
    Ascii,
}

// ─── Line glyphs ─────────────────────────────────────────────────────────────

/// Glyphs indexed by the arms they join.
///
/// A bracket only ever needs straight runs, the two right-facing and two
/// left-facing elbow corners, and the tees where a connector meets its
/// parent's outgoing line.
pub struct LineGlyphs {
    pub run_h: char,
    pub run_v: char,
    /// Corners, keyed by the arms they join.
    pub down_right: char,
    pub down_left: char,
    pub up_right: char,
    pub up_left: char,
    /// Tees, keyed by the missing arm.
    pub no_left: char,
    pub no_right: char,
    pub no_up: char,
    pub no_down: char,
    pub all: char,
}

pub const UNICODE_GLYPHS: LineGlyphs = LineGlyphs {
    run_h: '─',
    run_v: '│',
    down_right: '┌',
    down_left: '┐',
    up_right: '└',
    up_left: '┘',
    no_left: '├',
    no_right: '┤',
    no_up: '┬',
    no_down: '┴',
    all: '┼',
};

pub const ASCII_GLYPHS: LineGlyphs = LineGlyphs {
    run_h: '-',
    run_v: '|',
    down_right: '+',
    down_left: '+',
    up_right: '+',
    up_left: '+',
    no_left: '+',
    no_right: '+',
    no_up: '+',
    no_down: '+',
    all: '+',
};

impl CharSet {
    pub fn glyphs(self) -> &'static LineGlyphs {
        match self {
            CharSet::Unicode => &UNICODE_GLYPHS,
            CharSet::Ascii => &ASCII_GLYPHS,
        }
    }
}

// ─── Arms ────────────────────────────────────────────────────────────────────

/// Which arms of a line cell are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Arms {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Arms {
    pub const NONE: Arms = Arms::new(false, false, false, false);

    pub const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    /// Merge two Arms by OR-ing each direction.
    pub fn merge(self, other: Self) -> Self {
        Self {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }

    /// Character for these arms in the given CharSet.
    pub fn to_char(self, cs: CharSet) -> char {
        let g = cs.glyphs();
        match (self.up, self.down, self.left, self.right) {
            (false, false, false, false) => ' ',
            (false, false, true, true) => g.run_h,
            (true, true, false, false) => g.run_v,
            (false, true, false, true) => g.down_right,
            (false, true, true, false) => g.down_left,
            (true, false, false, true) => g.up_right,
            (true, false, true, false) => g.up_left,
            (true, true, false, true) => g.no_left,
            (true, true, true, false) => g.no_right,
            (false, true, true, true) => g.no_up,
            (true, false, true, true) => g.no_down,
            (true, true, true, true) => g.all,
            // stub ends
            (true, false, false, false) | (false, true, false, false) => g.run_v,
            (false, false, true, false) | (false, false, false, true) => g.run_h,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
