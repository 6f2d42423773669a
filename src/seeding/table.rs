//! TeamTable — the tabular roster consumed by seeding.
//!
//! Rows keep their input order; that order is the seed order.

use crate::error::{BracketError, Result};

/// Column that must be present in every roster.
pub const TEAM_COLUMN: &str = "Team";

/// A roster: a header plus rows of string fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    team_col: usize,
}

impl TeamTable {
    /// Build a single-column table from team names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: vec![TEAM_COLUMN.to_string()],
            rows: names.into_iter().map(|n| vec![n.into()]).collect(),
            team_col: 0,
        }
    }

    /// Parse CSV text whose header names a `Team` column.
    ///
    /// A leading UTF-8 byte-order mark is ignored.
    pub fn parse_csv(src: &str) -> Result<Self> {
        let src = src.strip_prefix('\u{feff}').unwrap_or(src);
        let mut records = src
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let Some((_, header)) = records.next() else {
            return Err(BracketError::invalid_argument("roster is empty"));
        };
        let columns: Vec<String> = split_record(header)?
            .into_iter()
            .map(|c| c.trim().to_string())
            .collect();
        let team_col = columns
            .iter()
            .position(|c| c == TEAM_COLUMN)
            .ok_or_else(|| {
                BracketError::invalid_argument(format!(
                    "roster has no '{TEAM_COLUMN}' column (found: {})",
                    columns.join(", ")
                ))
            })?;

        let mut rows = Vec::new();
        for (idx, line) in records {
            let fields = split_record(line)?;
            if fields.len() <= team_col {
                return Err(BracketError::invalid_argument(format!(
                    "roster line {}: expected at least {} fields, got {}",
                    idx + 1,
                    team_col + 1,
                    fields.len()
                )));
            }
            rows.push(fields.into_iter().map(|f| f.trim().to_string()).collect());
        }

        log::debug!("parsed roster: {} teams", rows.len());
        Ok(Self {
            columns,
            rows,
            team_col,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Team name in the given 0-based row.
    pub fn team(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(|r| r[self.team_col].as_str())
    }

    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r[self.team_col].as_str())
    }
}

// ─── CSV record splitting ────────────────────────────────────────────────────

/// Cursor over one CSV record.
struct Cursor {
    src: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(src: &str) -> Self {
        Self {
            src: src.chars().collect(),
            pos: 0,
        }
    }

    fn eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.src.get(self.pos).copied()
    }

    /// Consume `ch` if it is next; returns true if consumed.
    fn consume(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Parse a double-quoted field. `""` inside the quotes is a literal quote.
    fn parse_quoted(&mut self) -> Result<String> {
        let start = self.pos;
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.peek() {
                None => {
                    return Err(BracketError::invalid_argument(format!(
                        "unterminated quote at column {}",
                        start + 1
                    )));
                }
                Some('"') => {
                    self.pos += 1;
                    if !self.consume('"') {
                        return Ok(out);
                    }
                    out.push('"');
                }
                Some(ch) => {
                    out.push(ch);
                    self.pos += 1;
                }
            }
        }
    }

    fn parse_bare(&mut self) -> String {
        let mut out = String::new();
        while let Some(ch) = self.peek() {
            if ch == ',' {
                break;
            }
            out.push(ch);
            self.pos += 1;
        }
        out
    }

    fn parse_field(&mut self) -> Result<String> {
        while matches!(self.peek(), Some(' ') | Some('\t')) {
            self.pos += 1;
        }
        if self.peek() == Some('"') {
            let s = self.parse_quoted()?;
            // tolerate whitespace between the closing quote and the delimiter
            let rest = self.parse_bare();
            if !rest.trim().is_empty() {
                return Err(BracketError::invalid_argument(format!(
                    "unexpected text after quoted field: '{}'",
                    rest.trim()
                )));
            }
            Ok(s)
        } else {
            Ok(self.parse_bare())
        }
    }
}

fn split_record(line: &str) -> Result<Vec<String>> {
    let mut c = Cursor::new(line.trim_end_matches('\r'));
    let mut fields = Vec::new();
    loop {
        fields.push(c.parse_field()?);
        if c.eof() || !c.consume(',') {
            break;
        }
    }
    Ok(fields)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
