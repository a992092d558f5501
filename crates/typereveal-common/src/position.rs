//! Line/offset positions computed from byte offsets.

use serde::Serialize;

/// A zero-based line and character position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Byte offsets of every line start in a source text.
#[derive(Clone, Debug, Default)]
pub struct LineMap {
    line_starts: Vec<u32>,
}

impl LineMap {
    /// Build a line map by scanning `source` for line breaks.
    pub fn build(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (idx, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(idx as u32 + 1);
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset into a zero-based line/character position.
    pub fn offset_to_position(&self, offset: u32) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or(0);
        Position::new(line as u32, offset - line_start)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
#[path = "../tests/position_tests.rs"]
mod tests;
