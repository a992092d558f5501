use serde::Serialize;
use typereveal_common::{LineMap, Position};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFixInfo {
    /// The internal name of the code fix (e.g., "addPropertyType").
    pub fix_name: String,
    /// Human-readable description of the fix.
    pub description: String,
    /// The file changes to apply.
    pub changes: Vec<CodeFixFileChange>,
    /// Grouping label shared by every fix of the same family.
    pub family_name: String,
}

/// A file change in a code fix.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFixFileChange {
    pub file_name: String,
    pub text_changes: Vec<CodeFixTextChange>,
}

/// A text change within a file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFixTextChange {
    pub start: CodeFixPosition,
    pub end: CodeFixPosition,
    pub new_text: String,
}

/// A position in the editor protocol (1-based line/offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeFixPosition {
    pub line: u32,
    pub offset: u32,
}

impl CodeFixPosition {
    pub fn from_offset(line_map: &LineMap, offset: u32) -> Self {
        Self::from(line_map.offset_to_position(offset))
    }
}

impl From<Position> for CodeFixPosition {
    fn from(position: Position) -> Self {
        Self {
            line: position.line + 1,
            offset: position.character + 1,
        }
    }
}
