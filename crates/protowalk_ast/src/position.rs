//! Source positions for schema elements.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position in the `.proto` source text a node was parsed from.
///
/// Uses 1-indexed lines and columns, matching what protobuf tooling prints
/// in diagnostics. Synthetic nodes use [`Position::default`], which is all
/// zeros.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
    /// Byte offset (0-indexed).
    #[serde(default)]
    pub offset: u32,
}

impl Position {
    /// Creates a new position without a byte offset.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self {
            line,
            column,
            offset: 0,
        }
    }

    /// Sets the byte offset.
    #[inline]
    pub const fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Returns true for the zero position used by synthetic nodes.
    #[inline]
    pub const fn is_unknown(&self) -> bool {
        self.line == 0 && self.column == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
