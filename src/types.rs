/*!
 * Core types for the dumptree application
 */

use std::path::PathBuf;

/// A single directory entry as observed at traversal time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name (final path component)
    pub name: String,
    /// Absolute or root-relative path of the entry
    pub path: PathBuf,
    /// Whether the entry is a directory
    pub is_dir: bool,
}

/// Connector assigned to an entry within its parent directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// Every retained entry except the last one
    Tee,
    /// The last retained entry of a directory
    Last,
}

impl Connector {
    /// Glyph drawn in front of the entry name
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Tee => "├── ",
            Self::Last => "└── ",
        }
    }

    /// Continuation token appended to the prefix when recursing into a
    /// directory rendered with this connector. Both tokens are 4 characters
    /// wide, so indentation is always 4 * depth.
    pub fn continuation(self) -> &'static str {
        match self {
            Self::Tee => "│   ",
            Self::Last => "    ",
        }
    }
}
