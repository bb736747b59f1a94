//! Global error handling for dumptree
//!
//! A single error type covering all modules, so `?` works across the
//! renderer, writer and clipboard layers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for dumptree operations
#[derive(Error, Debug)]
pub enum DumpTreeError {
    /// Target path is missing or not a directory. Raised once, before any
    /// output is produced.
    #[error("invalid path: {} is not an existing directory", .0.display())]
    InvalidPath(PathBuf),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Directory traversal errors below the root
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Clipboard errors
    #[error("clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

/// Specialized Result type for dumptree operations
pub type Result<T> = std::result::Result<T, DumpTreeError>;
