/*!
 * Utility functions for dumptree
 */

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use walkdir::WalkDir;

use crate::config::FilterConfig;

/// Default folder-name prefixes hidden from the tree
pub static DEFAULT_HIDDEN_FOLDERS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "vendor",
        "public",
        "storage",
        "tests",
        "node_modules",
        "config",
        "bootstrap",
        "lang",
        ".git",
        ".idea",
    ]
});

/// Default name suffixes hidden from the tree
pub static DEFAULT_HIDDEN_EXTENSIONS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["css", "json", "scss"]);

/// Count retained entries for progress tracking
///
/// Walks the whole tree below `dir`, pruning excluded entries so that the
/// children of hidden directories are never visited. The count matches the
/// number of lines the renderer will emit for the same filters.
pub fn count_entries(dir: &Path, filters: &FilterConfig) -> u64 {
    WalkDir::new(dir)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| {
            // The root itself is never filtered, only its descendants
            e.depth() == 0 || !filters.excludes(&e.file_name().to_string_lossy())
        })
        .filter_map(Result::ok)
        .count() as u64
}

/// Prompt for a target directory on stdin
///
/// Empty input selects the current working directory.
pub fn prompt_for_directory() -> io::Result<PathBuf> {
    print!("Enter directory: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let entered = line.trim();

    if entered.is_empty() {
        env::current_dir()
    } else {
        Ok(PathBuf::from(entered))
    }
}
