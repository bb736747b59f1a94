/*!
 * Recursive tree rendering with name filtering
 */

use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{DumpTreeError, Result};
use crate::types::{Connector, DirEntry};

/// Renderer for filtered directory trees
pub struct TreeRenderer {
    /// Renderer configuration
    config: Config,
    /// Progress bar, ticked once per rendered line
    pub progress: Arc<ProgressBar>,
}

impl TreeRenderer {
    /// Create a new renderer
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Render the configured target directory as a full text block
    ///
    /// The text holds a header naming the target, one line per retained
    /// entry, and a trailer listing the configured filters verbatim. The
    /// target path is validated here, once, before anything is produced;
    /// a missing or non-directory target fails with
    /// [`DumpTreeError::InvalidPath`].
    pub fn render(&self) -> Result<String> {
        let target = &self.config.target_dir;
        if !target.is_dir() {
            return Err(DumpTreeError::InvalidPath(target.clone()));
        }

        let mut lines = Vec::new();
        self.generate(target, "", &mut lines)?;

        let mut text = format!("Directory structure of {}\n\n", target.display());
        for line in &lines {
            text.push_str(line);
            text.push('\n');
        }

        text.push_str("\nList of hidden folders\n\n");
        for prefix in &self.config.filters.folder_prefixes {
            text.push_str(prefix);
            text.push('\n');
        }

        text.push_str("\nList of hidden extensions\n\n");
        for suffix in &self.config.filters.extension_suffixes {
            text.push_str(suffix);
            text.push('\n');
        }

        Ok(text)
    }

    /// Append the tree lines for one directory level, depth-first
    ///
    /// Every retained entry gets exactly one line; retained directories are
    /// recursed into with the prefix extended by the continuation token of
    /// their connector. A directory whose children are all filtered out
    /// contributes nothing.
    fn generate(&self, dir: &Path, prefix: &str, out: &mut Vec<String>) -> Result<()> {
        let entries = self.filter_entries(self.list_entries(dir)?);

        let count = entries.len();
        for (idx, entry) in entries.iter().enumerate() {
            let connector = if idx + 1 == count {
                Connector::Last
            } else {
                Connector::Tee
            };

            out.push(format!("{}{}{}", prefix, connector.glyph(), entry.name));
            self.progress.inc(1);

            if entry.is_dir {
                let child_prefix = format!("{}{}", prefix, connector.continuation());
                self.generate(&entry.path, &child_prefix, out)?;
            }
        }

        Ok(())
    }

    /// Drop entries hidden by the configured filters, preserving order
    pub fn filter_entries(&self, entries: Vec<DirEntry>) -> Vec<DirEntry> {
        entries
            .into_iter()
            .filter(|entry| !self.config.filters.excludes(&entry.name))
            .collect()
    }

    /// List the immediate children of a directory, sorted by file name so
    /// output is deterministic across platforms
    fn list_entries(&self, dir: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                is_dir: entry.file_type().is_dir(),
                path: entry.into_path(),
            });
        }
        Ok(entries)
    }
}
