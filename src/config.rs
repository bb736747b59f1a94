/*!
 * Configuration handling for dumptree
 */

use std::io;
use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::utils::{DEFAULT_HIDDEN_EXTENSIONS, DEFAULT_HIDDEN_FOLDERS};

/// Command-line arguments for dumptree
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dumptree",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print a filtered directory tree and copy it to the clipboard",
    long_about = "Renders a directory structure as an ASCII tree, hiding configured \
                  folder-name prefixes and file-name suffixes, and copies the rendered \
                  text (including the filter lists) to the system clipboard."
)]
pub struct Args {
    /// Target directory to render (prompts interactively when omitted)
    pub directory_path: Option<String>,

    /// Write the rendered tree to a file instead of stdout
    #[clap(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Comma-separated folder-name prefixes to hide (replaces the defaults)
    #[clap(long, value_delimiter = ',', value_name = "PREFIXES")]
    pub hide_folders: Option<Vec<String>>,

    /// Comma-separated name suffixes to hide (replaces the defaults)
    #[clap(long, value_delimiter = ',', value_name = "SUFFIXES")]
    pub hide_extensions: Option<Vec<String>>,

    /// Do not copy the rendered tree to the clipboard
    #[clap(long)]
    pub no_clip: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Name filters applied at every directory level
///
/// An entry is excluded when its name starts with any configured folder
/// prefix (whether the entry is a folder or not), or otherwise when its name
/// ends with any configured suffix. Both lists are checked in configured
/// order; the lists are immutable once constructed.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Folder-name prefixes to hide
    pub folder_prefixes: Vec<String>,
    /// File-name suffixes to hide
    pub extension_suffixes: Vec<String>,
}

impl FilterConfig {
    /// Create a filter from explicit lists
    pub fn new(folder_prefixes: Vec<String>, extension_suffixes: Vec<String>) -> Self {
        Self {
            folder_prefixes,
            extension_suffixes,
        }
    }

    /// Whether an entry with this name is hidden from output and recursion
    pub fn excludes(&self, name: &str) -> bool {
        if self.folder_prefixes.iter().any(|p| name.starts_with(p.as_str())) {
            return true;
        }
        self.extension_suffixes
            .iter()
            .any(|s| name.ends_with(s.as_str()))
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            folder_prefixes: DEFAULT_HIDDEN_FOLDERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            extension_suffixes: DEFAULT_HIDDEN_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Target directory to render
    pub target_dir: PathBuf,

    /// Output file path (stdout when unset)
    pub output_file: Option<PathBuf>,

    /// Name filters
    pub filters: FilterConfig,

    /// Copy output to clipboard
    pub clip: bool,
}

impl Config {
    /// Create configuration from command-line arguments and the resolved
    /// target directory
    pub fn from_args(args: Args, target_dir: PathBuf) -> Self {
        let defaults = FilterConfig::default();
        Self {
            target_dir,
            output_file: args.output.map(PathBuf::from),
            filters: FilterConfig::new(
                args.hide_folders.unwrap_or(defaults.folder_prefixes),
                args.hide_extensions.unwrap_or(defaults.extension_suffixes),
            ),
            clip: !args.no_clip,
        }
    }

    /// Validate the configuration
    ///
    /// The target directory itself is validated by the renderer, once, at
    /// the top-level entry point; this only checks the output location.
    pub fn validate(&self) -> io::Result<()> {
        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("Output directory not found: {}", parent.display()),
                    ));
                }
            }
        }
        Ok(())
    }
}
