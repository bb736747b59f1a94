/*!
 * dumptree - Print a filtered directory tree and copy it to the clipboard
 *
 * This library renders a directory structure as an ASCII tree, hiding
 * entries whose names match configured folder-name prefixes or file-name
 * suffixes, and assembles the result into a single text block suitable for
 * stdout, a file, and the system clipboard.
 */

pub mod clipboard;
pub mod config;
pub mod error;
pub mod renderer;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use clipboard::{copy_to_clipboard, ClipboardSink};
pub use config::{Args, Config, FilterConfig};
pub use error::{DumpTreeError, Result};
pub use renderer::TreeRenderer;
pub use types::{Connector, DirEntry};
pub use utils::count_entries;
pub use writer::TextWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
