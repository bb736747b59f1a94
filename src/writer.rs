/*!
 * Output writing for dumptree
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::config::Config;

/// Writer for rendered tree text
pub struct TextWriter {
    /// Writer configuration
    config: Config,
}

impl TextWriter {
    /// Create a new writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the rendered text to the configured output file, or to stdout
    /// when no output file is set
    pub fn write(&self, text: &str) -> io::Result<()> {
        match &self.config.output_file {
            Some(path) => {
                let file = File::create(path)?;
                let mut writer = BufWriter::new(file);
                writer.write_all(text.as_bytes())?;
                writer.flush()
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(text.as_bytes())?;
                handle.flush()
            }
        }
    }
}
