/*!
 * Command-line interface for dumptree
 */

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use dumptree::clipboard;
use dumptree::config::{Args, Config};
use dumptree::renderer::TreeRenderer;
use dumptree::utils::{count_entries, prompt_for_directory};
use dumptree::writer::TextWriter;

fn main() -> ExitCode {
    let args = Args::parse();

    // Shell completion generation is an early exit
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> dumptree::Result<()> {
    // Resolve the target directory, prompting when none was given on the
    // command line; empty input selects the current working directory
    let target_dir = match &args.directory_path {
        Some(path) => PathBuf::from(path),
        None => prompt_for_directory()?,
    };

    let config = Config::from_args(args, target_dir);
    config.validate()?;

    // Progress bar sized by a pre-count of retained entries
    let progress = ProgressBar::new(count_entries(&config.target_dir, &config.filters));
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {wide_msg:.dim.white} {pos}/{len}")
            .unwrap(),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_message(format!(
        "Rendering directory: {}",
        config.target_dir.display()
    ));

    let renderer = TreeRenderer::new(config.clone(), Arc::new(progress.clone()));
    let text = renderer.render()?;

    progress.finish_and_clear();

    let writer = TextWriter::new(config.clone());
    writer.write(&text)?;

    // Clipboard storage is a side channel: the primary output already
    // succeeded, so a failure here only warrants a warning
    if config.clip {
        if let Err(e) = clipboard::copy_to_clipboard(&text) {
            eprintln!("Warning: failed to copy to clipboard: {}", e);
        }
    }

    Ok(())
}
