/*!
 * Clipboard support for dumptree
 *
 * Copies rendered output to the system clipboard by piping it to the first
 * available clipboard command. The renderer never touches this module; the
 * sink is handed the finished text by the caller.
 */

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the clipboard command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// A sink that stores text as the system clipboard contents
pub trait ClipboardSink {
    /// Store `text` as the clipboard contents
    fn store(&self, text: &str) -> Result<()>;
}

/// Clipboard backed by an external system command
#[derive(Debug, Clone, Copy)]
enum CommandBackend {
    /// tmux buffer (also forwarded to the terminal clipboard via -w)
    Tmux,
    /// Wayland clipboard
    WlCopy,
    /// X11 clipboard via xsel
    Xsel,
    /// X11 clipboard via xclip
    Xclip,
    /// macOS clipboard
    Pbcopy,
    /// Windows clipboard (also reachable from WSL)
    ClipExe,
}

impl CommandBackend {
    fn command(self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Tmux => ("tmux", &["load-buffer", "-w", "-"]),
            Self::WlCopy => ("wl-copy", &[]),
            Self::Xsel => ("xsel", &["-b", "-i"]),
            Self::Xclip => ("xclip", &["-selection", "clipboard", "-in"]),
            Self::Pbcopy => ("pbcopy", &[]),
            Self::ClipExe => ("clip.exe", &[]),
        }
    }
}

impl ClipboardSink for CommandBackend {
    fn store(&self, text: &str) -> Result<()> {
        let (cmd, args) = self.command();

        let mut child = Command::new(cmd)
            .args(args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|_| ClipboardError::CommandFailed(format!("Failed to spawn {}", cmd)))?;

        let stdin = child.stdin.as_mut().ok_or_else(|| {
            ClipboardError::CommandFailed(format!("Failed to open stdin for {}", cmd))
        })?;
        stdin
            .write_all(text.as_bytes())
            .map_err(|_| ClipboardError::CommandFailed(format!("Failed to write to {}", cmd)))?;

        let status = child
            .wait()
            .map_err(|_| ClipboardError::CommandFailed(format!("Failed to wait for {}", cmd)))?;

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed(format!(
                "{} exited with status: {}",
                cmd, status
            )))
        }
    }
}

/// Copy text to the system clipboard
///
/// Detects the most appropriate clipboard mechanism for the platform and
/// pipes `text` to it.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    system_clipboard()?.store(text)
}

/// Select the first available clipboard sink
pub fn system_clipboard() -> Result<Box<dyn ClipboardSink>> {
    for backend in candidate_backends() {
        let (cmd, _) = backend.command();
        if command_exists(cmd) {
            return Ok(Box::new(backend));
        }
    }
    Err(ClipboardError::NoClipboardFound)
}

/// Check if a command exists on the system
pub fn command_exists(command: &str) -> bool {
    if let Ok(paths) = env::var("PATH") {
        for path in env::split_paths(&paths) {
            if path.join(command).exists() {
                return true;
            }
        }
    }

    // Fallback for commands resolvable by the OS but not via PATH entries
    Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Backends to try, in order of preference for the current platform
fn candidate_backends() -> Vec<CommandBackend> {
    let mut backends = Vec::new();

    // Inside a tmux session the buffer is the least surprising target
    if env::var("TMUX").is_ok() {
        backends.push(CommandBackend::Tmux);
    }

    if cfg!(target_os = "macos") {
        backends.push(CommandBackend::Pbcopy);
    } else if cfg!(target_os = "windows") {
        backends.push(CommandBackend::ClipExe);
    } else {
        if env::var("WAYLAND_DISPLAY").is_ok() {
            backends.push(CommandBackend::WlCopy);
        }
        backends.push(CommandBackend::Xsel);
        backends.push(CommandBackend::Xclip);
        // WSL exposes the Windows clipboard
        if env::var("WSL_DISTRO_NAME").is_ok() {
            backends.push(CommandBackend::ClipExe);
        }
    }

    backends
}
