//! System clipboard utilities

use std::path::PathBuf;
use std::process::Command;

use crate::error::{Error, Result};

/// Paste commands tried in order; the first one that succeeds wins.
#[cfg(target_os = "macos")]
const PASTE_COMMANDS: &[(&str, &[&str])] = &[("pbpaste", &[])];

#[cfg(target_os = "windows")]
const PASTE_COMMANDS: &[(&str, &[&str])] =
    &[("powershell", &["-NoProfile", "-Command", "Get-Clipboard"])];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const PASTE_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-paste", &["--no-newline"]),
    ("xclip", &["-selection", "clipboard", "-o"]),
    ("xsel", &["--clipboard", "--output"]),
];

/// Read text from the system clipboard
pub fn read_clipboard_text() -> Result<String> {
    for (program, args) in PASTE_COMMANDS {
        match Command::new(program).args(*args).output() {
            Ok(output) if output.status.success() => {
                return Ok(String::from_utf8_lossy(&output.stdout).into_owned());
            }
            Ok(output) => {
                tracing::debug!("{} exited with {}", program, output.status);
            }
            Err(e) => {
                tracing::debug!("{} unavailable: {}", program, e);
            }
        }
    }
    Err(Error::Clipboard("no clipboard reader available".to_string()))
}

/// Interpret clipboard text as a list of paths, one per line.
///
/// `file://` URIs (as copied from file managers) are reduced to their path.
pub fn paths_from_text(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| PathBuf::from(line.strip_prefix("file://").unwrap_or(line)))
        .collect()
}

/// Paths currently on the clipboard
pub fn read_clipboard_paths() -> Result<Vec<PathBuf>> {
    read_clipboard_text().map(|text| paths_from_text(&text))
}
