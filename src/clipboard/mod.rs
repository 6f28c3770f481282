// src/clipboard/mod.rs
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard helper found (tried: {0})")]
    NoHelper(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Clipboard helper '{program}' exited with status {status}")]
    HelperFailed { program: String, status: String },
}

pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Anything that can receive text destined for the clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// A helper program that reads the clipboard contents from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardHelper {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const HELPERS: &[ClipboardHelper] = &[ClipboardHelper { program: "pbcopy", args: &[] }];

#[cfg(target_os = "windows")]
const HELPERS: &[ClipboardHelper] = &[ClipboardHelper { program: "clip", args: &[] }];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const HELPERS: &[ClipboardHelper] = &[
    ClipboardHelper { program: "wl-copy", args: &[] },
    ClipboardHelper { program: "xclip", args: &["-selection", "clipboard"] },
    ClipboardHelper { program: "xsel", args: &["--clipboard", "--input"] },
];

/// Writes to the desktop clipboard through the first helper found on `PATH`.
#[derive(Debug, Default)]
pub struct SystemClipboard {
    helper: Option<ClipboardHelper>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let helper = HELPERS
            .iter()
            .find(|helper| find_in_path(helper.program).is_some())
            .cloned();

        match &helper {
            Some(h) => log::debug!("Using clipboard helper {}", h.program),
            None => log::debug!("No clipboard helper available"),
        }

        SystemClipboard { helper }
    }

    pub fn with_helper(helper: ClipboardHelper) -> Self {
        SystemClipboard { helper: Some(helper) }
    }

    pub fn helper(&self) -> Option<&ClipboardHelper> {
        self.helper.as_ref()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let helper = self.helper.as_ref().ok_or_else(|| {
            let tried: Vec<&str> = HELPERS.iter().map(|h| h.program).collect();
            ClipboardError::NoHelper(tried.join(", "))
        })?;

        let mut child = Command::new(helper.program)
            .args(helper.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // Reap the helper even when the write fails.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        written?;

        if !status.success() {
            return Err(ClipboardError::HelperFailed {
                program: helper.program.to_string(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}

fn find_in_path(program: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .flat_map(|dir| {
            let candidate = dir.join(program);
            let exe = dir.join(format!("{}.exe", program));
            [candidate, exe]
        })
        .find(|candidate| candidate.is_file())
}
