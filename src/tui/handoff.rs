//! Handing call recordings to the rest of the desktop
//!
//! Copy goes through `arboard` (Windows, macOS, Linux with a display server).
//! Open goes through the platform's URL opener; audio is never decoded here.
//! Both create their resources fresh each call.

use anyhow::{bail, Context, Result};
use arboard::Clipboard;
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use tracing::debug;

/// Copy text to the system clipboard
///
/// Common failure cases: no display server (headless Linux), permission denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    Ok(())
}

/// Platform opener command and its leading args
fn opener() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(windows) {
        // `start` is a cmd builtin; the empty string is the window title
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Open `url` in whatever the system associates with it.
///
/// Stdio is nulled so the player cannot draw over the TUI.
pub fn open_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        bail!("No recording available");
    }

    let (program, args) = opener();
    let mut command = Command::new(program);
    command.args(args).arg(url);
    spawn_reaped(&mut command, program)?;
    Ok(())
}

/// Spawn `command` and wait on it from a background thread so the exited
/// child never lingers as a zombie.
fn spawn_reaped(command: &mut Command, program: &str) -> Result<JoinHandle<()>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to launch {}", program))?;

    let reaper = thread::Builder::new()
        .name("opener-reaper".into())
        .spawn(move || match child.wait() {
            Ok(status) if !status.success() => debug!("Opener exited with {}", status),
            Ok(_) => {}
            Err(e) => debug!("Failed to wait on opener: {}", e),
        })
        .context("Failed to start opener reaper")?;
    Ok(reaper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_url_is_refused() {
        let err = open_url("  ").unwrap_err();
        assert_eq!(err.to_string(), "No recording available");
    }

    #[test]
    fn missing_opener_is_an_error() {
        let mut command = Command::new("callboard-no-such-opener");
        let err = spawn_reaped(&mut command, "callboard-no-such-opener").unwrap_err();
        assert!(err.to_string().contains("Failed to launch"));
    }

    #[cfg(unix)]
    #[test]
    fn launched_opener_is_waited_on() {
        let mut command = Command::new("true");
        let reaper = spawn_reaped(&mut command, "true").unwrap();
        // The reaper only finishes once wait() has collected the exit status
        reaper.join().unwrap();
    }
}
