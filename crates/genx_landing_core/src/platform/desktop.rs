//! Desktop capability backends built on external tools.
//!
//! # Responsibility
//! - Implement the capability contracts for a terminal/desktop host by
//!   spawning the conventional external tools.
//!
//! # Invariants
//! - Spawned openers are detached: stdio nulled, child never awaited with a
//!   handle the opened context could reach back through.
//! - Backend probing happens once at construction; calls after that do not
//!   re-probe.

use crate::platform::capability::{
    ArtifactError, ArtifactSink, Clipboard, ClipboardError, NavigationError, ShareRequest,
    ShareSheet, ShareSheetError, UrlOpener,
};
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Environment variable overriding the browser command.
pub const BROWSER_ENV: &str = "GENX_BROWSER";
/// Environment variable naming an external share-sheet command.
pub const SHARE_CMD_ENV: &str = "GENX_SHARE_CMD";

fn default_opener_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(target_os = "windows") {
        "cmd"
    } else {
        "xdg-open"
    }
}

/// Opens URLs through the OS opener or a `$GENX_BROWSER` override.
pub struct DesktopUrlOpener {
    browser_override: Option<String>,
}

impl DesktopUrlOpener {
    pub fn new(browser_override: Option<String>) -> Self {
        Self { browser_override }
    }

    /// Builds an opener honoring `$GENX_BROWSER`.
    pub fn from_env() -> Self {
        Self::new(std::env::var(BROWSER_ENV).ok().filter(|v| !v.trim().is_empty()))
    }

    fn spawn_detached(&self, url: &str) -> std::io::Result<()> {
        let mut command = match &self.browser_override {
            Some(browser) => {
                let mut command = Command::new(browser.trim());
                command.arg(url);
                command
            }
            None if cfg!(target_os = "windows") => {
                let mut command = Command::new("cmd");
                command.args(["/C", "start", "", url]);
                command
            }
            None => {
                let mut command = Command::new(default_opener_command());
                command.arg(url);
                command
            }
        };
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
    }
}

impl UrlOpener for DesktopUrlOpener {
    fn open_new(&mut self, url: &str) -> Result<(), NavigationError> {
        self.spawn_detached(url).map_err(|err| {
            debug!("event=open_new module=platform status=blocked detail={err}");
            NavigationError::Blocked(err.to_string())
        })
    }

    fn redirect_current(&mut self, url: &str) -> Result<(), NavigationError> {
        // A terminal has no page to navigate; presenting the link on the
        // process's own stdout is its current-context rendition.
        println!("open manually: {url}");
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClipboardBackend {
    command: &'static str,
    args: &'static [&'static str],
}

const CLIPBOARD_BACKENDS: &[ClipboardBackend] = &[
    ClipboardBackend {
        command: "wl-copy",
        args: &[],
    },
    ClipboardBackend {
        command: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardBackend {
        command: "xsel",
        args: &["--clipboard", "--input"],
    },
];

fn probe_clipboard_backend() -> Option<ClipboardBackend> {
    if cfg!(target_os = "macos") {
        return Some(ClipboardBackend {
            command: "pbcopy",
            args: &[],
        });
    }
    for backend in CLIPBOARD_BACKENDS {
        let probed = Command::new(backend.command)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        if probed.is_ok() {
            debug!(
                "event=clipboard_probe module=platform status=ok backend={}",
                backend.command
            );
            return Some(*backend);
        }
    }
    debug!("event=clipboard_probe module=platform status=no_backend");
    None
}

/// Clipboard over the first working external copy tool.
pub struct DesktopClipboard {
    backend: Option<ClipboardBackend>,
}

impl DesktopClipboard {
    /// Probes `wl-copy`/`xclip`/`xsel` (or `pbcopy` on macOS) once.
    pub fn probe() -> Self {
        Self {
            backend: probe_clipboard_backend(),
        }
    }
}

impl Clipboard for DesktopClipboard {
    fn supports_write(&self) -> bool {
        self.backend.is_some()
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let backend = self.backend.ok_or(ClipboardError::Unavailable)?;

        let mut child = Command::new(backend.command)
            .args(backend.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|err| ClipboardError::WriteFailed(err.to_string()))?;

        child
            .stdin
            .take()
            .ok_or_else(|| ClipboardError::WriteFailed("no stdin pipe".to_string()))?
            .write_all(text.as_bytes())
            .map_err(|err| ClipboardError::WriteFailed(err.to_string()))?;

        let status = child
            .wait()
            .map_err(|err| ClipboardError::WriteFailed(err.to_string()))?;
        if !status.success() {
            return Err(ClipboardError::WriteFailed(format!(
                "{} exited with {status}",
                backend.command
            )));
        }
        Ok(())
    }
}

/// Share sheet backed by an external command named in `$GENX_SHARE_CMD`.
///
/// The command receives three arguments: title, text, url. A non-zero exit
/// is treated as user dismissal.
pub struct DesktopShareSheet {
    command: Option<String>,
}

impl DesktopShareSheet {
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var(SHARE_CMD_ENV).ok().filter(|v| !v.trim().is_empty()))
    }
}

impl ShareSheet for DesktopShareSheet {
    fn is_supported(&self) -> bool {
        self.command.is_some()
    }

    fn present(&mut self, request: &ShareRequest) -> Result<(), ShareSheetError> {
        let command = self.command.as_deref().ok_or(ShareSheetError::Unsupported)?;

        let status = Command::new(command.trim())
            .args([&request.title, &request.text, &request.url])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|err| ShareSheetError::Failed(err.to_string()))?;

        if !status.success() {
            return Err(ShareSheetError::Dismissed);
        }
        info!("event=native_share module=platform status=ok");
        Ok(())
    }
}

/// Artifact sink writing into one target directory, created on demand.
pub struct DirArtifactSink {
    dir: PathBuf,
}

impl DirArtifactSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArtifactSink for DirArtifactSink {
    fn save(&mut self, filename: &str, contents: &[u8]) -> Result<PathBuf, ArtifactError> {
        let filename = filename.trim();
        if filename.is_empty()
            || filename.contains(['/', '\\'])
            || filename == "."
            || filename == ".."
        {
            return Err(ArtifactError::InvalidFilename(filename.to_string()));
        }

        std::fs::create_dir_all(&self.dir)
            .map_err(|err| ArtifactError::SaveFailed(err.to_string()))?;

        let path = self.dir.join(filename);
        std::fs::write(&path, contents)
            .map_err(|err| ArtifactError::SaveFailed(err.to_string()))?;
        info!(
            "event=artifact_saved module=platform status=ok path={}",
            path.display()
        );
        Ok(path)
    }
}
