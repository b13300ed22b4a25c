use anyhow::{Context, Result};
use arboard::Clipboard;
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{debug, warn};

/// How long a Linux write waits for a clipboard manager to take ownership
/// before the process is allowed to exit.
const HANDOFF_WAIT: Duration = Duration::from_millis(250);

/// Something that can place a string on the system clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Called once before the app exits, so backends whose contents are
    /// served by this process can pass them on first.
    fn handoff(&mut self) -> Result<()> {
        Ok(())
    }

    /// Short backend name used in log lines.
    fn name(&self) -> &'static str;
}

/// Which clipboard implementation the app should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// System clipboard, falling back to OSC 52 when it is unavailable
    Auto,
    /// System clipboard only
    #[default]
    System,
    /// OSC 52 terminal escape sequence only
    #[value(name = "osc52")]
    Osc52,
}

impl fmt::Display for ClipboardBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardBackend::Auto => write!(f, "auto"),
            ClipboardBackend::System => write!(f, "system"),
            ClipboardBackend::Osc52 => write!(f, "osc52"),
        }
    }
}

/// Clipboard for a long-running app. Call `handoff` before exiting.
pub fn open_clipboard(backend: ClipboardBackend) -> Box<dyn ClipboardWriter> {
    debug!(%backend, "opening clipboard");
    with_system(backend, SystemClipboard::new())
}

/// Clipboard for a one-shot write followed by process exit.
pub fn open_persistent_clipboard(backend: ClipboardBackend) -> Box<dyn ClipboardWriter> {
    debug!(%backend, "opening persistent clipboard");
    with_system(backend, SystemClipboard::persistent())
}

fn with_system(backend: ClipboardBackend, system: SystemClipboard) -> Box<dyn ClipboardWriter> {
    match backend {
        ClipboardBackend::Auto => Box::new(AutoClipboard::new(system, Osc52Clipboard::stdout())),
        ClipboardBackend::System => Box::new(system),
        ClipboardBackend::Osc52 => Box::new(Osc52Clipboard::stdout()),
    }
}

/// Native clipboard through arboard.
///
/// The arboard handle is opened on the first write and kept for the life of
/// the app, so contents stay available on Linux while the app is running.
/// A failed write drops the handle and the next write reopens it.
///
/// On X11 and Wayland the contents vanish with the owning process unless a
/// clipboard manager takes them over, so the last write is offered to one
/// before exit (`handoff`), or on every write for `persistent` clipboards.
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
    wait_on_write: bool,
    last_text: Option<String>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            clipboard: None,
            wait_on_write: false,
            last_text: None,
        }
    }

    /// Every write blocks briefly on Linux so the contents outlive the
    /// process. Use for headless one-shot copies.
    pub fn persistent() -> Self {
        Self {
            wait_on_write: true,
            ..Self::new()
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.wait_on_write
    }

    fn set(&mut self, text: &str, wait: bool) -> Result<()> {
        if self.clipboard.is_none() {
            let clipboard = Clipboard::new().context("Failed to access system clipboard")?;
            self.clipboard = Some(clipboard);
        }

        if let Some(clipboard) = self.clipboard.as_mut() {
            if let Err(e) = set_text(clipboard, text, wait) {
                self.clipboard = None;
                return Err(e).context("Failed to copy text to clipboard");
            }
        }

        Ok(())
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

fn set_text(clipboard: &mut Clipboard, text: &str, wait: bool) -> Result<(), arboard::Error> {
    #[cfg(target_os = "linux")]
    {
        if wait {
            use arboard::SetExtLinux;
            use std::time::Instant;

            return clipboard
                .set()
                .wait_until(Instant::now() + HANDOFF_WAIT)
                .text(text.to_owned());
        }
    }

    #[cfg(not(target_os = "linux"))]
    let _ = wait;

    clipboard.set_text(text)
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.last_text = None;
        self.set(text, self.wait_on_write)?;
        if !self.wait_on_write {
            self.last_text = Some(text.to_string());
        }
        Ok(())
    }

    fn handoff(&mut self) -> Result<()> {
        let Some(text) = self.last_text.take() else {
            return Ok(());
        };
        debug!(wait_ms = HANDOFF_WAIT.as_millis() as u64, "handing clipboard contents off");
        self.set(&text, true)
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

/// Build the OSC 52 "set clipboard" escape sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    let encoded = general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", encoded)
}

/// Clipboard writes through the terminal emulator using OSC 52.
/// Works over SSH where no local clipboard exists.
pub struct Osc52Clipboard<W: Write> {
    writer: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl Osc52Clipboard<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ClipboardWriter for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let sequence = osc52_sequence(text);
        self.writer
            .write_all(sequence.as_bytes())
            .context("Failed to write OSC 52 sequence to terminal")?;
        self.writer
            .flush()
            .context("Failed to flush OSC 52 sequence to terminal")?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "osc52"
    }
}

/// Tries `primary` and falls back to `fallback` when it fails.
pub struct AutoClipboard<P, F> {
    primary: P,
    fallback: F,
}

impl<P: ClipboardWriter, F: ClipboardWriter> AutoClipboard<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: ClipboardWriter, F: ClipboardWriter> ClipboardWriter for AutoClipboard<P, F> {
    fn write_text(&mut self, text: &str) -> Result<()> {
        match self.primary.write_text(text) {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!(
                    primary = self.primary.name(),
                    fallback = self.fallback.name(),
                    error = %e,
                    "clipboard write failed, trying fallback"
                );
                self.fallback
                    .write_text(text)
                    .with_context(|| format!("{} clipboard also failed", self.fallback.name()))
            }
        }
    }

    fn handoff(&mut self) -> Result<()> {
        self.primary.handoff()
    }

    fn name(&self) -> &'static str {
        "auto"
    }
}
