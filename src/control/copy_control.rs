use super::status::CopyStatus;
use crate::clipboard::ClipboardWriter;
use crate::ui::view::Element;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

pub const COPY_BUTTON_LABEL: &str = "Copy Code";

/// A button that copies a fixed piece of text to the clipboard and shows
/// the outcome of the last attempt underneath.
#[derive(Debug, Clone)]
pub struct CopyControl {
    text: Arc<str>,
    status: CopyStatus,
    last_activation: Option<Instant>,
}

impl CopyControl {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self {
            text: text.into(),
            status: CopyStatus::Idle,
            last_activation: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn status(&self) -> CopyStatus {
        self.status
    }

    pub fn status_message(&self) -> &'static str {
        self.status.message()
    }

    /// Write the text to `clipboard` and record the outcome.
    ///
    /// The status is updated before this returns, so the next render
    /// always sees it. A rejected write sets [`CopyStatus::Failed`].
    pub fn activate(&mut self, clipboard: &mut dyn ClipboardWriter) -> CopyStatus {
        self.status = match clipboard.write_text(&self.text) {
            Ok(()) => {
                info!(backend = clipboard.name(), bytes = self.text.len(), "copied text to clipboard");
                CopyStatus::Copied
            }
            Err(e) => {
                warn!(backend = clipboard.name(), error = %format!("{e:#}"), "clipboard write failed");
                CopyStatus::Failed
            }
        };
        self.last_activation = Some(Instant::now());
        self.status
    }

    /// Return to [`CopyStatus::Idle`] once the last outcome is older than
    /// `timeout`. `None` keeps the message until the next activation.
    /// Returns true when the status was cleared.
    pub fn clear_expired(&mut self, timeout: Option<Duration>) -> bool {
        let (Some(timeout), Some(at)) = (timeout, self.last_activation) else {
            return false;
        };

        if self.status.is_idle() || at.elapsed() < timeout {
            return false;
        }

        self.status = CopyStatus::Idle;
        self.last_activation = None;
        true
    }

    pub fn render(&self) -> Element {
        Element::Group(vec![
            Element::button(COPY_BUTTON_LABEL),
            Element::status(self.status.message(), self.status.tone()),
        ])
    }
}
