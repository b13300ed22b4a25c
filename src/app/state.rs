use crate::clipboard::ClipboardWriter;
use crate::control::CopyStatus;
use crate::demo::DemoHost;
use crate::keybindings::KeybindingCache;
use crate::ui::theme::Theme;
use ratatui::layout::Rect;
use std::time::Duration;
use tracing::warn;

pub struct AppState {
    pub host: DemoHost,
    pub clipboard: Box<dyn ClipboardWriter>,
    pub theme: Theme,
    pub keybindings: KeybindingCache,
    pub status_timeout: Option<Duration>,
    /// Where the copy button was last drawn, for mouse hit testing.
    pub button_area: Option<Rect>,
    pub should_quit: bool,
    pub show_help: bool,
}

impl AppState {
    pub fn new(
        host: DemoHost,
        clipboard: Box<dyn ClipboardWriter>,
        theme: Theme,
        keybindings: KeybindingCache,
        status_timeout: Option<Duration>,
    ) -> Self {
        Self {
            host,
            clipboard,
            theme,
            keybindings,
            status_timeout,
            button_area: None,
            should_quit: false,
            show_help: false,
        }
    }

    pub fn activate_copy(&mut self) -> CopyStatus {
        self.host.control_mut().activate(self.clipboard.as_mut())
    }

    pub fn clear_expired_status_message(&mut self) {
        self.host.control_mut().clear_expired(self.status_timeout);
    }

    /// Pass clipboard contents on before the clipboard is dropped at exit.
    /// A failed handoff is logged; the copy itself already happened.
    pub fn release_clipboard(&mut self) {
        if let Err(e) = self.clipboard.handoff() {
            warn!(backend = self.clipboard.name(), error = %format!("{e:#}"), "clipboard handoff failed");
        }
    }

    pub fn is_on_button(&self, column: u16, row: u16) -> bool {
        self.button_area
            .is_some_and(|area| area.contains((column, row).into()))
    }
}

#[cfg(test)]
pub(crate) fn test_state(clipboard: Box<dyn ClipboardWriter>) -> AppState {
    AppState::new(
        DemoHost::new(),
        clipboard,
        Theme::default(),
        KeybindingCache::default(),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::{FailingClipboard, MemoryClipboard};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_activate_copy_updates_host() {
        let mut state = test_state(Box::new(MemoryClipboard::default()));
        assert_eq!(state.activate_copy(), CopyStatus::Copied);
        assert_eq!(state.host.control().status(), CopyStatus::Copied);
    }

    #[test]
    fn test_activate_copy_failure() {
        let mut state = test_state(Box::new(FailingClipboard::default()));
        assert_eq!(state.activate_copy(), CopyStatus::Failed);
    }

    #[test]
    fn test_clear_expired_uses_configured_timeout() {
        let mut state = test_state(Box::new(MemoryClipboard::default()));
        state.activate_copy();

        state.clear_expired_status_message();
        assert_eq!(state.host.control().status(), CopyStatus::Copied);

        state.status_timeout = Some(Duration::ZERO);
        state.clear_expired_status_message();
        assert_eq!(state.host.control().status(), CopyStatus::Idle);
    }

    struct CountingHandoff(Rc<Cell<usize>>);

    impl ClipboardWriter for CountingHandoff {
        fn write_text(&mut self, _text: &str) -> anyhow::Result<()> {
            Ok(())
        }

        fn handoff(&mut self) -> anyhow::Result<()> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    #[test]
    fn test_release_clipboard_hands_off() {
        let handoffs = Rc::new(Cell::new(0));
        let mut state = test_state(Box::new(CountingHandoff(Rc::clone(&handoffs))));
        state.activate_copy();
        state.release_clipboard();
        assert_eq!(handoffs.get(), 1);
    }

    #[test]
    fn test_release_clipboard_after_failed_copy() {
        let mut state = test_state(Box::new(FailingClipboard::default()));
        state.activate_copy();
        state.release_clipboard();
        assert_eq!(state.host.control().status(), CopyStatus::Failed);
    }

    #[test]
    fn test_is_on_button() {
        let mut state = test_state(Box::new(MemoryClipboard::default()));
        assert!(!state.is_on_button(0, 0));

        state.button_area = Some(Rect::new(2, 3, 13, 3));
        assert!(state.is_on_button(2, 3));
        assert!(state.is_on_button(14, 5));
        assert!(!state.is_on_button(15, 5));
        assert!(!state.is_on_button(2, 6));
    }
}
