use super::state::AppState;
use crate::keybindings::Action;
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

pub fn handle_event(event: Event, state: &mut AppState) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key, state),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state),
        _ => {}
    }
}

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) {
    let Some(action) = state.keybindings.lookup(&key) else {
        return;
    };
    debug!(%action, "key action");

    // While help is open only help and quit keys do anything
    if state.show_help {
        match action {
            Action::Quit => state.should_quit = true,
            Action::ToggleHelp | Action::CloseHelp => state.show_help = false,
            Action::Copy => {}
        }
        return;
    }

    match action {
        Action::Copy => {
            state.activate_copy();
        }
        Action::ToggleHelp => state.show_help = true,
        Action::CloseHelp => {}
        Action::Quit => state.should_quit = true,
    }
}

pub fn handle_mouse_event(mouse: MouseEvent, state: &mut AppState) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if state.show_help {
        state.show_help = false;
        return;
    }

    if state.is_on_button(mouse.column, mouse.row) {
        state.activate_copy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::test_state;
    use crate::clipboard::testing::MemoryClipboard;
    use crate::control::CopyStatus;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_enter_activates_copy() {
        let mut state = test_state(Box::new(MemoryClipboard::default()));
        handle_key_event(key(KeyCode::Enter), &mut state);
        assert_eq!(state.host.control().status(), CopyStatus::Copied);
    }

    #[test]
    fn test_unbound_key_does_nothing() {
        let mut state = test_state(Box::new(MemoryClipboard::default()));
        handle_key_event(key(KeyCode::Char('x')), &mut state);
        assert_eq!(state.host.control().status(), CopyStatus::Idle);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_quit() {
        let mut state = test_state(Box::new(MemoryClipboard::default()));
        handle_key_event(key(KeyCode::Char('q')), &mut state);
        assert!(state.should_quit);
    }

    #[test]
    fn test_help_blocks_copy() {
        let mut state = test_state(Box::new(MemoryClipboard::default()));
        handle_key_event(key(KeyCode::Char('?')), &mut state);
        assert!(state.show_help);

        handle_key_event(key(KeyCode::Enter), &mut state);
        assert_eq!(state.host.control().status(), CopyStatus::Idle);

        handle_key_event(key(KeyCode::Esc), &mut state);
        assert!(!state.show_help);
    }

    #[test]
    fn test_click_on_button_activates_copy() {
        let mut state = test_state(Box::new(MemoryClipboard::default()));
        state.button_area = Some(Rect::new(0, 2, 13, 3));

        handle_mouse_event(click(20, 2), &mut state);
        assert_eq!(state.host.control().status(), CopyStatus::Idle);

        handle_mouse_event(click(5, 3), &mut state);
        assert_eq!(state.host.control().status(), CopyStatus::Copied);
    }

    #[test]
    fn test_release_does_not_activate() {
        let mut state = test_state(Box::new(MemoryClipboard::default()));
        state.button_area = Some(Rect::new(0, 2, 13, 3));

        let mut release = click(5, 3);
        release.kind = MouseEventKind::Up(MouseButton::Left);
        handle_mouse_event(release, &mut state);
        assert_eq!(state.host.control().status(), CopyStatus::Idle);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = test_state(Box::new(MemoryClipboard::default()));
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        handle_event(Event::Key(release), &mut state);
        assert_eq!(state.host.control().status(), CopyStatus::Idle);
    }
}
