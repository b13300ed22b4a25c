pub mod element;
pub mod status_bar;

use crate::app::AppState;
use crate::keybindings::Action;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Draw the whole screen. Returns where the copy button ended up.
pub fn render(f: &mut Frame, state: &AppState) -> Option<Rect> {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Demo
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let content = chunks[0].inner(Margin {
        horizontal: 2,
        vertical: 1,
    });
    let view = state.host.render();
    let button_area = element::render(f, &view, content, &state.theme);

    status_bar::render(f, state, chunks[1]);

    if state.show_help {
        render_help_overlay(f, state);
    }

    button_area
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let keys = |action: Action| state.keybindings.keys_for(action).join(" ");
    let help_text = format!(
        "\nCopy code            {}\nToggle help          {}\nClose help           {}\nQuit                 {}\n\nClicking the button also copies.",
        keys(Action::Copy),
        keys(Action::ToggleHelp),
        keys(Action::CloseHelp),
        keys(Action::Quit),
    );

    let area = centered_rect(60, 60, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::test_state;
    use crate::clipboard::testing::MemoryClipboard;
    use crate::control::COPY_SUCCESS_MESSAGE;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        let mut button = None;
        terminal
            .draw(|f| {
                button = render(f, state);
            })
            .unwrap();
        state.button_area = button;

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_screen_before_copy() {
        let mut state = test_state(Box::new(MemoryClipboard::default()));
        let screen = draw(&mut state);

        assert!(screen.contains("Example: Copying Code"));
        assert!(screen.contains("Copy Code"));
        assert!(!screen.contains(COPY_SUCCESS_MESSAGE));
        assert_eq!(state.button_area, Some(Rect::new(2, 3, 13, 3)));
    }

    #[test]
    fn test_screen_after_copy() {
        let mut state = test_state(Box::new(MemoryClipboard::default()));
        state.activate_copy();
        let screen = draw(&mut state);

        assert!(screen.contains(COPY_SUCCESS_MESSAGE));
        assert_eq!(screen.matches("Copy Code").count(), 1);
    }

    #[test]
    fn test_help_overlay() {
        let mut state = test_state(Box::new(MemoryClipboard::default()));
        state.show_help = true;
        let screen = draw(&mut state);

        assert!(screen.contains(" Help "));
        assert!(screen.contains("Copy code"));
    }
}
