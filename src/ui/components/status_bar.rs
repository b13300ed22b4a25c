use crate::app::AppState;
use crate::keybindings::Action;
use crate::utils::unicode::display_width;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn first_key(state: &AppState, action: Action) -> String {
    state
        .keybindings
        .keys_for(action)
        .into_iter()
        .next()
        .unwrap_or_else(|| "-".to_string())
}

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let left_content = format!(" {} copy", first_key(state, Action::Copy));
    let hints = format!(
        "{} help  {} quit",
        first_key(state, Action::ToggleHelp),
        first_key(state, Action::Quit)
    );
    let version_text = format!("v{VERSION}");

    let padding = area.width.saturating_sub(
        display_width(&left_content) + display_width(&hints) + display_width(&version_text) + 3,
    );

    let status_line = format!(
        "{}  {} {:>padding$} {}",
        left_content,
        hints,
        "",
        version_text,
        padding = padding as usize
    );

    let style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));

    f.render_widget(status, area);
}
