use crate::ui::theme::Theme;
use crate::ui::view::{Element, Tone};
use crate::utils::unicode::display_width;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Draw an element tree top to bottom inside `area`.
///
/// Returns the area of the first button drawn so callers can hit-test
/// mouse clicks against it.
pub fn render(f: &mut Frame, element: &Element, area: Rect, theme: &Theme) -> Option<Rect> {
    let leaves = element.leaves();

    let mut constraints: Vec<Constraint> = leaves
        .iter()
        .map(|leaf| Constraint::Length(leaf.height()))
        .collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut button_area = None;

    for (leaf, row) in leaves.iter().zip(rows.iter()) {
        match leaf {
            Element::Heading(text) => {
                let heading = Paragraph::new(Line::from(text.as_str())).style(
                    Style::default()
                        .fg(theme.heading)
                        .add_modifier(Modifier::BOLD),
                );
                f.render_widget(heading, *row);
            }
            Element::Button { label } => {
                let rect = button_rect(label, *row);
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.button));
                let button = Paragraph::new(label.as_str())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD))
                    .block(block);
                f.render_widget(button, rect);
                button_area.get_or_insert(rect);
            }
            Element::Text { text, tone } => {
                let color = match tone {
                    Tone::Normal => theme.foreground,
                    Tone::Success => theme.success,
                    Tone::Failure => theme.failure,
                };
                f.render_widget(Paragraph::new(text.as_str()).style(Style::default().fg(color)), *row);
            }
            Element::Group(_) => {}
        }
    }

    button_area
}

/// Label plus a space and a border on each side, clipped to the row.
fn button_rect(label: &str, row: Rect) -> Rect {
    let width = display_width(label).saturating_add(4).min(row.width);
    Rect { width, ..row }
}
