//! Toolkit-neutral view descriptions.
//!
//! Components describe what they show as an [`Element`] tree; the terminal
//! renderer in [`crate::ui::components`] turns that tree into ratatui widgets,
//! and [`Element::to_plain_text`] turns it into printable text.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Heading(String),
    Button { label: String },
    Text { text: String, tone: Tone },
    Group(Vec<Element>),
}

impl Element {
    pub fn heading(text: impl Into<String>) -> Self {
        Element::Heading(text.into())
    }

    pub fn button(label: impl Into<String>) -> Self {
        Element::Button {
            label: label.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::status(text, Tone::Normal)
    }

    pub fn status(text: impl Into<String>, tone: Tone) -> Self {
        Element::Text {
            text: text.into(),
            tone,
        }
    }

    /// Flatten nested groups into the leaf elements, in display order.
    pub fn leaves(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Element>) {
        match self {
            Element::Group(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
            leaf => out.push(leaf),
        }
    }

    pub fn buttons(&self) -> Vec<&str> {
        self.leaves()
            .into_iter()
            .filter_map(|e| match e {
                Element::Button { label } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Terminal rows needed to draw this element.
    /// Buttons are drawn with a border, text may span several lines and an
    /// empty text still takes its row.
    pub fn height(&self) -> u16 {
        match self {
            Element::Heading(_) => 2,
            Element::Button { .. } => 3,
            Element::Text { text, .. } => text.lines().count().max(1) as u16,
            Element::Group(children) => children.iter().map(Element::height).sum(),
        }
    }

    pub fn to_plain_text(&self) -> String {
        self.leaves()
            .into_iter()
            .map(|e| match e {
                Element::Heading(text) => format!("## {}", text),
                Element::Button { label } => format!("[ {} ]", label),
                Element::Text { text, .. } => text.clone(),
                Element::Group(_) => String::new(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Element {
        Element::Group(vec![
            Element::heading("Title"),
            Element::Group(vec![Element::button("Go"), Element::text("")]),
        ])
    }

    #[test]
    fn test_leaves_flatten_groups() {
        let view = sample();
        assert_eq!(
            view.leaves(),
            vec![
                &Element::heading("Title"),
                &Element::button("Go"),
                &Element::text(""),
            ]
        );
    }

    #[test]
    fn test_buttons() {
        assert_eq!(sample().buttons(), vec!["Go"]);
    }

    #[test]
    fn test_height_counts_empty_text() {
        assert_eq!(Element::text("").height(), 1);
        assert_eq!(Element::text("a\nb").height(), 2);
        assert_eq!(sample().height(), 2 + 3 + 1);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(sample().to_plain_text(), "## Title\n[ Go ]\n");
    }
}
