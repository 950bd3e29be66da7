use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Labeled on/off switch. The owner holds the boolean and flips it.
#[derive(Debug, Clone, Copy)]
pub struct Toggle<'a> {
    pub label: &'a str,
    pub on: bool,
    pub focused: bool,
}

impl<'a> Toggle<'a> {
    pub fn line(&self) -> Line<'a> {
        let (mark, state, color) = if self.on {
            ("[x]", "ON ", Color::Green)
        } else {
            ("[ ]", "OFF", Color::DarkGray)
        };

        let label_style = if self.focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        Line::from(vec![
            Span::styled(format!("{} ", mark), Style::default().fg(color)),
            Span::styled(self.label, label_style),
            Span::raw("  "),
            Span::styled(state, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_renders_state() {
        let off = Toggle { label: "Proof of delivery", on: false, focused: false };
        let on = Toggle { on: true, ..off };
        assert_eq!(text(&off.line()), "[ ] Proof of delivery  OFF");
        assert_eq!(text(&on.line()), "[x] Proof of delivery  ON ");
    }
}
