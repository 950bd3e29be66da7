use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Controlled single-line text input.
///
/// The owner keeps the string; edits come back through `on_change` with the
/// whole new value.
#[derive(Debug, Clone, Copy)]
pub struct TextField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
}

impl<'a> TextField<'a> {
    /// Returns true when the key was an edit and was consumed
    pub fn handle_key(&self, key: &KeyEvent, on_change: impl FnOnce(String)) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        match key.code {
            KeyCode::Char(c) => {
                let mut next = self.value.to_string();
                next.push(c);
                on_change(next);
                true
            }
            KeyCode::Backspace => {
                if !self.value.is_empty() {
                    let mut next = self.value.to_string();
                    next.pop();
                    on_change(next);
                }
                true
            }
            _ => false,
        }
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        let label_style = if self.focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let marker = if self.focused { "› " } else { "  " };

        let value = if self.value.is_empty() {
            Span::styled(
                self.placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(self.value, Style::default().fg(Color::White))
        };

        let mut value_line = vec![Span::raw(marker), value];
        if self.focused {
            value_line.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }

        vec![
            Line::from(Span::styled(format!("  {}", self.label), label_style)),
            Line::from(value_line),
        ]
    }
}
