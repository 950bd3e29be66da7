use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// A push button drawn inline as `[ Label ]`
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    pub label: &'a str,
    pub focused: bool,
    pub primary: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Button {
            label,
            focused: false,
            primary: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn span(&self) -> Span<'a> {
        let base = if self.primary {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };

        let style = if self.focused {
            base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            base
        };

        Span::styled(format!("[ {} ]", self.label), style)
    }
}
