use super::Action;
use crate::components::{centered_rect, Button, FocusRing, HitMap, TextField};
use crate::routes::Route;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const EMAIL: usize = 0;
const SEND: usize = 1;
const BACK: usize = 2;

/// Password reset request. The only screen that owns a text value itself.
#[derive(Debug)]
pub struct ForgotPasswordScreen {
    email: String,
    focus: FocusRing,
    hits: HitMap<usize>,
}

impl Default for ForgotPasswordScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ForgotPasswordScreen {
    pub fn new() -> Self {
        ForgotPasswordScreen {
            email: String::new(),
            focus: FocusRing::new(3),
            hits: HitMap::new(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn captures_text(&self) -> bool {
        self.focus.is(EMAIL)
    }

    fn field<'a>(email: &'a str, focus: &FocusRing) -> TextField<'a> {
        TextField {
            label: "Email address",
            value: email,
            placeholder: "name@company.com",
            focused: focus.is(EMAIL),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus.next();
                return Action::None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus.previous();
                return Action::None;
            }
            _ => {}
        }

        match self.focus.index() {
            EMAIL => {
                let mut changed = None;
                let consumed = Self::field(&self.email, &self.focus).handle_key(&key, |v| changed = Some(v));
                if let Some(value) = changed {
                    self.email = value;
                }
                if !consumed && key.code == KeyCode::Enter {
                    self.focus.set(SEND);
                }
                Action::None
            }
            SEND if key.code == KeyCode::Enter => self.send(),
            BACK if key.code == KeyCode::Enter => Action::Navigate(Route::Login),
            _ => match key.code {
                KeyCode::Left => {
                    self.focus.set(SEND);
                    Action::None
                }
                KeyCode::Right => {
                    self.focus.set(BACK);
                    Action::None
                }
                _ => Action::None,
            },
        }
    }

    fn send(&self) -> Action {
        tracing::info!("password reset requested");
        Action::Navigate(Route::PasswordRequestSent)
    }

    pub fn handle_click(&mut self, column: u16, row: u16) -> Action {
        let Some(target) = self.hits.hit(column, row) else {
            return Action::None;
        };
        self.focus.set(target);
        match target {
            SEND => self.send(),
            BACK => Action::Navigate(Route::Login),
            _ => Action::None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Reset your password",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "  Enter the email you sign in with and we'll send a reset link.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];
        let field_row = lines.len() as u16;
        lines.extend(Self::field(&self.email, &self.focus).lines());
        lines.push(Line::from(""));

        let button_row = lines.len() as u16;
        let button_line = Line::from(vec![
            Span::raw("  "),
            Button::new("Send reset link")
                .primary()
                .focused(self.focus.is(SEND))
                .span(),
            Span::raw("   "),
            Button::new("Back to login").focused(self.focus.is(BACK)).span(),
        ]);
        lines.push(button_line.clone());

        let card_area = centered_rect(70, lines.len() as u16 + 2, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Parcel Desk ");
        let inner = block.inner(card_area);

        self.hits.clear();
        self.hits.push(
            EMAIL,
            Rect::new(inner.x, inner.y + field_row, inner.width, 2).intersection(inner),
        );
        self.hits.push_spans(&button_line, inner.x, inner.y + button_row, inner, |span| match span {
            1 => Some(SEND),
            3 => Some(BACK),
            _ => None,
        });

        let card = Paragraph::new(lines).block(block);

        f.render_widget(Clear, card_area);
        f.render_widget(card, card_area);
    }
}
