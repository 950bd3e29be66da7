// Full-page message with a row of buttons: login, confirmations, success pages

use super::Action;
use crate::components::{centered_line_x, centered_rect, Button, FocusRing, HitMap};
use crate::routes::Route;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug)]
pub struct NoticeScreen {
    route: Route,
    icon: &'static str,
    title: &'static str,
    body: &'static [&'static str],
    buttons: &'static [(&'static str, Route)],
    focus: FocusRing,
    hits: HitMap<usize>,
}

impl NoticeScreen {
    fn new(
        route: Route,
        icon: &'static str,
        title: &'static str,
        body: &'static [&'static str],
        buttons: &'static [(&'static str, Route)],
    ) -> Self {
        NoticeScreen {
            route,
            icon,
            title,
            body,
            buttons,
            focus: FocusRing::new(buttons.len()),
            hits: HitMap::new(),
        }
    }

    pub fn login() -> Self {
        Self::new(
            Route::Login,
            "📦",
            "Parcel Desk",
            &["Sign in to manage parcel intake, deliveries and rider reconciliation."],
            &[("Sign in", Route::Dashboard), ("Forgot password?", Route::ForgotPassword)],
        )
    }

    pub fn password_request_sent() -> Self {
        Self::new(
            Route::PasswordRequestSent,
            "✉",
            "Check your inbox",
            &[
                "If an account exists for that address, a reset link is on its way.",
                "The link expires in 30 minutes.",
            ],
            &[("Back to login", Route::Login)],
        )
    }

    pub fn parcel_sms_success() -> Self {
        Self::new(
            Route::ParcelSmsSuccess,
            "✓",
            "Parcel registered",
            &[
                "The receiver has been sent an SMS with the tracking number.",
                "Hand the parcel to dispatch for pickup.",
            ],
            &[
                ("Register another", Route::RegisterParcel),
                ("Go to dashboard", Route::Dashboard),
            ],
        )
    }

    pub fn reconciliation_success() -> Self {
        Self::new(
            Route::ReconciliationSuccess,
            "✓",
            "Reconciliation confirmed",
            &["The rider's cash and delivery figures have been signed off."],
            &[("Back to dashboard", Route::Dashboard)],
        )
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Down => {
                self.focus.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Up => {
                self.focus.previous();
                Action::None
            }
            KeyCode::Enter => self
                .buttons
                .get(self.focus.index())
                .map_or(Action::None, |(_, route)| Action::Navigate(*route)),
            _ => Action::None,
        }
    }

    pub fn handle_click(&mut self, column: u16, row: u16) -> Action {
        let Some(i) = self.hits.hit(column, row) else {
            return Action::None;
        };
        self.focus.set(i);
        self.buttons
            .get(i)
            .map_or(Action::None, |(_, route)| Action::Navigate(*route))
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.icon,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for text in self.body {
            lines.push(Line::from(Span::styled(*text, Style::default().fg(Color::Gray))));
        }
        lines.push(Line::from(""));

        let mut buttons = Vec::new();
        for (i, (label, _)) in self.buttons.iter().enumerate() {
            if i > 0 {
                buttons.push(Span::raw("   "));
            }
            let button = Button::new(label).focused(self.focus.is(i));
            buttons.push(if i == 0 { button.primary().span() } else { button.span() });
        }
        let button_row = lines.len() as u16;
        let button_line = Line::from(buttons);
        lines.push(button_line.clone());

        let height = lines.len() as u16 + 2;
        let card_area = centered_rect(72, height, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(card_area);

        // Button spans alternate with spacers: button i is span 2 * i
        self.hits.clear();
        self.hits.push_spans(
            &button_line,
            centered_line_x(&button_line, inner),
            inner.y + button_row,
            inner,
            |span| (span % 2 == 0).then_some(span / 2),
        );

        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);

        f.render_widget(Clear, card_area);
        f.render_widget(card, card_area);
    }
}
