// ⚖️ Rider Reconciliation - Confirm a rider's end-of-shift figures
//
// The figures are fixed display strings. Confirming signs them off as shown;
// nothing is recalculated.

use super::Action;
use crate::components::{Button, HitMap};
use crate::mock::RIDER_RECONCILIATION;
use crate::routes::Route;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Default)]
pub struct ReconciliationScreen {
    confirm_button: HitMap<()>,
}

impl ReconciliationScreen {
    pub fn new() -> Self {
        Self::default()
    }

    fn confirm(&self) -> Action {
        tracing::info!(rider = RIDER_RECONCILIATION.rider, "reconciliation confirmed");
        Action::Navigate(Route::ReconciliationSuccess)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => self.confirm(),
            _ => Action::None,
        }
    }

    pub fn handle_click(&mut self, column: u16, row: u16) -> Action {
        match self.confirm_button.hit(column, row) {
            Some(()) => self.confirm(),
            None => Action::None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let r = &RIDER_RECONCILIATION;

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let figure = |name: &'static str, value: &'static str, color: Color| {
            Line::from(vec![
                Span::styled(format!("  {:<20}", name), label),
                Span::styled(format!("{:>14}", value), Style::default().fg(color)),
            ])
        };

        let deliveries = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Rider: ", label),
                Span::styled(r.rider, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(format!("  {}", r.shift), Style::default().fg(Color::DarkGray))),
            Line::from(""),
            figure("Parcels assigned", r.parcels_assigned, Color::White),
            figure("Delivered", r.parcels_delivered, Color::Green),
            figure("Returned", r.parcels_returned, Color::Red),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Deliveries "),
        );
        f.render_widget(deliveries, columns[0]);

        let confirm = Line::from(vec![
            Span::raw("  "),
            Button::new("Confirm reconciliation").primary().focused(true).span(),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Reconciliation ");
        let inner = block.inner(columns[1]);

        // Blank, three figures, rule, balance, blank, then the button
        self.confirm_button.clear();
        self.confirm_button
            .push_spans(&confirm, inner.x, inner.y + 6, inner, |span| (span == 1).then_some(()));

        let cash = Paragraph::new(vec![
            Line::from(""),
            figure("Cash expected", r.cash_expected, Color::White),
            figure("Cash collected", r.cash_collected, Color::Green),
            Line::from(Span::styled(
                "  ──────────────────────────────────",
                Style::default().fg(Color::DarkGray),
            )),
            figure("Balance", r.balance, Color::Yellow),
            Line::from(""),
            confirm,
        ])
        .block(block);
        f.render_widget(cash, columns[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicking_confirm_navigates() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut screen = ReconciliationScreen::new();
        assert_eq!(screen.handle_click(60, 7), Action::None);

        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                screen.render(f, area)
            })
            .unwrap();

        // Right-hand card starts at column 50; button row is 1 + 6
        let row: String = (0..100)
            .map(|x| terminal.backend().buffer().get(x, 7).symbol().to_string())
            .collect();
        assert!(row.contains("[ Confirm reconciliation ]"));

        assert_eq!(screen.handle_click(55, 7), Action::Navigate(Route::ReconciliationSuccess));
        assert_eq!(screen.handle_click(55, 6), Action::None);
    }

    #[test]
    fn test_confirm_navigates() {
        let mut screen = ReconciliationScreen::new();
        assert_eq!(screen.handle_key(KeyEvent::from(KeyCode::Char('x'))), Action::None);
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Enter)),
            Action::Navigate(Route::ReconciliationSuccess)
        );
    }
}
