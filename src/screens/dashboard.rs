use super::Action;
use crate::mock::{DASHBOARD_STATS, RECENT_PARCELS};
use crate::routes::Route;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

#[derive(Debug)]
pub struct DashboardScreen {
    state: TableState,
}

impl Default for DashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardScreen {
    pub fn new() -> Self {
        let mut state = TableState::default();
        state.select(Some(0));
        DashboardScreen { state }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn next(&mut self) {
        let len = RECENT_PARCELS.len();
        let i = match self.state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = RECENT_PARCELS.len();
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Char('n') => return Action::Navigate(Route::RegisterParcel),
            _ => {}
        }
        Action::None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0)])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[0]);

        for (stat, card_area) in DASHBOARD_STATS.iter().zip(cards.iter()) {
            let card = Paragraph::new(vec![
                Line::from(Span::styled(
                    stat.value,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(stat.hint, Style::default().fg(Color::DarkGray))),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White))
                    .title(format!(" {} ", stat.label)),
            );
            f.render_widget(card, *card_area);
        }

        let header_cells = ["Tracking #", "Receiver", "Destination", "Status"]
            .iter()
            .map(|h| {
                Cell::from(*h).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            });
        let header = Row::new(header_cells)
            .style(Style::default().bg(Color::DarkGray))
            .height(1);

        let parcel_rows = RECENT_PARCELS.iter().map(|p| {
            Row::new(vec![
                Cell::from(p.tracking_id),
                Cell::from(p.receiver),
                Cell::from(p.destination),
                Cell::from(p.status.as_str()).style(Style::default().fg(p.status.color())),
            ])
        });

        let table = Table::new(
            parcel_rows,
            [
                Constraint::Length(12),
                Constraint::Length(18),
                Constraint::Length(20),
                Constraint::Length(16),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Recent Parcels "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

        f.render_stateful_widget(table, rows[1], &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut screen = DashboardScreen::new();
        screen.previous();
        assert_eq!(screen.selected(), Some(RECENT_PARCELS.len() - 1));
        screen.next();
        assert_eq!(screen.selected(), Some(0));
    }

    #[test]
    fn test_new_parcel_shortcut() {
        let mut screen = DashboardScreen::new();
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Char('n'))),
            Action::Navigate(Route::RegisterParcel)
        );
        assert_eq!(screen.handle_key(KeyEvent::from(KeyCode::Char('j'))), Action::None);
        assert_eq!(screen.selected(), Some(1));
    }
}
