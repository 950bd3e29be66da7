use super::Action;
use crate::mock::{Submission, SUBMISSIONS};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

/// Submitted parcels on the left, the selected one as a card on the right
#[derive(Debug)]
pub struct SubmissionsScreen {
    state: TableState,
}

impl Default for SubmissionsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionsScreen {
    pub fn new() -> Self {
        let mut state = TableState::default();
        state.select(Some(0));
        SubmissionsScreen { state }
    }

    pub fn selected_submission(&self) -> Option<&'static Submission> {
        self.state.selected().and_then(|i| SUBMISSIONS.get(i))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let len = SUBMISSIONS.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                let i = self.state.selected().map_or(0, |i| if i + 1 >= len { 0 } else { i + 1 });
                self.state.select(Some(i));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                let i = self.state.selected().map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
                self.state.select(Some(i));
            }
            KeyCode::Home => self.state.select(Some(0)),
            KeyCode::End => self.state.select(Some(len - 1)),
            _ => {}
        }
        Action::None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let header = Row::new(["Tracking #", "Receiver", "Fee", "POD"].iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        }))
        .style(Style::default().bg(Color::DarkGray));

        let rows = SUBMISSIONS.iter().map(|s| {
            let (pod, color) = if s.pod_attached {
                ("Yes", Color::Green)
            } else {
                ("No", Color::DarkGray)
            };
            Row::new(vec![
                Cell::from(s.tracking_id),
                Cell::from(s.receiver),
                Cell::from(s.delivery_fee),
                Cell::from(pod).style(Style::default().fg(color)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(16),
                Constraint::Length(10),
                Constraint::Length(5),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Submissions "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("→ ");

        f.render_stateful_widget(table, columns[0], &mut self.state);

        render_submission_card(f, columns[1], self.selected_submission());
    }
}

fn render_submission_card(f: &mut Frame, area: Rect, submission: Option<&Submission>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Submission Details ");

    let Some(s) = submission else {
        f.render_widget(Paragraph::new("No submission selected").block(block), area);
        return;
    };

    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let row = |name: &'static str, value: Span<'static>| {
        Line::from(vec![Span::styled(format!("  {:<14}", name), label), value])
    };

    let content = vec![
        Line::from(""),
        row("Tracking #", Span::raw(s.tracking_id)),
        row("Status", Span::styled(s.status.as_str(), Style::default().fg(s.status.color()))),
        Line::from(""),
        row("Sender", Span::raw(s.sender)),
        row("Receiver", Span::raw(s.receiver)),
        row("Destination", Span::raw(s.destination)),
        Line::from(""),
        row("Delivery fee", Span::styled(s.delivery_fee, Style::default().fg(Color::Green))),
        row(
            "POD",
            if s.pod_attached {
                Span::styled("Attached", Style::default().fg(Color::Green))
            } else {
                Span::styled("Not attached", Style::default().fg(Color::DarkGray))
            },
        ),
        Line::from(""),
        row("Submitted by", Span::raw(s.submitted_by)),
        row("Submitted at", Span::raw(s.submitted_at)),
    ];

    f.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps_and_jumps() {
        let mut screen = SubmissionsScreen::new();
        screen.handle_key(KeyEvent::from(KeyCode::Up));
        assert_eq!(screen.selected_submission().map(|s| s.tracking_id), Some("PKG-20414"));

        screen.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(screen.selected_submission().map(|s| s.tracking_id), Some("PKG-20418"));

        screen.handle_key(KeyEvent::from(KeyCode::End));
        screen.handle_key(KeyEvent::from(KeyCode::Home));
        assert_eq!(screen.selected_submission().map(|s| s.tracking_id), Some("PKG-20418"));
    }
}
