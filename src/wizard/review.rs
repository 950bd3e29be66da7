use super::costs::render_cost_breakdown;
use super::{nav_buttons, record_nav_buttons, DetailField, ParcelDraft, SectionEvent};
use crate::components::{FocusRing, HitMap};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PREVIOUS: usize = 0;
const FINISH: usize = 1;

/// Step 3. Read-only summary of the details step; Finish reports Next.
#[derive(Debug)]
pub struct ReviewSection {
    focus: FocusRing,
    hits: HitMap<usize>,
}

impl Default for ReviewSection {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewSection {
    pub fn new() -> Self {
        let mut focus = FocusRing::new(2);
        focus.set(FINISH);
        ReviewSection {
            focus,
            hits: HitMap::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> SectionEvent {
        match key.code {
            KeyCode::Tab | KeyCode::Right | KeyCode::Left | KeyCode::BackTab => {
                self.focus.next();
                SectionEvent::Idle
            }
            KeyCode::Enter if self.focus.is(PREVIOUS) => SectionEvent::Previous,
            KeyCode::Enter => SectionEvent::Next,
            _ => SectionEvent::Idle,
        }
    }

    pub fn handle_click(&mut self, column: u16, row: u16) -> SectionEvent {
        match self.hits.hit(column, row) {
            Some(PREVIOUS) => {
                self.focus.set(PREVIOUS);
                SectionEvent::Previous
            }
            Some(_) => {
                self.focus.set(FINISH);
                SectionEvent::Next
            }
            None => SectionEvent::Idle,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, draft: &ParcelDraft) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let mut lines = vec![Line::from("")];
        for field in DetailField::ALL {
            let value = field.get(draft);
            let shown = if value.is_empty() {
                Span::styled("—", Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(value, Style::default().fg(Color::White))
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<20}", field.label()),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                shown,
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  An SMS with the tracking number is sent to the receiver on submit.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Review & Submit ");
        let inner = block.inner(columns[0]);

        let nav = nav_buttons("Finish", self.focus.is(PREVIOUS), self.focus.is(FINISH));
        self.hits.clear();
        let nav_row = inner.y + lines.len() as u16;
        record_nav_buttons(&mut self.hits, &nav, inner.x, nav_row, inner, PREVIOUS, FINISH);
        lines.push(nav);

        let summary = Paragraph::new(lines).block(block);
        f.render_widget(summary, columns[0]);

        render_cost_breakdown(f, columns[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_is_focused_first() {
        let mut section = ReviewSection::new();
        assert_eq!(section.handle_key(KeyEvent::from(KeyCode::Enter)), SectionEvent::Next);
    }

    #[test]
    fn test_previous_after_moving_focus() {
        let mut section = ReviewSection::new();
        section.handle_key(KeyEvent::from(KeyCode::Left));
        assert_eq!(section.handle_key(KeyEvent::from(KeyCode::Enter)), SectionEvent::Previous);
    }

    #[test]
    fn test_clicking_buttons() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut section = ReviewSection::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                section.render(f, area, &ParcelDraft::default())
            })
            .unwrap();

        let previous = section.hits.area_of(PREVIOUS).unwrap();
        let finish = section.hits.area_of(FINISH).unwrap();
        assert_eq!(previous.y, finish.y);
        assert_eq!(section.handle_click(finish.x, finish.y), SectionEvent::Next);
        assert_eq!(section.handle_click(previous.x, previous.y), SectionEvent::Previous);
        assert_eq!(section.handle_click(0, 0), SectionEvent::Idle);
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut section = ReviewSection::new();
        assert_eq!(section.handle_key(KeyEvent::from(KeyCode::Char('x'))), SectionEvent::Idle);
    }
}
