use super::{nav_buttons, record_nav_buttons, ParcelDraft, SectionEvent};
use crate::components::{FocusRing, HitMap, TextField};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailField {
    SenderName,
    SenderPhone,
    ReceiverName,
    ReceiverPhone,
    DeliveryAddress,
    Description,
}

impl DetailField {
    pub const ALL: [DetailField; 6] = [
        DetailField::SenderName,
        DetailField::SenderPhone,
        DetailField::ReceiverName,
        DetailField::ReceiverPhone,
        DetailField::DeliveryAddress,
        DetailField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailField::SenderName => "Sender name",
            DetailField::SenderPhone => "Sender phone",
            DetailField::ReceiverName => "Receiver name",
            DetailField::ReceiverPhone => "Receiver phone",
            DetailField::DeliveryAddress => "Delivery address",
            DetailField::Description => "Parcel description",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DetailField::SenderName | DetailField::ReceiverName => "Full name",
            DetailField::SenderPhone | DetailField::ReceiverPhone => "080 0000 0000",
            DetailField::DeliveryAddress => "Street, area, city",
            DetailField::Description => "What is in the parcel?",
        }
    }

    pub fn get<'a>(&self, draft: &'a ParcelDraft) -> &'a str {
        match self {
            DetailField::SenderName => &draft.sender_name,
            DetailField::SenderPhone => &draft.sender_phone,
            DetailField::ReceiverName => &draft.receiver_name,
            DetailField::ReceiverPhone => &draft.receiver_phone,
            DetailField::DeliveryAddress => &draft.delivery_address,
            DetailField::Description => &draft.description,
        }
    }

    pub fn set(&self, draft: &mut ParcelDraft, value: String) {
        let slot = match self {
            DetailField::SenderName => &mut draft.sender_name,
            DetailField::SenderPhone => &mut draft.sender_phone,
            DetailField::ReceiverName => &mut draft.receiver_name,
            DetailField::ReceiverPhone => &mut draft.receiver_phone,
            DetailField::DeliveryAddress => &mut draft.delivery_address,
            DetailField::Description => &mut draft.description,
        };
        *slot = value;
    }
}

const PREVIOUS: usize = DetailField::ALL.len();
const CONTINUE: usize = DetailField::ALL.len() + 1;

/// Step 1
#[derive(Debug)]
pub struct DetailsSection {
    focus: FocusRing,
    hits: HitMap<usize>,
}

impl Default for DetailsSection {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailsSection {
    pub fn new() -> Self {
        DetailsSection {
            focus: FocusRing::new(DetailField::ALL.len() + 2),
            hits: HitMap::new(),
        }
    }

    pub fn focused_field(&self) -> Option<DetailField> {
        DetailField::ALL.get(self.focus.index()).copied()
    }

    pub fn handle_key(&mut self, key: KeyEvent, draft: &mut ParcelDraft) -> SectionEvent {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus.next();
                return SectionEvent::Idle;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus.previous();
                return SectionEvent::Idle;
            }
            _ => {}
        }

        if let Some(field) = self.focused_field() {
            let input = TextField {
                label: field.label(),
                value: field.get(draft),
                placeholder: field.placeholder(),
                focused: true,
            };
            let mut changed = None;
            let consumed = input.handle_key(&key, |v| changed = Some(v));
            if let Some(value) = changed {
                field.set(draft, value);
            }
            if consumed {
                return SectionEvent::Idle;
            }
            if key.code == KeyCode::Enter {
                self.focus.next();
            }
            return SectionEvent::Idle;
        }

        match (key.code, self.focus.index()) {
            (KeyCode::Enter, PREVIOUS) => SectionEvent::Previous,
            (KeyCode::Enter, CONTINUE) => SectionEvent::Next,
            (KeyCode::Left, CONTINUE) => {
                self.focus.set(PREVIOUS);
                SectionEvent::Idle
            }
            (KeyCode::Right, PREVIOUS) => {
                self.focus.set(CONTINUE);
                SectionEvent::Idle
            }
            _ => SectionEvent::Idle,
        }
    }

    /// Clicking a field focuses it; clicking a button acts like Enter on it
    pub fn handle_click(&mut self, column: u16, row: u16) -> SectionEvent {
        let Some(target) = self.hits.hit(column, row) else {
            return SectionEvent::Idle;
        };
        self.focus.set(target);
        match target {
            PREVIOUS => SectionEvent::Previous,
            CONTINUE => SectionEvent::Next,
            _ => SectionEvent::Idle,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, draft: &ParcelDraft) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Parcel Details ");
        let inner = block.inner(area);
        self.hits.clear();

        let mut lines = vec![Line::from("")];
        for (i, field) in DetailField::ALL.iter().enumerate() {
            let input = TextField {
                label: field.label(),
                value: field.get(draft),
                placeholder: field.placeholder(),
                focused: self.focus.is(i),
            };
            // Label and value rows
            let top = inner.y + lines.len() as u16;
            self.hits
                .push(i, Rect::new(inner.x, top, inner.width, 2).intersection(inner));
            lines.extend(input.lines());
        }

        lines.push(Line::from(""));
        let nav = nav_buttons("Continue", self.focus.is(PREVIOUS), self.focus.is(CONTINUE));
        let nav_row = inner.y + lines.len() as u16;
        record_nav_buttons(&mut self.hits, &nav, inner.x, nav_row, inner, PREVIOUS, CONTINUE);
        lines.push(nav);

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(section: &mut DetailsSection, draft: &mut ParcelDraft, code: KeyCode) -> SectionEvent {
        section.handle_key(KeyEvent::from(code), draft)
    }

    fn type_str(section: &mut DetailsSection, draft: &mut ParcelDraft, s: &str) {
        for c in s.chars() {
            press(section, draft, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_fills_focused_field() {
        let mut section = DetailsSection::new();
        let mut draft = ParcelDraft::default();

        type_str(&mut section, &mut draft, "Kemi");
        press(&mut section, &mut draft, KeyCode::Tab);
        type_str(&mut section, &mut draft, "0803");
        press(&mut section, &mut draft, KeyCode::Backspace);

        assert_eq!(draft.sender_name, "Kemi");
        assert_eq!(draft.sender_phone, "080");
    }

    #[test]
    fn test_enter_in_field_moves_on() {
        let mut section = DetailsSection::new();
        let mut draft = ParcelDraft::default();
        assert_eq!(press(&mut section, &mut draft, KeyCode::Enter), SectionEvent::Idle);
        assert_eq!(section.focused_field(), Some(DetailField::SenderPhone));
    }

    #[test]
    fn test_clicks_focus_fields_and_press_buttons() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut section = DetailsSection::new();
        let mut draft = ParcelDraft::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                section.render(f, area, &draft)
            })
            .unwrap();

        // Border, blank row, then two rows per field: receiver name is the third
        assert_eq!(section.handle_click(10, 7), SectionEvent::Idle);
        assert_eq!(section.focused_field(), Some(DetailField::ReceiverName));
        type_str(&mut section, &mut draft, "Bola");
        assert_eq!(draft.receiver_name, "Bola");

        let continue_area = section.hits.area_of(CONTINUE).unwrap();
        assert_eq!(continue_area.y, 15);
        assert_eq!(section.handle_click(continue_area.x, continue_area.y), SectionEvent::Next);
        let previous_area = section.hits.area_of(PREVIOUS).unwrap();
        assert_eq!(section.handle_click(previous_area.x, previous_area.y), SectionEvent::Previous);

        // Blank row between the last field and the buttons
        assert_eq!(section.handle_click(10, 14), SectionEvent::Idle);
    }

    #[test]
    fn test_buttons_report_navigation_without_validation() {
        let mut section = DetailsSection::new();
        let mut draft = ParcelDraft::default();

        // All fields empty, Continue still reports Next
        for _ in 0..CONTINUE {
            press(&mut section, &mut draft, KeyCode::Tab);
        }
        assert_eq!(press(&mut section, &mut draft, KeyCode::Enter), SectionEvent::Next);

        press(&mut section, &mut draft, KeyCode::Left);
        assert_eq!(press(&mut section, &mut draft, KeyCode::Enter), SectionEvent::Previous);
        assert_eq!(draft, ParcelDraft::default());
    }
}
