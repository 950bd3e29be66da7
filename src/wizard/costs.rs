use super::{nav_buttons, record_nav_buttons, ParcelDraft, SectionEvent};
use crate::components::{CostInput, CostInputFocus, FocusRing, HitMap, Toggle};
use crate::config::Config;
use crate::mock::{COST_BREAKDOWN, COST_TOTAL};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const DELIVERY_FEE: usize = 0;
const AMOUNT_PAID: usize = 1;
const POD_TOGGLE: usize = 2;
const PREVIOUS: usize = 3;
const CONTINUE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Fee(CostInputFocus),
    Paid(CostInputFocus),
    Pod,
    Previous,
    Continue,
}

/// Step 2. The POD switch lives here and starts off every time the step is
/// entered; it is not part of the draft.
#[derive(Debug)]
pub struct CostsSection {
    focus: FocusRing,
    fee_part: CostInputFocus,
    paid_part: CostInputFocus,
    pod_enabled: bool,
    hits: HitMap<Target>,
}

impl Default for CostsSection {
    fn default() -> Self {
        Self::new()
    }
}

impl CostsSection {
    pub fn new() -> Self {
        CostsSection {
            focus: FocusRing::new(5),
            fee_part: CostInputFocus::Field,
            paid_part: CostInputFocus::Field,
            pod_enabled: false,
            hits: HitMap::new(),
        }
    }

    pub fn pod_enabled(&self) -> bool {
        self.pod_enabled
    }

    pub fn toggle_pod(&mut self) {
        self.pod_enabled = !self.pod_enabled;
        tracing::debug!(pod_enabled = self.pod_enabled, "POD toggled");
    }

    fn fee_input<'a>(draft: &ParcelDraft, config: &'a Config) -> CostInput<'a> {
        CostInput {
            label: "Delivery fee",
            value: draft.delivery_fee,
            presets: &config.delivery_fee_presets,
            allow_clear: false,
            currency: &config.currency_symbol,
        }
    }

    fn paid_input<'a>(draft: &ParcelDraft, config: &'a Config) -> CostInput<'a> {
        CostInput {
            label: "Amount paid",
            value: draft.amount_paid,
            presets: &config.amount_paid_presets,
            allow_clear: true,
            currency: &config.currency_symbol,
        }
    }

    fn move_focus(&mut self, forward: bool) {
        if forward {
            self.focus.next();
        } else {
            self.focus.previous();
        }
        self.fee_part = CostInputFocus::Field;
        self.paid_part = CostInputFocus::Field;
    }

    pub fn handle_key(&mut self, key: KeyEvent, draft: &mut ParcelDraft, config: &Config) -> SectionEvent {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.move_focus(true);
                return SectionEvent::Idle;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.move_focus(false);
                return SectionEvent::Idle;
            }
            _ => {}
        }

        match self.focus.index() {
            DELIVERY_FEE => {
                let input = Self::fee_input(draft, config);
                let mut changed = None;
                let consumed = input.handle_key(&key, &mut self.fee_part, |v| changed = Some(v));
                if let Some(value) = changed {
                    draft.delivery_fee = value;
                }
                if !consumed && key.code == KeyCode::Enter {
                    self.move_focus(true);
                }
                SectionEvent::Idle
            }
            AMOUNT_PAID => {
                let input = Self::paid_input(draft, config);
                let mut changed = None;
                let consumed = input.handle_key(&key, &mut self.paid_part, |v| changed = Some(v));
                if let Some(value) = changed {
                    draft.amount_paid = value;
                }
                if !consumed && key.code == KeyCode::Enter {
                    self.move_focus(true);
                }
                SectionEvent::Idle
            }
            POD_TOGGLE => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.toggle_pod();
                }
                SectionEvent::Idle
            }
            PREVIOUS => match key.code {
                KeyCode::Enter => SectionEvent::Previous,
                KeyCode::Right => {
                    self.focus.set(CONTINUE);
                    SectionEvent::Idle
                }
                _ => SectionEvent::Idle,
            },
            _ => match key.code {
                KeyCode::Enter => SectionEvent::Next,
                KeyCode::Left => {
                    self.focus.set(PREVIOUS);
                    SectionEvent::Idle
                }
                _ => SectionEvent::Idle,
            },
        }
    }

    /// Clicks land on whatever was drawn there by the last render
    pub fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        draft: &mut ParcelDraft,
        config: &Config,
    ) -> SectionEvent {
        let Some(target) = self.hits.hit(column, row) else {
            return SectionEvent::Idle;
        };

        match target {
            Target::Fee(part) => {
                self.focus.set(DELIVERY_FEE);
                self.fee_part = part;
                self.paid_part = CostInputFocus::Field;
                let mut changed = None;
                Self::fee_input(draft, config).click(part, |v| changed = Some(v));
                if let Some(value) = changed {
                    draft.delivery_fee = value;
                }
                SectionEvent::Idle
            }
            Target::Paid(part) => {
                self.focus.set(AMOUNT_PAID);
                self.paid_part = part;
                self.fee_part = CostInputFocus::Field;
                let mut changed = None;
                Self::paid_input(draft, config).click(part, |v| changed = Some(v));
                if let Some(value) = changed {
                    draft.amount_paid = value;
                }
                SectionEvent::Idle
            }
            Target::Pod => {
                self.focus.set(POD_TOGGLE);
                self.toggle_pod();
                SectionEvent::Idle
            }
            Target::Previous => {
                self.focus.set(PREVIOUS);
                SectionEvent::Previous
            }
            Target::Continue => {
                self.focus.set(CONTINUE);
                SectionEvent::Next
            }
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, draft: &ParcelDraft, config: &Config) {
        self.hits.clear();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let form = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Costs & Proof of Delivery ");
        let inner = form.inner(columns[0]);
        f.render_widget(form, columns[0]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(CostInput::HEIGHT),
                Constraint::Length(CostInput::HEIGHT),
                Constraint::Length(3), // POD toggle + hint
                Constraint::Length(2), // buttons
                Constraint::Min(0),
            ])
            .split(inner);

        let fee_parts = Self::fee_input(draft, config).render(
            f,
            rows[0],
            self.focus.is(DELIVERY_FEE).then_some(self.fee_part),
        );
        for (part, part_area) in fee_parts {
            self.hits.push(Target::Fee(part), part_area);
        }
        let paid_parts = Self::paid_input(draft, config).render(
            f,
            rows[1],
            self.focus.is(AMOUNT_PAID).then_some(self.paid_part),
        );
        for (part, part_area) in paid_parts {
            self.hits.push(Target::Paid(part), part_area);
        }

        let toggle = Toggle {
            label: "Proof of delivery required",
            on: self.pod_enabled,
            focused: self.focus.is(POD_TOGGLE),
        }
        .line();
        self.hits.push_spans(&toggle, rows[2].x, rows[2].y + 1, rows[2], |_| Some(Target::Pod));

        let pod = Paragraph::new(vec![
            Line::from(""),
            toggle,
            Line::from(Span::styled(
                "  Rider must capture a photo or signature at drop-off",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        f.render_widget(pod, rows[2]);

        let nav = nav_buttons("Continue", self.focus.is(PREVIOUS), self.focus.is(CONTINUE));
        record_nav_buttons(
            &mut self.hits,
            &nav,
            rows[3].x,
            rows[3].y + 1,
            rows[3],
            Target::Previous,
            Target::Continue,
        );
        let buttons = Paragraph::new(vec![Line::from(""), nav]);
        f.render_widget(buttons, rows[3]);

        render_cost_breakdown(f, columns[1]);
    }
}

/// Static figures, identical on every parcel
pub(crate) fn render_cost_breakdown(f: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];
    for (label, amount) in COST_BREAKDOWN.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<20}", label), Style::default().fg(Color::Gray)),
            Span::styled(format!("{:>12}", amount), Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "  ────────────────────────────────",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {:<20}", COST_TOTAL.0),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>12}", COST_TOTAL.1),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]));

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Cost Breakdown "),
    );
    f.render_widget(card, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(section: &mut CostsSection, draft: &mut ParcelDraft, code: KeyCode) -> SectionEvent {
        section.handle_key(KeyEvent::from(code), draft, &Config::default())
    }

    #[test]
    fn test_pod_starts_off_and_flips() {
        let mut section = CostsSection::new();
        let mut draft = ParcelDraft::default();
        assert!(!section.pod_enabled());

        press(&mut section, &mut draft, KeyCode::Tab);
        press(&mut section, &mut draft, KeyCode::Tab);
        press(&mut section, &mut draft, KeyCode::Char(' '));
        assert!(section.pod_enabled());
        press(&mut section, &mut draft, KeyCode::Enter);
        assert!(!section.pod_enabled());

        // The toggle never touches the draft
        assert_eq!(draft, ParcelDraft::default());
    }

    #[test]
    fn test_typing_delivery_fee() {
        let mut section = CostsSection::new();
        let mut draft = ParcelDraft::default();
        for c in "25x0-0".chars() {
            press(&mut section, &mut draft, KeyCode::Char(c));
        }
        assert_eq!(draft.delivery_fee, Some(2500));
    }

    #[test]
    fn test_delivery_fee_preset_toggle() {
        let mut section = CostsSection::new();
        let mut draft = ParcelDraft::default();

        // Field -> first preset (1000) -> second preset (1500)
        press(&mut section, &mut draft, KeyCode::Right);
        press(&mut section, &mut draft, KeyCode::Right);
        press(&mut section, &mut draft, KeyCode::Enter);
        assert_eq!(draft.delivery_fee, Some(1500));

        press(&mut section, &mut draft, KeyCode::Enter);
        assert_eq!(draft.delivery_fee, None);
    }

    #[test]
    fn test_amount_paid_leave_blank() {
        let mut section = CostsSection::new();
        let mut draft = ParcelDraft::default();

        press(&mut section, &mut draft, KeyCode::Tab);
        for c in "900".chars() {
            press(&mut section, &mut draft, KeyCode::Char(c));
        }
        assert_eq!(draft.amount_paid, Some(900));

        // No presets configured, so Right lands on "Leave blank"
        press(&mut section, &mut draft, KeyCode::Right);
        press(&mut section, &mut draft, KeyCode::Enter);
        assert_eq!(draft.amount_paid, None);
    }

    fn rendered(section: &mut CostsSection, draft: &ParcelDraft) {
        use ratatui::{backend::TestBackend, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal
            .draw(|f| {
                let area = f.size();
                section.render(f, area, draft, &Config::default())
            })
            .unwrap();
    }

    fn click(section: &mut CostsSection, draft: &mut ParcelDraft, target: Target) -> SectionEvent {
        let area = section.hits.area_of(target).unwrap();
        section.handle_click(area.x, area.y, draft, &Config::default())
    }

    #[test]
    fn test_clicking_presets_and_pod() {
        let mut section = CostsSection::new();
        let mut draft = ParcelDraft::default();
        rendered(&mut section, &draft);

        click(&mut section, &mut draft, Target::Fee(CostInputFocus::Preset(2)));
        assert_eq!(draft.delivery_fee, Some(2000));

        rendered(&mut section, &draft);
        click(&mut section, &mut draft, Target::Fee(CostInputFocus::Preset(2)));
        assert_eq!(draft.delivery_fee, None);

        click(&mut section, &mut draft, Target::Pod);
        assert!(section.pod_enabled());
        click(&mut section, &mut draft, Target::Pod);
        assert!(!section.pod_enabled());

        // Amount paid has no presets, only "Leave blank"
        draft.amount_paid = Some(300);
        assert!(section.hits.area_of(Target::Paid(CostInputFocus::Preset(0))).is_none());
        click(&mut section, &mut draft, Target::Paid(CostInputFocus::Clear));
        assert_eq!(draft.amount_paid, None);
    }

    #[test]
    fn test_clicking_navigation_buttons() {
        let mut section = CostsSection::new();
        let mut draft = ParcelDraft::default();
        rendered(&mut section, &draft);

        assert_eq!(click(&mut section, &mut draft, Target::Continue), SectionEvent::Next);
        assert_eq!(click(&mut section, &mut draft, Target::Previous), SectionEvent::Previous);
        assert_eq!(section.handle_click(99, 23, &mut draft, &Config::default()), SectionEvent::Idle);
    }

    #[test]
    fn test_navigation_buttons() {
        let mut section = CostsSection::new();
        let mut draft = ParcelDraft::default();

        for _ in 0..CONTINUE {
            press(&mut section, &mut draft, KeyCode::Tab);
        }
        assert_eq!(press(&mut section, &mut draft, KeyCode::Enter), SectionEvent::Next);
        press(&mut section, &mut draft, KeyCode::Left);
        assert_eq!(press(&mut section, &mut draft, KeyCode::Enter), SectionEvent::Previous);
    }
}
