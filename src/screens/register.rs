use super::Action;
use crate::components::StepIndicator;
use crate::config::Config;
use crate::routes::Route;
use crate::wizard::{CostsSection, DetailsSection, ParcelDraft, ReviewSection, SectionEvent, FIRST_STEP, LAST_STEP};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

#[derive(Debug)]
enum Section {
    Details(DetailsSection),
    Costs(CostsSection),
    Review(ReviewSection),
}

impl Section {
    /// Fresh section state for a step; local state does not survive leaving it
    fn mount(step: u8) -> Self {
        match step {
            1 => Section::Details(DetailsSection::new()),
            2 => Section::Costs(CostsSection::new()),
            _ => Section::Review(ReviewSection::new()),
        }
    }
}

/// Hosts the three wizard sections and turns their Next/Previous into
/// step changes or route changes.
#[derive(Debug)]
pub struct RegisterScreen {
    step: u8,
    section: Section,
    draft: ParcelDraft,
}

impl Default for RegisterScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterScreen {
    pub fn new() -> Self {
        RegisterScreen {
            step: FIRST_STEP,
            section: Section::mount(FIRST_STEP),
            draft: ParcelDraft::default(),
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn draft(&self) -> &ParcelDraft {
        &self.draft
    }

    /// POD switch of the costs step, `None` on the other steps
    pub fn pod_enabled(&self) -> Option<bool> {
        match &self.section {
            Section::Costs(costs) => Some(costs.pod_enabled()),
            _ => None,
        }
    }

    pub fn captures_text(&self) -> bool {
        match &self.section {
            Section::Details(details) => details.focused_field().is_some(),
            // Digits go to the cost inputs; letters are ignored there anyway
            Section::Costs(_) => true,
            Section::Review(_) => false,
        }
    }

    fn go_to(&mut self, step: u8) {
        tracing::debug!(from = self.step, to = step, "wizard step change");
        self.step = step;
        self.section = Section::mount(step);
    }

    pub fn next(&mut self) -> Action {
        if self.step >= LAST_STEP {
            tracing::info!(receiver = %self.draft.receiver_name, "parcel submitted");
            Action::Navigate(Route::ParcelSmsSuccess)
        } else {
            self.go_to(self.step + 1);
            Action::None
        }
    }

    pub fn previous(&mut self) -> Action {
        if self.step <= FIRST_STEP {
            Action::Navigate(Route::Dashboard)
        } else {
            self.go_to(self.step - 1);
            Action::None
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, config: &Config) -> Action {
        let event = match &mut self.section {
            Section::Details(details) => details.handle_key(key, &mut self.draft),
            Section::Costs(costs) => costs.handle_key(key, &mut self.draft, config),
            Section::Review(review) => review.handle_key(key),
        };

        self.apply(event)
    }

    fn apply(&mut self, event: SectionEvent) -> Action {
        match event {
            SectionEvent::Idle => Action::None,
            SectionEvent::Next => self.next(),
            SectionEvent::Previous => self.previous(),
        }
    }

    pub fn handle_click(&mut self, column: u16, row: u16, config: &Config) -> Action {
        let event = match &mut self.section {
            Section::Details(details) => details.handle_click(column, row),
            Section::Costs(costs) => costs.handle_click(column, row, &mut self.draft, config),
            Section::Review(review) => review.handle_click(column, row),
        };
        self.apply(event)
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, config: &Config) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        f.render_widget(StepIndicator { current: Some(self.step) }, rows[0]);

        match &mut self.section {
            Section::Details(details) => details.render(f, rows[1], &self.draft),
            Section::Costs(costs) => costs.render(f, rows[1], &self.draft, config),
            Section::Review(review) => review.render(f, rows[1], &self.draft),
        }
    }
}
