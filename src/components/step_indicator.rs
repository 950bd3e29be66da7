use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const WIZARD_STEPS: [&str; 3] = ["Parcel Details", "Costs & POD", "Review & Submit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Upcoming,
}

pub fn step_state(step: u8, current: u8) -> StepState {
    use std::cmp::Ordering;
    match step.cmp(&current) {
        Ordering::Less => StepState::Completed,
        Ordering::Equal => StepState::Active,
        Ordering::Greater => StepState::Upcoming,
    }
}

/// Per-step state for the fixed step list, or `None` when no step is given
/// or the step is outside the list
pub fn step_states(current: Option<u8>) -> Option<[(u8, &'static str, StepState); 3]> {
    let current = current.filter(|n| (1..=WIZARD_STEPS.len() as u8).contains(n))?;
    let mut out = [(0, "", StepState::Upcoming); 3];
    for (i, name) in WIZARD_STEPS.iter().enumerate() {
        let step = i as u8 + 1;
        out[i] = (step, *name, step_state(step, current));
    }
    Some(out)
}

/// Progress bar across the top of the registration wizard
pub struct StepIndicator {
    pub current: Option<u8>,
}

impl Widget for StepIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(states) = step_states(self.current) else {
            return;
        };

        let mut spans = vec![Span::raw(" ")];
        for (i, (step, name, state)) in states.iter().enumerate() {
            if i > 0 {
                let connector = if *state == StepState::Upcoming {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::Green)
                };
                spans.push(Span::styled(" ──── ", connector));
            }

            let (badge, style) = match state {
                StepState::Completed => ("✓".to_string(), Style::default().fg(Color::Green)),
                StepState::Active => (
                    step.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                StepState::Upcoming => (step.to_string(), Style::default().fg(Color::DarkGray)),
            };

            spans.push(Span::styled(format!("({}) {}", badge, name), style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_states_by_comparison() {
        for current in 1..=3u8 {
            let states = step_states(Some(current)).unwrap();
            for (step, _, state) in states {
                let expected = if step < current {
                    StepState::Completed
                } else if step == current {
                    StepState::Active
                } else {
                    StepState::Upcoming
                };
                assert_eq!(state, expected, "step {} at current {}", step, current);
            }
        }
    }

    #[test]
    fn test_no_step_no_states() {
        assert!(step_states(None).is_none());
    }

    #[test]
    fn test_step_names_are_fixed() {
        let names: Vec<_> = step_states(Some(1)).unwrap().iter().map(|(_, n, _)| *n).collect();
        assert_eq!(names, WIZARD_STEPS.to_vec());
    }

    fn rendered(current: Option<u8>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|f| f.render_widget(StepIndicator { current }, f.size()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_nothing_without_step() {
        assert!(rendered(None).trim().is_empty());
    }

    #[test]
    fn test_out_of_range_step_renders_nothing() {
        assert!(step_states(Some(0)).is_none());
        assert!(step_states(Some(4)).is_none());
        assert!(step_states(Some(u8::MAX)).is_none());
        assert!(rendered(Some(0)).trim().is_empty());
        assert!(rendered(Some(4)).trim().is_empty());
    }

    #[test]
    fn test_renders_completed_marks() {
        let line = rendered(Some(3));
        assert!(line.contains("(✓) Parcel Details"));
        assert!(line.contains("(✓) Costs & POD"));
        assert!(line.contains("(3) Review & Submit"));
    }
}
