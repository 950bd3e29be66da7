// 💰 Cost Input - Numeric field with preset quick values
//
// Fully controlled: the caller owns `Option<u64>` and receives every change
// through a callback. Input that is not a plain non-negative integer is
// dropped without touching the value.

use super::span_areas;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Which part of the control has keyboard focus. Owned by the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostInputFocus {
    #[default]
    Field,
    Preset(usize),
    Clear,
}

#[derive(Debug, Clone, Copy)]
pub struct CostInput<'a> {
    pub label: &'a str,
    pub value: Option<u64>,
    pub presets: &'a [u64],
    pub allow_clear: bool,
    pub currency: &'a str,
}

impl<'a> CostInput<'a> {
    /// Rows needed to draw the control, borders included
    pub const HEIGHT: u16 = 4;

    /// `Some(new_value)` when `text` is acceptable, `None` when it must be ignored.
    ///
    /// Only ASCII digits are accepted, so signs, decimals and whitespace are
    /// rejected along with anything that overflows `u64`.
    pub fn parse(text: &str) -> Option<Option<u64>> {
        if text.is_empty() {
            return Some(None);
        }
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse::<u64>().ok().map(Some)
    }

    /// Current value as it appears in the field
    pub fn text(&self) -> String {
        self.value.map(|v| v.to_string()).unwrap_or_default()
    }

    pub fn submit_text(&self, text: &str, on_change: impl FnOnce(Option<u64>)) {
        if let Some(next) = Self::parse(text) {
            on_change(next);
        }
    }

    pub fn type_char(&self, c: char, on_change: impl FnOnce(Option<u64>)) {
        let mut text = self.text();
        text.push(c);
        self.submit_text(&text, on_change);
    }

    pub fn backspace(&self, on_change: impl FnOnce(Option<u64>)) {
        let mut text = self.text();
        if text.pop().is_some() {
            self.submit_text(&text, on_change);
        }
    }

    /// Picking the preset that is already the value clears it instead
    pub fn select_preset(&self, preset: u64, on_change: impl FnOnce(Option<u64>)) {
        if self.value == Some(preset) {
            on_change(None);
        } else {
            on_change(Some(preset));
        }
    }

    /// "Leave blank"
    pub fn clear(&self, on_change: impl FnOnce(Option<u64>)) {
        if self.allow_clear {
            on_change(None);
        }
    }

    /// Mouse press on one part of the control. The field itself only takes focus.
    pub fn click(&self, part: CostInputFocus, on_change: impl FnOnce(Option<u64>)) {
        match part {
            CostInputFocus::Field => {}
            CostInputFocus::Preset(i) => {
                if let Some(&preset) = self.presets.get(i) {
                    self.select_preset(preset, on_change);
                }
            }
            CostInputFocus::Clear => self.clear(on_change),
        }
    }

    fn parts(&self) -> Vec<CostInputFocus> {
        let mut parts = vec![CostInputFocus::Field];
        parts.extend((0..self.presets.len()).map(CostInputFocus::Preset));
        if self.allow_clear {
            parts.push(CostInputFocus::Clear);
        }
        parts
    }

    /// Move focus within the control. Returns false at either end so the
    /// parent can move focus elsewhere.
    fn step_focus(&self, focus: &mut CostInputFocus, forward: bool) -> bool {
        let parts = self.parts();
        let pos = parts.iter().position(|p| p == focus).unwrap_or(0);
        let next = if forward {
            pos.checked_add(1).filter(|n| *n < parts.len())
        } else {
            pos.checked_sub(1)
        };

        match next {
            Some(n) => {
                *focus = parts[n];
                true
            }
            None => false,
        }
    }

    /// Returns true when the key was consumed by the control
    pub fn handle_key(
        &self,
        key: &KeyEvent,
        focus: &mut CostInputFocus,
        on_change: impl FnOnce(Option<u64>),
    ) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }

        match (key.code, *focus) {
            (KeyCode::Left, _) => self.step_focus(focus, false),
            (KeyCode::Right, _) => self.step_focus(focus, true),
            (KeyCode::Delete, _) if self.allow_clear => {
                self.clear(on_change);
                true
            }
            (KeyCode::Backspace, CostInputFocus::Field) => {
                self.backspace(on_change);
                true
            }
            (KeyCode::Char(c), CostInputFocus::Field) => {
                self.type_char(c, on_change);
                true
            }
            (KeyCode::Enter | KeyCode::Char(' '), CostInputFocus::Preset(i)) => {
                if let Some(&preset) = self.presets.get(i) {
                    self.select_preset(preset, on_change);
                }
                true
            }
            (KeyCode::Enter | KeyCode::Char(' '), CostInputFocus::Clear) => {
                self.clear(on_change);
                true
            }
            _ => false,
        }
    }

    /// `focus` is `None` when another control has keyboard focus. Returns the
    /// screen area of every clickable part.
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        focus: Option<CostInputFocus>,
    ) -> Vec<(CostInputFocus, Rect)> {
        let field_focused = focus == Some(CostInputFocus::Field);

        let mut value_line = vec![Span::styled(
            format!(" {} ", self.currency),
            Style::default().fg(Color::DarkGray),
        )];
        match self.value {
            Some(v) => value_line.push(Span::styled(
                v.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            None => value_line.push(Span::styled(
                "Enter amount",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
        }
        if field_focused {
            value_line.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }

        let mut preset_line = vec![Span::raw(" ")];
        for (i, preset) in self.presets.iter().enumerate() {
            let selected = self.value == Some(*preset);
            let mut style = if selected {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::Gray)
            };
            if focus == Some(CostInputFocus::Preset(i)) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            preset_line.push(Span::styled(
                format!("[{}{}]", self.currency, format_amount(*preset)),
                style,
            ));
            preset_line.push(Span::raw(" "));
        }
        if self.allow_clear {
            let mut style = Style::default().fg(Color::DarkGray);
            if focus == Some(CostInputFocus::Clear) {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            preset_line.push(Span::styled("[Leave blank]", style));
        }

        let border = if focus.is_some() { Color::Yellow } else { Color::White };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", self.label));
        let inner = block.inner(area);

        let preset_line = Line::from(preset_line);
        let mut parts = vec![(CostInputFocus::Field, Rect::new(inner.x, inner.y, inner.width, 1))];
        let clear_span = 1 + 2 * self.presets.len();
        for (i, span_area) in span_areas(&preset_line, inner.x, inner.y + 1).into_iter().enumerate() {
            let part = if i == clear_span && self.allow_clear {
                CostInputFocus::Clear
            } else if i % 2 == 1 && i < clear_span {
                CostInputFocus::Preset(i / 2)
            } else {
                continue;
            };
            parts.push((part, span_area.intersection(inner)));
        }
        parts.retain(|(_, r)| r.width > 0 && r.height > 0);

        let paragraph = Paragraph::new(vec![Line::from(value_line), preset_line]).block(block);
        f.render_widget(paragraph, area);

        parts
    }
}

/// 1500 -> "1,500"
pub fn format_amount(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PRESETS: [u64; 3] = [1000, 1500, 2000];

    fn input(value: Option<u64>) -> CostInput<'static> {
        CostInput {
            label: "Delivery fee",
            value,
            presets: &PRESETS,
            allow_clear: true,
            currency: "₦",
        }
    }

    /// Run one operation and return what the callback saw, if it was called
    fn reported(op: impl FnOnce(&mut dyn FnMut(Option<u64>))) -> Option<Option<u64>> {
        let mut seen = None;
        op(&mut |v| seen = Some(v));
        seen
    }

    #[test]
    fn test_valid_integers_are_reported() {
        for (text, expected) in [("0", 0), ("7", 7), ("2500", 2500), ("007", 7)] {
            let got = reported(|cb| input(None).submit_text(text, cb));
            assert_eq!(got, Some(Some(expected)), "input {:?}", text);
        }
        let max = u64::MAX.to_string();
        assert_eq!(reported(|cb| input(None).submit_text(&max, cb)), Some(Some(u64::MAX)));
    }

    #[test]
    fn test_empty_string_reports_no_value() {
        assert_eq!(reported(|cb| input(Some(40)).submit_text("", cb)), Some(None));
    }

    #[test]
    fn test_invalid_input_is_ignored() {
        for text in ["-5", "abc", "1.5", " 5", "+5", "5 ", "99999999999999999999999"] {
            assert_eq!(reported(|cb| input(Some(10)).submit_text(text, cb)), None, "input {:?}", text);
        }
    }

    #[test]
    fn test_typing_builds_on_current_value() {
        assert_eq!(reported(|cb| input(Some(15)).type_char('0', cb)), Some(Some(150)));
        assert_eq!(reported(|cb| input(None).type_char('9', cb)), Some(Some(9)));
        assert_eq!(reported(|cb| input(Some(15)).type_char('x', cb)), None);
        assert_eq!(reported(|cb| input(None).type_char('-', cb)), None);
    }

    #[test]
    fn test_backspace_down_to_empty() {
        assert_eq!(reported(|cb| input(Some(150)).backspace(cb)), Some(Some(15)));
        assert_eq!(reported(|cb| input(Some(1)).backspace(cb)), Some(None));
        assert_eq!(reported(|cb| input(None).backspace(cb)), None);
    }

    #[test]
    fn test_preset_toggles() {
        assert_eq!(reported(|cb| input(None).select_preset(1500, cb)), Some(Some(1500)));
        assert_eq!(reported(|cb| input(Some(1500)).select_preset(1500, cb)), Some(None));
        assert_eq!(reported(|cb| input(Some(1000)).select_preset(1500, cb)), Some(Some(1500)));
    }

    #[test]
    fn test_clear_respects_flag() {
        assert_eq!(reported(|cb| input(Some(5)).clear(cb)), Some(None));

        let no_clear = CostInput { allow_clear: false, ..input(Some(5)) };
        assert_eq!(reported(|cb| no_clear.clear(cb)), None);
    }

    #[test]
    fn test_keyboard_walks_parts_then_releases_focus() {
        let control = input(None);
        let mut focus = CostInputFocus::Field;

        assert!(!control.handle_key(&KeyEvent::from(KeyCode::Left), &mut focus, |_| {}));
        assert_eq!(focus, CostInputFocus::Field);

        for expected in [
            CostInputFocus::Preset(0),
            CostInputFocus::Preset(1),
            CostInputFocus::Preset(2),
            CostInputFocus::Clear,
        ] {
            assert!(control.handle_key(&KeyEvent::from(KeyCode::Right), &mut focus, |_| {}));
            assert_eq!(focus, expected);
        }

        assert!(!control.handle_key(&KeyEvent::from(KeyCode::Right), &mut focus, |_| {}));
        assert_eq!(focus, CostInputFocus::Clear);
    }

    #[test]
    fn test_enter_on_preset_selects_it() {
        let mut focus = CostInputFocus::Preset(2);
        let mut seen = None;
        input(None).handle_key(&KeyEvent::from(KeyCode::Enter), &mut focus, |v| seen = Some(v));
        assert_eq!(seen, Some(Some(2000)));

        let mut seen = None;
        input(Some(2000)).handle_key(&KeyEvent::from(KeyCode::Char(' ')), &mut focus, |v| seen = Some(v));
        assert_eq!(seen, Some(None));
    }

    #[test]
    fn test_digits_only_edit_the_field_part() {
        let mut focus = CostInputFocus::Preset(0);
        let mut called = false;
        let consumed = input(None).handle_key(&KeyEvent::from(KeyCode::Char('4')), &mut focus, |_| called = true);
        assert!(!consumed);
        assert!(!called);
    }

    #[test]
    fn test_click_on_parts() {
        assert_eq!(reported(|cb| input(None).click(CostInputFocus::Preset(1), cb)), Some(Some(1500)));
        assert_eq!(reported(|cb| input(Some(1500)).click(CostInputFocus::Preset(1), cb)), Some(None));
        assert_eq!(reported(|cb| input(Some(5)).click(CostInputFocus::Clear, cb)), Some(None));
        assert_eq!(reported(|cb| input(Some(5)).click(CostInputFocus::Field, cb)), None);
        assert_eq!(reported(|cb| input(None).click(CostInputFocus::Preset(9), cb)), None);

        let no_clear = CostInput { allow_clear: false, ..input(Some(5)) };
        assert_eq!(reported(|cb| no_clear.click(CostInputFocus::Clear, cb)), None);
    }

    #[test]
    fn test_render_reports_part_areas() {
        use ratatui::{backend::TestBackend, Terminal};

        let mut terminal = Terminal::new(TestBackend::new(60, CostInput::HEIGHT)).unwrap();
        let mut parts = Vec::new();
        terminal
            .draw(|f| {
                let area = f.size();
                parts = input(Some(1500)).render(f, area, None);
            })
            .unwrap();

        let kinds: Vec<_> = parts.iter().map(|(part, _)| *part).collect();
        assert_eq!(
            kinds,
            [
                CostInputFocus::Field,
                CostInputFocus::Preset(0),
                CostInputFocus::Preset(1),
                CostInputFocus::Preset(2),
                CostInputFocus::Clear,
            ]
        );

        // Each preset area covers exactly its "[₦1,500]" label
        let buffer = terminal.backend().buffer();
        let (_, second) = parts[2];
        let label: String = (second.x..second.x + second.width)
            .map(|x| buffer.get(x, second.y).symbol())
            .collect();
        assert_eq!(label, "[₦1,500]");
        assert_eq!(second.y, 2);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1000), "1,000");
        assert_eq!(format_amount(2500), "2,500");
        assert_eq!(format_amount(1234567), "1,234,567");
    }
}
