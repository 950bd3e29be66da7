// Components - Primitive controls and the section cards built from them
//
// Primitives (button, toggle, text field, cost input) hold no state of their
// own. Their owner passes the current value in and gets changes back through
// a callback.

pub mod button;
pub mod cost_input;
pub mod focus;
pub mod header;
pub mod hit_map;
pub mod sidebar;
pub mod step_indicator;
pub mod text_field;
pub mod toggle;

pub use button::Button;
pub use cost_input::{format_amount, CostInput, CostInputFocus};
pub use focus::FocusRing;
pub use header::{render_account_menu, render_header, AccountMenu, MenuItem};
pub use hit_map::{centered_line_x, span_areas, HitMap};
pub use sidebar::{is_active, NavLink, Sidebar, NAV_LINKS};
pub use step_indicator::{step_state, step_states, StepIndicator, StepState, WIZARD_STEPS};
pub use text_field::TextField;
pub use toggle::Toggle;

use ratatui::layout::Rect;

/// Hit test for mouse events
pub fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}

/// Center a box of the given size inside `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_edges() {
        let area = Rect::new(10, 5, 4, 2);
        assert!(rect_contains(area, 10, 5));
        assert!(rect_contains(area, 13, 6));
        assert!(!rect_contains(area, 14, 5));
        assert!(!rect_contains(area, 10, 7));
        assert!(!rect_contains(area, 9, 5));
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(50, 50, area), area);
    }
}
