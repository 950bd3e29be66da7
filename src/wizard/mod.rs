// 🧙 Registration Wizard - Parcel Details → Costs & POD → Review & Submit
//
// Sections only report Next/Previous to the hosting screen. Nothing is
// validated, totalled or saved between steps.

pub mod costs;
pub mod details;
pub mod review;

pub use costs::CostsSection;
pub use details::{DetailField, DetailsSection};
pub use review::ReviewSection;

use crate::components::{Button, HitMap};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
};

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 3;

/// What a section asks its host to do after handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionEvent {
    Idle,
    Next,
    Previous,
}

/// Form values shared across the steps. Owned by the registration screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParcelDraft {
    pub sender_name: String,
    pub sender_phone: String,
    pub receiver_name: String,
    pub receiver_phone: String,
    pub delivery_address: String,
    pub description: String,
    pub delivery_fee: Option<u64>,
    pub amount_paid: Option<u64>,
}

/// `[ Previous ]   [ Continue ]` row shared by every section
pub(crate) fn nav_buttons(next_label: &'static str, previous_focused: bool, next_focused: bool) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Button::new("Previous").focused(previous_focused).span(),
        Span::raw("   "),
        Button::new(next_label).primary().focused(next_focused).span(),
    ])
}

/// Register the two buttons of a `nav_buttons` line drawn from `x` on row `y`
pub(crate) fn record_nav_buttons<T: Copy>(
    hits: &mut HitMap<T>,
    line: &Line,
    x: u16,
    y: u16,
    bounds: Rect,
    previous: T,
    next: T,
) {
    hits.push_spans(line, x, y, bounds, |i| match i {
        1 => Some(previous),
        3 => Some(next),
        _ => None,
    });
}
