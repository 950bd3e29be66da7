use ratatui::{layout::Rect, text::Line};

use super::rect_contains;

/// Screen areas recorded while drawing, looked up again when a click arrives.
/// Cleared and refilled on every render.
#[derive(Debug, Clone)]
pub struct HitMap<T> {
    areas: Vec<(T, Rect)>,
}

impl<T> Default for HitMap<T> {
    fn default() -> Self {
        HitMap { areas: Vec::new() }
    }
}

impl<T: Copy> HitMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Empty areas are dropped
    pub fn push(&mut self, target: T, area: Rect) {
        if area.width > 0 && area.height > 0 {
            self.areas.push((target, area));
        }
    }

    /// Record selected spans of a left-aligned `line` drawn from `x` on row
    /// `y`, clipped to `bounds`. `pick` maps a span index to its target.
    pub fn push_spans(
        &mut self,
        line: &Line,
        x: u16,
        y: u16,
        bounds: Rect,
        pick: impl Fn(usize) -> Option<T>,
    ) {
        for (i, area) in span_areas(line, x, y).into_iter().enumerate() {
            if let Some(target) = pick(i) {
                self.push(target, area.intersection(bounds));
            }
        }
    }

    /// Later areas win where they overlap earlier ones
    pub fn hit(&self, column: u16, row: u16) -> Option<T> {
        self.areas
            .iter()
            .rev()
            .find(|(_, area)| rect_contains(*area, column, row))
            .map(|(target, _)| *target)
    }
}

impl<T: Copy + PartialEq> HitMap<T> {
    pub fn area_of(&self, target: T) -> Option<Rect> {
        self.areas
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, area)| *area)
    }
}

/// One-row area per span of `line` when drawn left-aligned from `x` on row `y`
pub fn span_areas(line: &Line, x: u16, y: u16) -> Vec<Rect> {
    let mut column = x;
    line.spans
        .iter()
        .map(|span| {
            let width = u16::try_from(span.width()).unwrap_or(u16::MAX);
            let area = Rect::new(column, y, width, 1);
            column = column.saturating_add(width);
            area
        })
        .collect()
}

/// Column a centered line starts at, the way `Paragraph` places it
pub fn centered_line_x(line: &Line, area: Rect) -> u16 {
    let width = u16::try_from(line.width()).unwrap_or(u16::MAX);
    area.x + (area.width / 2).saturating_sub(width / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Span;

    fn buttons() -> Line<'static> {
        Line::from(vec![
            Span::raw("  "),
            Span::raw("[ Back ]"),
            Span::raw("   "),
            Span::raw("[ Next ]"),
        ])
    }

    #[test]
    fn test_span_areas_follow_widths() {
        let areas = span_areas(&buttons(), 10, 4);
        assert_eq!(areas[0], Rect::new(10, 4, 2, 1));
        assert_eq!(areas[1], Rect::new(12, 4, 8, 1));
        assert_eq!(areas[3], Rect::new(23, 4, 8, 1));
    }

    #[test]
    fn test_push_spans_and_hit() {
        let mut hits = HitMap::new();
        let bounds = Rect::new(0, 0, 80, 10);
        hits.push_spans(&buttons(), 10, 4, bounds, |i| match i {
            1 => Some("back"),
            3 => Some("next"),
            _ => None,
        });

        assert_eq!(hits.hit(12, 4), Some("back"));
        assert_eq!(hits.hit(30, 4), Some("next"));
        assert_eq!(hits.hit(21, 4), None);
        assert_eq!(hits.hit(12, 5), None);
        assert_eq!(hits.area_of("next"), Some(Rect::new(23, 4, 8, 1)));
    }

    #[test]
    fn test_clipped_spans_are_dropped() {
        let mut hits = HitMap::new();
        let bounds = Rect::new(0, 0, 22, 3);
        hits.push_spans(&buttons(), 10, 4, bounds, Some);
        assert!(hits.is_empty());

        let bounds = Rect::new(0, 0, 22, 10);
        hits.push_spans(&buttons(), 10, 4, bounds, |i| (i == 3).then_some(i));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_later_area_wins() {
        let mut hits = HitMap::new();
        hits.push(1, Rect::new(0, 0, 10, 10));
        hits.push(2, Rect::new(2, 2, 2, 2));
        assert_eq!(hits.hit(3, 3), Some(2));
        assert_eq!(hits.hit(8, 8), Some(1));

        hits.clear();
        assert_eq!(hits.hit(3, 3), None);
    }

    #[test]
    fn test_centered_line_x() {
        let line = Line::from("[ Ok ]");
        assert_eq!(centered_line_x(&line, Rect::new(4, 0, 20, 1)), 4 + 10 - 3);
    }
}
