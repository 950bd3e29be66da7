use crate::routes::Route;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::HitMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
    /// Function key that jumps here (F1 = 1)
    pub hotkey: u8,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Dashboard",
        route: Route::Dashboard,
        hotkey: 1,
    },
    NavLink {
        label: "Register Parcel",
        route: Route::RegisterParcel,
        hotkey: 2,
    },
    NavLink {
        label: "Submissions",
        route: Route::Submissions,
        hotkey: 3,
    },
    NavLink {
        label: "Reconciliation",
        route: Route::Reconciliation,
        hotkey: 4,
    },
];

/// Router-style active match: exact, or a parent of the current path.
/// The root only matches itself.
pub fn is_active(link_path: &str, current_path: &str) -> bool {
    if link_path == current_path {
        return true;
    }
    if link_path == "/" {
        return false;
    }
    current_path
        .strip_prefix(link_path)
        .map_or(false, |rest| rest.starts_with('/'))
}

/// Rows before the first link inside the sidebar: border, brand, blank
const LINK_OFFSET: u16 = 3;

#[derive(Debug, Default)]
pub struct Sidebar {
    link_areas: HitMap<Route>,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link_for_hotkey(n: u8) -> Option<Route> {
        NAV_LINKS.iter().find(|l| l.hotkey == n).map(|l| l.route)
    }

    /// Which link, if any, was drawn under this cell
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Route> {
        self.link_areas.hit(column, row)
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, current: Route) {
        let mut lines = vec![
            Line::from(Span::styled(
                " 📦 Parcel Desk",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        self.link_areas.clear();
        for (i, link) in NAV_LINKS.iter().enumerate() {
            let active = is_active(link.route.path(), current.path());
            let style = if active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            lines.push(Line::from(vec![
                Span::styled(if active { " → " } else { "   " }, style),
                Span::styled(link.label, style),
                Span::styled(format!("  F{}", link.hotkey), Style::default().fg(Color::DarkGray)),
            ]));

            let row = area.y + LINK_OFFSET + i as u16;
            if row < area.y + area.height.saturating_sub(1) {
                self.link_areas.push(
                    link.route,
                    Rect::new(area.x + 1, row, area.width.saturating_sub(2), 1),
                );
            }
        }

        let sidebar = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        );

        f.render_widget(sidebar, area);
    }
}
