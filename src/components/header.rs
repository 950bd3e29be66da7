// 🏷️ Header - Page title lookup plus the account dropdown
//
// The dropdown closes on any click outside of it. That click listener only
// exists while the header is mounted: mount() registers it, unmount()
// removes it and closes the menu.

use crate::config::Config;
use crate::routes::page_meta;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::rect_contains;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Profile,
    Settings,
    SignOut,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Profile, MenuItem::Settings, MenuItem::SignOut];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Profile => "Profile",
            MenuItem::Settings => "Settings",
            MenuItem::SignOut => "Sign out",
        }
    }
}

/// Rows above the first item inside the dropdown: border, name, email, rule
const MENU_ITEM_OFFSET: u16 = 4;
const MENU_WIDTH: u16 = 28;
const MENU_HEIGHT: u16 = MENU_ITEM_OFFSET + MenuItem::ALL.len() as u16 + 1;

#[derive(Debug, Default)]
pub struct AccountMenu {
    open: bool,
    listening: bool,
    selected: usize,
    /// Where the trigger and dropdown were last drawn, for hit testing
    button_area: Rect,
    menu_area: Rect,
}

impl AccountMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }

    pub fn button_area(&self) -> Rect {
        self.button_area
    }

    pub fn menu_area(&self) -> Rect {
        self.menu_area
    }

    /// Register the document-level click listener
    pub fn mount(&mut self) {
        if !self.listening {
            self.listening = true;
            tracing::debug!("account menu mounted, click listener attached");
        }
    }

    /// Remove the click listener. The menu never outlives its header.
    pub fn unmount(&mut self) {
        if self.listening {
            self.listening = false;
            self.open = false;
            self.menu_area = Rect::default();
            tracing::debug!("account menu unmounted, click listener removed");
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Set by the renderer
    pub fn set_button_area(&mut self, area: Rect) {
        self.button_area = area;
    }

    pub fn set_menu_area(&mut self, area: Rect) {
        self.menu_area = area;
    }

    /// Listener body: an open menu closes when the click lands outside it.
    /// Returns true when the click closed the menu.
    pub fn on_document_click(&mut self, column: u16, row: u16) -> bool {
        if !self.listening || !self.open {
            return false;
        }
        if rect_contains(self.menu_area, column, row) || rect_contains(self.button_area, column, row) {
            return false;
        }
        self.close();
        tracing::debug!(column, row, "account menu closed by outside click");
        true
    }

    /// Full click handling for the header: trigger toggles, items activate,
    /// anything else goes to the document listener.
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<MenuItem> {
        if !self.listening {
            return None;
        }

        if rect_contains(self.button_area, column, row) {
            self.toggle();
            return None;
        }

        if self.open && rect_contains(self.menu_area, column, row) {
            let first_item_row = self.menu_area.y + MENU_ITEM_OFFSET;
            if row >= first_item_row {
                if let Some(item) = MenuItem::ALL.get((row - first_item_row) as usize) {
                    self.close();
                    return Some(*item);
                }
            }
            return None;
        }

        self.on_document_click(column, row);
        None
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MenuItem::ALL.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
    }

    /// Activate the highlighted item
    pub fn activate(&mut self) -> Option<MenuItem> {
        if !self.open {
            return None;
        }
        self.close();
        Some(self.selected())
    }
}

// ============================================================================
// RENDERING
// ============================================================================

pub fn render_header(f: &mut Frame, area: Rect, path: &str, menu: &mut AccountMenu, config: &Config) {
    let meta = page_meta(path);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let trigger = format!(" {} ▾ ", config.operator_name);
    let trigger_width = (trigger.chars().count() as u16).min(inner.width);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(trigger_width)])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            meta.title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(meta.description, Style::default().fg(Color::DarkGray))),
    ]);
    f.render_widget(title, chunks[0]);

    let trigger_style = if menu.is_open() {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let button_area = Rect { height: 1, ..chunks[1] };
    f.render_widget(Paragraph::new(Span::styled(trigger, trigger_style)), button_area);
    menu.set_button_area(button_area);
}

/// Dropdown overlay. Drawn after everything else so it sits on top.
pub fn render_account_menu(f: &mut Frame, menu: &mut AccountMenu, config: &Config) {
    if !menu.is_open() {
        menu.set_menu_area(Rect::default());
        return;
    }

    let screen = f.size();
    let button = menu.button_area();
    let width = MENU_WIDTH.min(screen.width);
    let right = button.x.saturating_add(button.width).min(screen.width);
    let area = Rect {
        x: right.saturating_sub(width),
        y: button.y.saturating_add(1),
        width,
        height: MENU_HEIGHT.min(screen.height.saturating_sub(button.y.saturating_add(1))),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            config.operator_name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            config.operator_email.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "─".repeat(width.saturating_sub(2) as usize),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    for item in MenuItem::ALL {
        let style = if item == menu.selected() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if item == MenuItem::SignOut {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(Span::styled(format!(" {} ", item.label()), style)));
    }

    let dropdown = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Account "),
    );

    f.render_widget(Clear, area);
    f.render_widget(dropdown, area);
    menu.set_menu_area(area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted_open_menu() -> AccountMenu {
        let mut menu = AccountMenu::new();
        menu.mount();
        menu.set_button_area(Rect::new(60, 1, 16, 1));
        menu.set_menu_area(Rect::new(48, 2, 28, 8));
        menu.open();
        menu
    }

    #[test]
    fn test_outside_click_closes() {
        let mut menu = mounted_open_menu();
        assert!(menu.on_document_click(5, 20));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_inside_click_keeps_open() {
        let mut menu = mounted_open_menu();
        assert!(!menu.on_document_click(50, 3));
        assert!(menu.is_open());

        // Operator name row: inside the dropdown, not an item
        assert_eq!(menu.handle_click(50, 3), None);
        assert!(menu.is_open());
    }

    #[test]
    fn test_no_listener_before_mount() {
        let mut menu = AccountMenu::new();
        menu.set_menu_area(Rect::new(48, 2, 28, 8));
        menu.open();
        assert!(!menu.on_document_click(0, 0));
        assert!(menu.is_open());
    }

    #[test]
    fn test_unmount_detaches_and_closes() {
        let mut menu = mounted_open_menu();
        menu.unmount();
        assert!(!menu.is_listening());
        assert!(!menu.is_open());

        menu.open();
        assert!(!menu.on_document_click(0, 0));
    }

    #[test]
    fn test_trigger_click_toggles() {
        let mut menu = mounted_open_menu();
        menu.handle_click(62, 1);
        assert!(!menu.is_open());
        menu.handle_click(62, 1);
        assert!(menu.is_open());
    }

    #[test]
    fn test_item_click_activates() {
        let mut menu = mounted_open_menu();
        // menu_area.y (2) + offset (4) + index 2
        assert_eq!(menu.handle_click(50, 8), Some(MenuItem::SignOut));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_keyboard_selection_wraps() {
        let mut menu = mounted_open_menu();
        menu.select_previous();
        assert_eq!(menu.selected(), MenuItem::SignOut);
        menu.select_next();
        assert_eq!(menu.selected(), MenuItem::Profile);
        assert_eq!(menu.activate(), Some(MenuItem::Profile));
        assert_eq!(menu.activate(), None);
    }
}
