// 🖥️ Terminal UI - App shell, event dispatch and the draw loop
//
// The loop blocks on one terminal event at a time. Handlers mark the app
// dirty and only then is the frame redrawn.

use crate::components::{
    rect_contains, render_account_menu, render_header, AccountMenu, MenuItem, Sidebar,
};
use crate::config::{Config, ConfigError};
use crate::routes::Route;
use crate::screens::{Action, Screen};
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;

const SIDEBAR_WIDTH: u16 = 26;
const HEADER_HEIGHT: u16 = 4;
const STATUS_HEIGHT: u16 = 3;

pub struct App {
    config: Config,
    screen: Screen,
    account_menu: AccountMenu,
    sidebar: Sidebar,
    dirty: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let start = config.start()?;

        let mut account_menu = AccountMenu::new();
        if start.uses_shell() {
            account_menu.mount();
        }

        tracing::info!(route = %start, "app started");

        Ok(Self {
            config,
            screen: Screen::mount(start),
            account_menu,
            sidebar: Sidebar::new(),
            dirty: true,
            should_quit: false,
        })
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn account_menu(&self) -> &AccountMenu {
        &self.account_menu
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn navigate(&mut self, route: Route) {
        let from = self.route();
        if from == route {
            return;
        }

        tracing::info!(from = %from, to = %route, "navigate");

        if from.uses_shell() && !route.uses_shell() {
            self.account_menu.unmount();
        } else if !from.uses_shell() && route.uses_shell() {
            self.account_menu.mount();
        }

        self.screen = Screen::mount(route);
        self.dirty = true;
    }

    /// Navigate by path. Unknown paths leave the app where it is.
    pub fn navigate_path(&mut self, path: &str) -> bool {
        match Route::from_path(path) {
            Some(route) => {
                self.navigate(route);
                true
            }
            None => {
                tracing::warn!(path, "ignoring navigation to unknown path");
                false
            }
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(route) => self.navigate(route),
        }
    }

    fn activate_menu_item(&mut self, item: MenuItem) {
        tracing::info!(item = item.label(), "account menu item chosen");
        if item == MenuItem::SignOut {
            self.navigate(Route::Login);
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(_, _) => self.dirty = true,
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.dirty = true;

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        if self.account_menu.is_open() {
            match key.code {
                KeyCode::Esc | KeyCode::F(10) => self.account_menu.close(),
                KeyCode::Up => self.account_menu.select_previous(),
                KeyCode::Down => self.account_menu.select_next(),
                KeyCode::Enter => {
                    if let Some(item) = self.account_menu.activate() {
                        self.activate_menu_item(item);
                    }
                }
                _ => {}
            }
            return;
        }

        let in_shell = self.route().uses_shell();

        match key.code {
            KeyCode::F(10) if in_shell => {
                self.account_menu.toggle();
                return;
            }
            KeyCode::F(n) if in_shell => {
                if let Some(route) = Sidebar::link_for_hotkey(n) {
                    self.navigate(route);
                }
                return;
            }
            KeyCode::Char('q') if !self.screen.captures_text() => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        let action = self.screen.handle_key(key, &self.config);
        self.apply(action);
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        self.dirty = true;

        let (column, row) = (mouse.column, mouse.row);
        if !self.route().uses_shell() {
            let action = self.screen.handle_click(column, row, &self.config);
            self.apply(action);
            return;
        }

        let on_menu = rect_contains(self.account_menu.button_area(), column, row)
            || (self.account_menu.is_open()
                && rect_contains(self.account_menu.menu_area(), column, row));

        // An outside click closes the menu and still lands on the page
        if let Some(item) = self.account_menu.handle_click(column, row) {
            self.activate_menu_item(item);
        } else if !on_menu {
            if let Some(route) = self.sidebar.hit_test(column, row) {
                self.navigate(route);
            } else {
                let action = self.screen.handle_click(column, row, &self.config);
                self.apply(action);
            }
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),                // Page
                Constraint::Length(STATUS_HEIGHT), // Status bar
            ])
            .split(f.size());

        let route = self.route();

        if route.uses_shell() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .split(chunks[0]);

            let main = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
                .split(columns[1]);

            self.sidebar.render(f, columns[0], route);
            render_header(f, main[0], route.path(), &mut self.account_menu, &self.config);
            self.screen.render(f, main[1], &self.config);
        } else {
            self.screen.render(f, chunks[0], &self.config);
        }

        render_status_bar(f, chunks[1], route, self.screen.captures_text());

        if route.uses_shell() {
            render_account_menu(f, &mut self.account_menu, &self.config);
        }

        self.dirty = false;
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;

    // Run the app
    let res = enter_and_run(app);

    // Restore terminal, every step even if the setup or the loop failed
    let restored = restore_terminal().context("failed to restore terminal");

    if let Err(err) = &res {
        tracing::error!(error = %err, "event loop failed");
    }

    res.and(restored)
}

fn enter_and_run(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, app)
}

fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    first_error([
        disable_raw_mode(),
        execute!(stdout, DisableMouseCapture),
        execute!(stdout, LeaveAlternateScreen),
        execute!(stdout, Show),
    ])
}

/// Keeps the first failure out of steps that have all already run
fn first_error<E>(results: impl IntoIterator<Item = Result<(), E>>) -> Result<(), E> {
    results.into_iter().fold(Ok(()), |acc, step| acc.and(step))
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        if app.needs_redraw() {
            terminal.draw(|f| app.draw(f))?;
        }

        if app.should_quit() {
            return Ok(());
        }

        let event = event::read().context("failed to read terminal event")?;
        app.handle_event(event);
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, route: Route, typing: bool) {
    let today = chrono::Local::now().format("%a %d %b %Y").to_string();

    let mut status_spans = vec![
        Span::styled(format!(" {} ", route.path()), Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::styled(today, Style::default().fg(Color::White)),
    ];

    let mut hint = |key: &'static str, what: &'static str, color: Color| {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(key, Style::default().fg(color)));
        status_spans.push(Span::raw(what));
    };

    hint("Tab", " Next field", Color::Yellow);
    hint("Enter", " Select", Color::Yellow);
    if route.uses_shell() {
        hint("F1-F4", " Pages", Color::Yellow);
        hint("F10", " Account", Color::Yellow);
    }
    if typing {
        hint("Ctrl+Q", " Quit", Color::Red);
    } else {
        hint("q", " Quit", Color::Red);
    }

    let status_bar = Paragraph::new(vec![Line::from(status_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_keeps_earliest_failure() {
        assert_eq!(first_error::<&str>([Ok(()), Ok(())]), Ok(()));
        assert_eq!(first_error([Ok(()), Err("raw mode"), Err("screen")]), Err("raw mode"));
    }

    #[test]
    fn test_every_restore_step_runs_after_a_failure() {
        let mut ran = Vec::new();
        let mut step = |name: &'static str, ok: bool| {
            ran.push(name);
            if ok {
                Ok(())
            } else {
                Err(name)
            }
        };

        let result = first_error([
            step("raw mode", false),
            step("mouse capture", true),
            step("alternate screen", false),
            step("cursor", true),
        ]);

        assert_eq!(result, Err("raw mode"));
        assert_eq!(ran, ["raw mode", "mouse capture", "alternate screen", "cursor"]);
    }
}
