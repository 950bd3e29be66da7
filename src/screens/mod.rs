// Screens - One per route
//
// Navigating mounts a brand-new screen value; whatever the previous screen
// held is dropped with it.

pub mod dashboard;
pub mod forgot_password;
pub mod notice;
pub mod reconciliation;
pub mod register;
pub mod submissions;

pub use dashboard::DashboardScreen;
pub use forgot_password::ForgotPasswordScreen;
pub use notice::NoticeScreen;
pub use reconciliation::ReconciliationScreen;
pub use register::RegisterScreen;
pub use submissions::SubmissionsScreen;

use crate::config::Config;
use crate::routes::Route;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Result of handling input on a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Navigate(Route),
}

#[derive(Debug)]
pub enum Screen {
    Notice(NoticeScreen),
    ForgotPassword(ForgotPasswordScreen),
    Dashboard(DashboardScreen),
    Register(RegisterScreen),
    Submissions(SubmissionsScreen),
    Reconciliation(ReconciliationScreen),
}

impl Screen {
    pub fn mount(route: Route) -> Self {
        match route {
            Route::Login => Screen::Notice(NoticeScreen::login()),
            Route::ForgotPassword => Screen::ForgotPassword(ForgotPasswordScreen::new()),
            Route::PasswordRequestSent => Screen::Notice(NoticeScreen::password_request_sent()),
            Route::Dashboard => Screen::Dashboard(DashboardScreen::new()),
            Route::RegisterParcel => Screen::Register(RegisterScreen::new()),
            Route::ParcelSmsSuccess => Screen::Notice(NoticeScreen::parcel_sms_success()),
            Route::Submissions => Screen::Submissions(SubmissionsScreen::new()),
            Route::Reconciliation => Screen::Reconciliation(ReconciliationScreen::new()),
            Route::ReconciliationSuccess => Screen::Notice(NoticeScreen::reconciliation_success()),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            Screen::Notice(s) => s.route(),
            Screen::ForgotPassword(_) => Route::ForgotPassword,
            Screen::Dashboard(_) => Route::Dashboard,
            Screen::Register(_) => Route::RegisterParcel,
            Screen::Submissions(_) => Route::Submissions,
            Screen::Reconciliation(_) => Route::Reconciliation,
        }
    }

    /// Whether plain character keys belong to a text input right now
    pub fn captures_text(&self) -> bool {
        match self {
            Screen::ForgotPassword(s) => s.captures_text(),
            Screen::Register(s) => s.captures_text(),
            _ => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, config: &Config) -> Action {
        match self {
            Screen::Notice(s) => s.handle_key(key),
            Screen::ForgotPassword(s) => s.handle_key(key),
            Screen::Dashboard(s) => s.handle_key(key),
            Screen::Register(s) => s.handle_key(key, config),
            Screen::Submissions(s) => s.handle_key(key),
            Screen::Reconciliation(s) => s.handle_key(key),
        }
    }

    /// Left click at a screen cell, resolved against the last render
    pub fn handle_click(&mut self, column: u16, row: u16, config: &Config) -> Action {
        match self {
            Screen::Notice(s) => s.handle_click(column, row),
            Screen::ForgotPassword(s) => s.handle_click(column, row),
            Screen::Register(s) => s.handle_click(column, row, config),
            Screen::Reconciliation(s) => s.handle_click(column, row),
            Screen::Dashboard(_) | Screen::Submissions(_) => Action::None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, config: &Config) {
        match self {
            Screen::Notice(s) => s.render(f, area),
            Screen::ForgotPassword(s) => s.render(f, area),
            Screen::Dashboard(s) => s.render(f, area),
            Screen::Register(s) => s.render(f, area, config),
            Screen::Submissions(s) => s.render(f, area),
            Screen::Reconciliation(s) => s.render(f, area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_matches_route() {
        for route in Route::ALL {
            assert_eq!(Screen::mount(route).route(), route);
        }
    }

    #[test]
    fn test_text_capture() {
        assert!(Screen::mount(Route::ForgotPassword).captures_text());
        assert!(Screen::mount(Route::RegisterParcel).captures_text());
        assert!(!Screen::mount(Route::Dashboard).captures_text());
        assert!(!Screen::mount(Route::Login).captures_text());
    }
}
