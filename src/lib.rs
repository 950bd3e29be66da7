// Parcel Desk - Core Library
// Screens, components and the app shell for the parcel intake/delivery admin console

pub mod cli;
pub mod components;
pub mod config;
pub mod logging;
pub mod mock;
pub mod routes;
pub mod screens;
pub mod ui;
pub mod wizard;

// Re-export commonly used types
pub use cli::CommandLineArgs;
pub use components::{
    AccountMenu, CostInput, CostInputFocus, MenuItem, Sidebar, StepIndicator, StepState,
};
pub use config::{Config, ConfigError};
pub use logging::init_logging;
pub use routes::{page_meta, PageMeta, Route, DEFAULT_PAGE_META};
pub use screens::{Action, Screen};
pub use ui::{run_ui, App};
pub use wizard::{ParcelDraft, SectionEvent};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
