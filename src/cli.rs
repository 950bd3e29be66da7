use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Parcel intake and delivery admin console", long_about = None)]
struct ClapArgs {
    /// Optional JSON config file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Path of the first screen, e.g. /dashboard (overrides the config file)
    #[arg(short = 's', long)]
    start: Option<String>,

    /// Where tracing output goes; the terminal is taken by the UI
    #[arg(long, default_value = "parcel-desk.log")]
    log_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    config: Option<PathBuf>,
    start: Option<String>,
    log_file: PathBuf,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn config(&self) -> Option<&PathBuf> {
        self.config.as_ref()
    }

    pub fn start(&self) -> Option<&str> {
        self.start.as_deref()
    }

    pub fn log_file(&self) -> &PathBuf {
        &self.log_file
    }
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            config: args.config,
            start: args.start,
            log_file: args.log_file,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["parcel-desk"]);
        assert!(args.config().is_none());
        assert!(args.start().is_none());
        assert_eq!(args.log_file(), &PathBuf::from("parcel-desk.log"));
    }

    #[test]
    fn test_parse_all_flags() {
        let args = CommandLineArgs::parse_from([
            "parcel-desk",
            "--config",
            "desk.json",
            "--start",
            "/reconciliation",
            "--log-file",
            "/tmp/desk.log",
        ]);
        assert_eq!(args.config(), Some(&PathBuf::from("desk.json")));
        assert_eq!(args.start(), Some("/reconciliation"));
        assert_eq!(args.log_file(), &PathBuf::from("/tmp/desk.log"));
    }

    #[test]
    fn test_parse_short_flags() {
        let args = CommandLineArgs::parse_from(["parcel-desk", "-c", "a.json", "-s", "/dashboard"]);
        assert_eq!(args.config(), Some(&PathBuf::from("a.json")));
        assert_eq!(args.start(), Some("/dashboard"));
    }
}
