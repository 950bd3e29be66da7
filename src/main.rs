use anyhow::{Context, Result};

use parcel_desk::{init_logging, run_ui, App, CommandLineArgs, Config};

fn main() -> Result<()> {
    let args = CommandLineArgs::parse();

    init_logging(args.log_file())?;

    let mut config = Config::load_or_default(args.config().map(|p| p.as_path()))
        .context("could not load configuration")?;
    if let Some(start) = args.start() {
        config = config
            .with_start_route(start)
            .context("invalid --start")?;
    }

    tracing::info!(version = parcel_desk::VERSION, "starting parcel desk");

    let mut app = App::new(config)?;
    run_ui(&mut app)?;

    tracing::info!("ui closed");
    println!("✅ Parcel Desk closed");
    Ok(())
}
