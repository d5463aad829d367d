use chrono::Utc;
use clap::Parser;
use kiosk::application::session::KioskSession;
use kiosk::domain::menu::standard_menu;
use kiosk::domain::report;
use kiosk::interfaces::presenter::TextPresenter;
use kiosk::interfaces::report::write_report;
use miette::{IntoDiagnostic, Result};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print a sales summary for the session on exit
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("warn".parse().into_diagnostic()?),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // A bad seed means a broken build of the menu; refuse to start.
    let catalog = standard_menu().into_diagnostic()?;

    let started = Utc::now();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = KioskSession::new(
        catalog,
        stdin.lock(),
        TextPresenter::new(stdout.lock()),
    );
    session.run().into_diagnostic()?;

    if cli.report {
        let summary = report::generate(session.history(), started, Utc::now());
        write_report(io::stdout().lock(), &summary).into_diagnostic()?;
    }

    Ok(())
}
