//! Speed Analytics - Main CLI Application
//!
//! Renders the speed measurement dashboard in the terminal, applying the
//! search, sort and tab selections given on the command line.

use clap::Parser;
use speed_analytics::{
    app::App,
    cli::Cli,
    error::{ErrorReporter, Result},
    BUILD_TIME, GIT_COMMIT, PKG_NAME, VERSION,
};
use std::{io, process};

fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(99);
    }));

    let cli = Cli::parse();
    let reporter = ErrorReporter::new(cli.use_colors());

    if let Err(e) = run_application(cli) {
        reporter.report_error(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    if cli.debug {
        eprintln!("{} v{} ({}, built {})", PKG_NAME, VERSION, GIT_COMMIT, BUILD_TIME);
    }

    if cli.should_show_topic_help() {
        println!("{}", cli.display_help());
        return Ok(());
    }

    let mut app = App::new(cli)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    app.run(stdin.lock(), &mut output)
}
