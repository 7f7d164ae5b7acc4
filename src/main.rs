use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookcap::capture::{CaptureOutcome, Session};
use bookcap::config::Config;
use bookcap::ui::TerminalPrompt;

#[derive(Parser, Debug)]
#[command(
    name = "bookcap",
    version,
    about = "Look up a book and append it to your library file"
)]
struct Cli {
    /// Free-text search query (title, author, ISBN...)
    #[arg(required = true)]
    query: Vec<String>,

    /// Skip the ownership prompts and use the configured default
    #[arg(long)]
    quick: bool,

    /// Library file to append to (overrides BOOKCAP_LIBRARY)
    #[arg(long)]
    library: Option<PathBuf>,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookcap=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(library) = cli.library {
        config.library_file = library;
    }
    let query = cli.query.join(" ");

    let mut ui = TerminalPrompt;
    let mut session = Session::new(&config, &mut ui);
    let result = if cli.quick {
        session.quick_capture(&query)
    } else {
        session.capture(&query)
    };

    match result {
        Ok(CaptureOutcome::Added { title }) => {
            println!("Added \"{}\" to {}", title, config.library_file.display());
            ExitCode::SUCCESS
        }
        Ok(CaptureOutcome::NoResults) => {
            println!("No results found");
            ExitCode::SUCCESS
        }
        Ok(CaptureOutcome::Duplicate { title }) => {
            println!("\"{}\" is already in the library", title);
            ExitCode::SUCCESS
        }
        Ok(CaptureOutcome::Aborted) => {
            println!("Cancelled");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
