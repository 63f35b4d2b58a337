mod cli;
mod config;
mod paths;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use editables_lib::table::Document;
use editables_lib::table::MemoryTable;
use editables_lib::Editables;
use editables_lib::Event;
use editables_lib::EventKind;
use editables_lib::LoadState;
use simplelog::ColorChoice;
use simplelog::Config;
use simplelog::TermLogger;
use simplelog::TerminalMode;
use simplelog::WriteLogger;

use crate::cli::Args;
use crate::config::CliError;

const TABLE_ID: &str = "table";

fn init_logging(args: &Args) -> Result<(), CliError> {
    let result = match &args.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| CliError::Io {
                path: path.clone(),
                source,
            })?;
            WriteLogger::init(args.log_level, Config::default(), file)
        }
        None => TermLogger::init(
            args.log_level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };
    result.map_err(|e| CliError::Logger(e.to_string()))
}

async fn run(args: Args) -> Result<LoadState, CliError> {
    let options = config::resolve(&args)?;

    let table = MemoryTable::new();
    let mut document = Document::new();
    document.add_table(TABLE_ID, table.clone());

    let mut editables = Editables::from_init(&document, TABLE_ID, options)?;

    editables.on(EventKind::HttpError, |event| {
        if let Event::HttpError {
            status,
            message,
            url,
        } = event
        {
            eprintln!("HTTP {} {}: {}", status, message, url);
        }
    });
    editables.on(EventKind::Error, |event| {
        if let Event::Error { message } = event {
            eprintln!("Error: {}", message);
        }
    });

    let state = editables.load().await;
    if state == LoadState::Rendered {
        println!("{}", table.to_text());
    }
    Ok(state)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("{}", e);
    }

    match run(args).await {
        Ok(LoadState::Rendered) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
