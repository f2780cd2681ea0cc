mod command;
mod settings;

use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use simplelog::{Config, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader};
use zipwidgets::page::Section;
use zipwidgets::source::{HttpSuggestionSource, StaticSuggestionSource, SuggestionSource};
use zipwidgets::{AutocompleteDriver, Page, PageBuilder, PageOutcome, SubmitOutcome};

use command::{Command, HELP};
use settings::Settings;

/// Zip codes served when no endpoint is configured.
const OFFLINE_ZIP_CODES: &[&str] = &[
    "10001", "10002", "10003", "10011", "10019", "10025", "10453", "10458", "11201", "11207",
    "11208", "11211", "11368", "11373", "11434", "10301", "10314",
];

/// How long to wait for a lookup before showing the page anyway.
const LOOKUP_WAIT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Widgets(#[from] zipwidgets::Error),
}

impl From<zipwidgets::WidgetError> for CliError {
    fn from(e: zipwidgets::WidgetError) -> Self {
        Self::Widgets(e.into())
    }
}

impl From<zipwidgets::SourceError> for CliError {
    fn from(e: zipwidgets::SourceError) -> Self {
        Self::Widgets(e.into())
    }
}

fn demo_page(settings: &Settings) -> Result<Page, zipwidgets::WidgetError> {
    PageBuilder::new()
        .placeholder("Enter a zip code")
        .columns(["Zip Code", "Accidents"])
        .extra_columns(["Rank", "Multiplier"])
        .section(
            Section::new("decile-1", "Decile 1")
                .row(["11207", "412"], ["1", "2.31"])
                .row(["11434", "398"], ["2", "2.24"]),
        )
        .section(
            Section::new("decile-2", "Decile 2")
                .row(["10019", "305"], ["3", "1.72"])
                .row(["11368", "297"], ["4", "1.67"]),
        )
        .section(
            Section::new("decile-3", "Decile 3")
                .row(["10002", "221"], ["5", "1.24"])
                .row(["10314", "208"], ["6", "1.17"]),
        )
        .config(settings.autocomplete.clone())
        .build()
}

fn suggestion_source(settings: &Settings) -> Result<Arc<dyn SuggestionSource>, CliError> {
    match &settings.client {
        Some(client) => {
            log::info!("using suggestion endpoint {}", client.base_url);
            Ok(Arc::new(HttpSuggestionSource::new(client.clone())?))
        }
        None => {
            log::info!("no endpoint configured, using built-in zip codes");
            Ok(Arc::new(StaticSuggestionSource::new(OFFLINE_ZIP_CODES.iter().copied())))
        }
    }
}

fn report(outcome: &PageOutcome) {
    match outcome {
        PageOutcome::Toggled { section, state } => println!("{section}: {state:?}"),
        PageOutcome::Selected(zip) => println!("selected {zip}"),
        PageOutcome::Dismissed => println!("suggestions closed"),
        PageOutcome::Submitted(SubmitOutcome::Navigate { url }) => println!("navigate to {url}"),
        PageOutcome::Submitted(SubmitOutcome::Blocked { message }) => println!("! {message}"),
        PageOutcome::Idle | PageOutcome::Request(_) | PageOutcome::Ignored => {}
    }
}

async fn run(settings: Settings) -> Result<(), CliError> {
    let mut page = demo_page(&settings)?;
    let mut driver =
        AutocompleteDriver::new(suggestion_source(&settings)?).with_debounce(settings.autocomplete.debounce);

    println!("{HELP}\n");
    print!("{}", page.to_text());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let event = match command {
            Command::Dispatch(event) => event,
            Command::Show => {
                print!("{}", page.to_text());
                continue;
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        };

        let outcome = match page.dispatch(&event) {
            Ok(outcome) => outcome,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        report(&outcome);

        match outcome {
            PageOutcome::Request(request) => {
                let generation = request.generation;
                driver.issue(request);
                match driver.completion_for(generation, LOOKUP_WAIT).await {
                    Some(completion) => {
                        page.apply(completion)?;
                    }
                    None => println!("no suggestions yet"),
                }
            }
            PageOutcome::Idle => driver.cancel(),
            _ => {}
        }

        print!("{}", page.to_text());
    }

    log::info!("exiting");
    Ok(())
}

#[tokio::main]
async fn main() {
    let settings = Settings::from_env();

    let init_logging = || -> Result<(), CliError> {
        let log_file = File::create(&settings.log_file)?;
        WriteLogger::init(settings.log_level, Config::default(), log_file)?;
        Ok(())
    };
    if let Err(e) = init_logging() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(settings).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
