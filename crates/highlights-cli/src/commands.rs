//! View commands.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};

use highlights_cli::config::load_config;
use highlights_cli::load::{SheetOrigin, load_collection};
use highlights_cli::render::{
    books_json, detail_json, list_json, render_books, render_detail, render_list, render_sheets,
    sheets_json,
};
use highlights_map::Collection;
use highlights_model::LoadState;

use crate::cli::{Cli, Command, OutputFormatArg};

const LOADING_MESSAGE: &str = "Loading book highlights...";

pub fn run(cli: &Cli) -> Result<()> {
    let origin = sheet_origin(cli)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let spinner = match cli.format {
        OutputFormatArg::Table => Some(loading_spinner()?),
        OutputFormatArg::Json => None,
    };
    let state = runtime.block_on(load_collection(&origin));
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let collection = match state {
        LoadState::Ready(collection) => collection,
        LoadState::Failed(message) => bail!(message),
        LoadState::Loading => bail!("load did not complete"),
    };
    let command = cli.command.clone().unwrap_or(Command::List);
    let output = render(&command, cli.format, &collection)?;
    println!("{output}");
    Ok(())
}

fn sheet_origin(cli: &Cli) -> Result<SheetOrigin> {
    if !cli.csv.is_empty() {
        return Ok(SheetOrigin::Files(cli.csv.clone()));
    }
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(id) = &cli.spreadsheet {
        config.spreadsheet_id.clone_from(id);
    }
    Ok(SheetOrigin::Remote(config))
}

fn loading_spinner() -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner:.cyan} {msg}")?);
    spinner.set_message(LOADING_MESSAGE);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}

fn render(command: &Command, format: OutputFormatArg, collection: &Collection) -> Result<String> {
    let output = match (command, format) {
        (Command::List, OutputFormatArg::Table) => render_list(collection),
        (Command::List, OutputFormatArg::Json) => list_json(collection)?,
        (Command::Sheets, OutputFormatArg::Table) => render_sheets(&collection.sheets),
        (Command::Sheets, OutputFormatArg::Json) => sheets_json(&collection.sheets)?,
        (Command::Books, OutputFormatArg::Table) => render_books(collection),
        (Command::Books, OutputFormatArg::Json) => books_json(collection)?,
        (Command::Book { book_id }, OutputFormatArg::Table) => {
            render_detail(collection, book_id)
        }
        (Command::Book { book_id }, OutputFormatArg::Json) => detail_json(collection, book_id)?,
    };
    Ok(output)
}
