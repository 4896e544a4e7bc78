mod app;
mod document;
mod error;
mod file_list;
mod html_renderer;
mod modal;
mod records;
mod report;
mod theme;
mod types;

use app::{App, Event};
use chrono::Local;
use clap::Parser;
use document::Document;
use error::PanelError;
use modal::ModalController;
use std::fs;
use std::path::PathBuf;
use theme::Theme;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// List the files in this directory instead of the built-in sample
    #[arg(long, short = 's', value_name = "DIR")]
    source_dir: Option<PathBuf>,

    /// Theme file with NOTION_<shade>=<colour> overrides
    #[arg(long, value_name = "FILE")]
    theme: Option<PathBuf>,

    /// Write the rendered page to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE", conflicts_with = "table")]
    output: Option<PathBuf>,

    /// Print the file list as a terminal table
    #[arg(long, short = 't')]
    table: bool,

    /// Replay a click on the element with this id (repeatable, in order)
    #[arg(long = "click", value_name = "ID")]
    clicks: Vec<String>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), PanelError> {
    let records = match &args.source_dir {
        Some(dir) => records::scan_directory(dir, Local::now())?,
        None => records::sample_records(),
    };

    if args.table {
        report::print_records(&records);
        return Ok(());
    }

    let theme = load_theme(args.theme.as_deref());

    let mut app = App::bootstrap(Document::standard(), records, ModalController::default())?;
    for id in &args.clicks {
        app.push(Event::Click(id.clone()));
    }
    let handled = app.run()?;
    log::info!(
        "Handled {handled} events over {} records, assistant modal {}",
        app.records().len(),
        if app.modal_visible()? { "open" } else { "closed" }
    );

    let html = html_renderer::render_page(app.document(), &theme)?;

    match &args.output {
        Some(path) => {
            fs::write(path, html).map_err(|source| PanelError::Write {
                path: path.clone(),
                source,
            })?;
            println!("Page written to: {}", path.display());
        }
        None => print!("{html}"),
    }

    Ok(())
}

fn load_theme(path: Option<&std::path::Path>) -> Theme {
    let Some(path) = path else {
        return Theme::default();
    };

    match Theme::load(path) {
        Some(theme) => theme,
        None => {
            log::warn!("Could not read theme {}, using defaults", path.display());
            Theme::default()
        }
    }
}
