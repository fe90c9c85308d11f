use std::error::Error;
use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use saladbook::core::config::{self, DataSource, ResolvedConfig};
use saladbook::core::dataset::Dataset;
use saladbook::core::index::Catalog;
use saladbook::core::partition::Partition;
use saladbook::core::state::App;
use saladbook::tui;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "saladbook", version, about = "Find which salads and bowls use a dressing")]
struct Args {
    /// Dataset JSON file (defaults to the bundled cookbook)
    #[arg(short, long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Validate the dataset, report unused dressings, and exit
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("saladbook: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();

    let mut notes = Vec::new();
    let file_config = config::load_config(&mut notes).unwrap_or_else(|e| {
        eprintln!("saladbook: {e}; using defaults");
        Default::default()
    });
    let config = config::resolve(&file_config, args.data.as_deref(), &mut notes);

    init_logging(&config, args.check);
    config::replay(&notes);
    log::info!("Saladbook starting up with data source: {:?}", config.data);

    let dataset = match &config.data {
        DataSource::Bundled => Dataset::bundled()?,
        DataSource::File(path) => Dataset::from_file(path)?,
    };
    let catalog = Catalog::build(dataset).inspect_err(|e| log::error!("Invalid dataset: {e}"))?;

    let partition = Partition::new(&catalog);
    partition.report_unused();

    if args.check {
        print!("{}", partition.report());
        return Ok(());
    }

    let app = App::new(Arc::new(catalog));
    tui::run(app)?;
    Ok(())
}

/// Write logs to a file; the terminal belongs to the TUI.
///
/// `--check` appends so a one-shot report doesn't wipe the last session's log.
fn init_logging(config: &ResolvedConfig, append: bool) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let log_file = if append {
        OpenOptions::new().create(true).append(true).open(&config.log_file)
    } else {
        File::create(&config.log_file)
    };
    if let Ok(log_file) = log_file {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}
