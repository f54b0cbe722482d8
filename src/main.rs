use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use benchboard::commands::{self, error_chain};
use benchboard_core::load_page_config;
use benchboard_types::PageConfig;

#[derive(Parser, Debug)]
#[command(name = "benchboard")]
#[command(about = "Inspect benchmark chart datasets")]
#[command(version)]
struct Args {
    /// Page configuration (TOML); defaults apply when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List dataset keys with chart type and series count
    Keys { dataset: PathBuf },
    /// Print the configuration a chart would be rendered with
    Show {
        dataset: PathBuf,
        key: String,
        /// Apply the detail view overrides
        #[arg(long)]
        detail: bool,
    },
    /// Print tooltip lines for every point of a chart
    Tooltips { dataset: PathBuf, key: String },
    /// Report configurations the page cannot overlay cleanly
    Check { dataset: PathBuf },
}

fn main() -> Result<ExitCode, String> {
    benchboard::logging::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_page_config(path).map_err(|e| error_chain(&e))?,
        None => PageConfig::default(),
    };

    match args.command {
        Command::Keys { dataset } => {
            print!("{}", commands::keys(&commands::load_dataset(&dataset)?));
        }
        Command::Show {
            dataset,
            key,
            detail,
        } => {
            let dataset = commands::load_dataset(&dataset)?;
            println!("{}", commands::show(&dataset, &key, detail, &config)?);
        }
        Command::Tooltips { dataset, key } => {
            print!("{}", commands::tooltips(&commands::load_dataset(&dataset)?, &key)?);
        }
        Command::Check { dataset } => {
            let report = commands::check(&commands::load_dataset(&dataset)?);
            print!("{}", report.text);
            if report.issues > 0 {
                tracing::warn!(issues = report.issues, "Dataset has issues");
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
