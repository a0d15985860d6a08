#![forbid(unsafe_code)]
use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::{debug, error};

mod commands;

#[derive(Debug, Parser)]
#[command(author, version)]
/// Permutation flow shop scheduler
struct App {
    #[command(flatten)]
    verbose: Verbosity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a schedule for one dataset of a data file
    Schedule {
        #[arg(required = true, env = "FLOWSHOP_DATA")]
        path: PathBuf,
        /// 0-based index of the dataset within the file
        #[arg(short, long, env = "FLOWSHOP_DATASET", default_value_t = 0)]
        dataset: usize,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the jobs of one dataset
    Show {
        #[arg(required = true, env = "FLOWSHOP_DATA")]
        path: PathBuf,
        /// 0-based index of the dataset within the file
        #[arg(short, long, env = "FLOWSHOP_DATASET", default_value_t = 0)]
        dataset: usize,
    },
    /// Schedule every dataset of a data file and write the makespans to a file
    Benchmark {
        #[arg(required = true)]
        path: PathBuf,
        #[arg(required = true)]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let args: App = App::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    debug!("{args:?}");

    if let Err(err) = match args.command {
        Commands::Schedule {
            path,
            dataset,
            json,
        } => commands::schedule(path, dataset, json),
        Commands::Show { path, dataset } => commands::show(path, dataset),
        Commands::Benchmark { path, output } => commands::benchmark(path, output),
    } {
        error!("An error occurred: {:#}", err);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
