use std::{fs::File, io::Write, path::PathBuf};

use clap::Parser;
use flowshop::generator::render_datasets;

mod generator;

/// Program to generate random permutation flow shop data files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of datasets to generate
    #[arg(short, long, env, default_value_t = 1)]
    datasets: usize,

    /// Number of jobs per dataset
    #[arg(short, long, env, default_value_t = 20)]
    jobs: usize,

    /// Number of machines per dataset
    #[arg(short, long, env, default_value_t = 5)]
    machines: usize,

    /// Seed for reproducible datasets
    #[arg(short, long, env)]
    seed: Option<u64>,

    /// Target file for output
    file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args: Args = Args::parse();

    let datasets =
        generator::generate_datasets(args.datasets, args.jobs, args.machines, args.seed)?;

    let mut writer = File::create(args.file)?;
    writer.write_all(render_datasets(&datasets).as_bytes())?;
    writer.flush()?;

    Ok(())
}
