use std::{fs, path::Path};

use anyhow::{Context, Result};
use flowshop::Datasets;
use flowshop_parser::parse_flowshop_data;
use log::{debug, trace};

mod benchmark;
mod schedule;
mod show;

pub use benchmark::benchmark;
pub use schedule::schedule;
pub use show::show;

fn load_datasets(path: &Path) -> Result<Datasets> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {path:?}"))?;
    trace!("input file contents: {contents}");

    let instances =
        parse_flowshop_data(&contents).with_context(|| format!("failed to parse {path:?}"))?;
    let datasets = Datasets::from_instances(&instances)?;

    debug!("loaded {} datasets from {path:?}", datasets.len());

    Ok(datasets)
}
