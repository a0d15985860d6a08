use std::path::PathBuf;

use anyhow::Result;

pub fn show(path: PathBuf, index: usize) -> Result<()> {
    let datasets = super::load_datasets(&path)?;
    let dataset = datasets.get(index)?;

    println!("{}", dataset.name());
    for job in dataset.jobs() {
        println!("{job}");
    }

    Ok(())
}
