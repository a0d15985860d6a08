use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use flowshop::{batch::construct_all, Construction, Datasets};
use log::info;

pub fn benchmark(path: PathBuf, output: PathBuf) -> Result<()> {
    let datasets = super::load_datasets(&path)?;
    if datasets.is_empty() {
        anyhow::bail!("{path:?} does not contain any dataset")
    }

    let start_time = Instant::now();
    let constructions = construct_all(&datasets);
    info!(
        "scheduled {} datasets in {:?}",
        datasets.len(),
        start_time.elapsed()
    );

    std::fs::write(&output, render_results(&datasets, &constructions))?;

    info!("Wrote makespans to: {:?}", output);

    Ok(())
}

/// One `name: makespan` line per dataset.
fn render_results(datasets: &Datasets, constructions: &[Construction]) -> String {
    datasets
        .iter()
        .zip(constructions)
        .map(|(dataset, construction)| format!("{}: {}\n", dataset.name(), construction.makespan))
        .collect()
}

#[cfg(test)]
mod tests {
    use flowshop::{construct, Dataset, Datasets, Job};

    use super::render_results;

    #[test]
    fn one_line_per_dataset() {
        let datasets = Datasets::new(vec![
            Dataset::new("data.000", vec![Job::new(1, vec![2, 3]), Job::new(2, vec![4, 1])])
                .unwrap(),
            Dataset::new("data.001", vec![Job::new(1, vec![5, 2, 7, 1])]).unwrap(),
        ]);
        let constructions: Vec<_> = datasets.iter().map(construct).collect();

        let output = render_results(&datasets, &constructions);

        assert_eq!(output, "data.000: 7\ndata.001: 15\n");
    }
}
