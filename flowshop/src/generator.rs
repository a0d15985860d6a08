use std::{fmt::Write, ops::RangeInclusive};

use rand::Rng;

use crate::{
    dataset::Dataset,
    error::ValidationError,
    job::{Job, Time},
};

/// Processing time range of the Taillard benchmark instances.
pub const PROCESSING_TIMES: RangeInclusive<Time> = 1..=99;

/// Random dataset with processing times drawn uniformly from [`PROCESSING_TIMES`].
pub fn generate_dataset<R: Rng + ?Sized>(
    name: impl Into<String>,
    jobs: usize,
    machines: usize,
    rng: &mut R,
) -> Result<Dataset, ValidationError> {
    let jobs = (1..=jobs)
        .map(|id| {
            let times = (0..machines)
                .map(|_| rng.gen_range(PROCESSING_TIMES))
                .collect();
            Job::new(id, times)
        })
        .collect();

    Dataset::new(name, jobs)
}

/// Write datasets in the `data.` block format understood by the parser.
pub fn render_datasets(datasets: &[Dataset]) -> String {
    let mut output = String::new();

    for dataset in datasets {
        // writing into a String cannot fail
        let _ = writeln!(output, "{}:", dataset.name());
        let _ = writeln!(output, "{} {}", dataset.len(), dataset.machines());

        for job in dataset.jobs() {
            let row: Vec<String> = job.times().iter().map(ToString::to_string).collect();
            let _ = writeln!(output, "{}", row.join(" "));
        }

        output.push('\n');
    }

    output
}
