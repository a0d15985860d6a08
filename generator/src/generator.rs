use flowshop::{generator::generate_dataset, Dataset, ValidationError};
use rand::{rngs::StdRng, SeedableRng};

pub(crate) fn generate_datasets(
    count: usize,
    jobs: usize,
    machines: usize,
    seed: Option<u64>,
) -> Result<Vec<Dataset>, ValidationError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..count)
        .map(|index| generate_dataset(format!("data.{index:03}"), jobs, machines, &mut rng))
        .collect()
}
