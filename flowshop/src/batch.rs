use log::info;
use rayon::prelude::*;

use crate::{
    dataset::Datasets,
    neh::{construct, Construction},
};

/// Run one independent construction per dataset in parallel, results in dataset order.
pub fn construct_all(datasets: &Datasets) -> Vec<Construction> {
    info!("constructing {} datasets", datasets.len());

    datasets.as_slice().par_iter().map(construct).collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::construct_all;
    use crate::{
        dataset::Datasets, generator::generate_dataset, makespan::total_time, neh::construct,
    };

    #[test]
    fn matches_sequential_runs() {
        let mut rng = StdRng::seed_from_u64(17);
        let datasets = Datasets::new(
            (0..6)
                .map(|i| generate_dataset(format!("data.{i:03}"), 10 + i, 5, &mut rng).unwrap())
                .collect(),
        );

        let constructions = construct_all(&datasets);

        assert_eq!(constructions.len(), datasets.len());
        for (dataset, construction) in datasets.iter().zip(&constructions) {
            assert_eq!(construction, &construct(dataset));
            assert_eq!(
                construction.makespan,
                total_time(dataset, &construction.order)
            );
        }
    }

    #[test]
    fn no_datasets() {
        assert!(construct_all(&Datasets::default()).is_empty());
    }
}
