use log::{debug, trace};

use crate::{dataset::Dataset, job::Time};

use self::{
    insertion::insertion_cost,
    table::{update_backward, update_forward, CompletionTable},
};

mod insertion;
pub mod priority;
mod table;

pub use priority::priority_order;

/// Permutation built by the insertion heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construction {
    /// 0-based job indices in processing order.
    pub order: Vec<usize>,
    /// Makespan of the last accepted insertion.
    pub makespan: Time,
}

impl Construction {
    /// 1-based job ids of the order.
    pub fn job_ids(&self, dataset: &Dataset) -> Vec<usize> {
        self.order
            .iter()
            .map(|&job| dataset.jobs()[job].id())
            .collect()
    }
}

/// One insertion step of the construction.
#[derive(Debug)]
pub(crate) struct InsertionRound<'a> {
    pub job: usize,
    /// Sequence before the insertion.
    pub order: &'a [usize],
    /// Makespan for every candidate position `0..=order.len()`.
    pub costs: &'a [Time],
    pub position: usize,
}

/// Build a permutation with the NEH insertion heuristic.
///
/// Jobs are taken by descending total processing time and each one is inserted at the first
/// position that minimizes the makespan of the partial sequence.
pub fn construct(dataset: &Dataset) -> Construction {
    debug!(
        "constructing {}: {} jobs on {} machines",
        dataset.name(),
        dataset.len(),
        dataset.machines()
    );

    let construction = construct_with(dataset, |round| {
        trace!(
            "job {} -> position {} of {}, costs: {:?}",
            round.job,
            round.position,
            round.order.len(),
            round.costs
        );
    });

    debug!(
        "{}: order {:?}, makespan {}",
        dataset.name(),
        construction.order,
        construction.makespan
    );

    construction
}

pub(crate) fn construct_with<F>(dataset: &Dataset, mut on_round: F) -> Construction
where
    F: FnMut(&InsertionRound),
{
    let jobs = dataset.jobs();

    let mut forward = CompletionTable::new(dataset.machines(), jobs.len());
    let mut backward = CompletionTable::new(dataset.machines(), jobs.len());
    let mut order: Vec<usize> = Vec::with_capacity(jobs.len());
    let mut costs: Vec<Time> = Vec::with_capacity(jobs.len() + 1);

    let mut idx = 0;
    let mut makespan = 0;

    for job in priority_order(jobs) {
        // only the region around the last insertion is stale
        update_forward(jobs, &order, &mut forward, idx);
        update_backward(jobs, &order, &mut backward, idx);

        costs.clear();
        let mut position = 0;
        for candidate in 0..=order.len() {
            let cost = insertion_cost(&jobs[job], &forward, &backward, candidate, &order);
            costs.push(cost);

            if cost < costs[position] {
                position = candidate;
            }
        }

        on_round(&InsertionRound {
            job,
            order: &order,
            costs: &costs,
            position,
        });

        makespan = costs[position];
        order.insert(position, job);
        idx = position;
    }

    Construction { order, makespan }
}

#[cfg(test)]
mod tests {
    use flowshop_parser::parse_flowshop_data;
    use rand::{rngs::StdRng, SeedableRng};

    use super::{construct, construct_with};
    use crate::{
        dataset::{Dataset, Datasets},
        generator::generate_dataset,
        job::{Job, Time},
        makespan::total_time,
    };

    static TEST_FILE: &str = include_str!("../../../data/data.txt");

    fn random_datasets() -> Vec<Dataset> {
        let mut rng = StdRng::seed_from_u64(42);

        [(1, 1), (1, 5), (5, 1), (7, 3), (20, 5), (20, 10), (50, 5), (50, 20)]
            .into_iter()
            .map(|(jobs, machines)| {
                generate_dataset(format!("{jobs}x{machines}"), jobs, machines, &mut rng).unwrap()
            })
            .collect()
    }

    #[test]
    fn two_jobs_two_machines() {
        let dataset =
            Dataset::new("a", vec![Job::new(1, vec![2, 3]), Job::new(2, vec![4, 1])]).unwrap();
        let mut rounds = vec![];

        let construction = construct_with(&dataset, |round| {
            rounds.push((round.job, round.costs.to_vec(), round.position));
        });

        assert_eq!(rounds, vec![(0, vec![5], 0), (1, vec![9, 7], 1)]);
        assert_eq!(construction.order, vec![0, 1]);
        assert_eq!(construction.job_ids(&dataset), vec![1, 2]);
        assert_eq!(construction.makespan, 7);
    }

    #[test]
    fn data_file() {
        let instances = parse_flowshop_data(TEST_FILE).unwrap();
        let datasets = Datasets::from_instances(&instances).unwrap();

        let expected: [(&[usize], Time); 4] = [
            (&[1, 4, 3, 2], 32),
            (&[1, 2], 7),
            (&[1], 15),
            (&[6, 1, 2, 3, 4, 5], 59),
        ];

        for (dataset, (ids, makespan)) in datasets.iter().zip(expected) {
            let construction = construct(dataset);

            assert_eq!(construction.job_ids(dataset), ids, "{}", dataset.name());
            assert_eq!(construction.makespan, makespan, "{}", dataset.name());
        }
    }

    #[test]
    fn single_job() {
        let dataset = Dataset::new("single", vec![Job::new(1, vec![5, 2, 7, 1])]).unwrap();

        let construction = construct(&dataset);

        assert_eq!(construction.order, vec![0]);
        assert_eq!(construction.makespan, 15);
    }

    #[test]
    fn first_insertion_costs_the_job_sum() {
        for dataset in random_datasets() {
            let mut first = None;

            construct_with(&dataset, |round| {
                if round.order.is_empty() {
                    first = Some((round.job, round.costs.to_vec(), round.position));
                }
            });

            let (job, costs, position) = first.unwrap();
            assert_eq!(costs, vec![dataset.jobs()[job].sum()]);
            assert_eq!(position, 0);
        }
    }

    #[test]
    fn result_is_a_permutation() {
        for dataset in random_datasets() {
            let mut order = construct(&dataset).order;

            order.sort_unstable();
            assert_eq!(order, (0..dataset.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn makespan_matches_recomputation() {
        for dataset in random_datasets() {
            let construction = construct(&dataset);

            assert_eq!(
                construction.makespan,
                total_time(&dataset, &construction.order),
                "{}",
                dataset.name()
            );
        }
    }

    #[test]
    fn every_round_picks_the_first_minimum() {
        for dataset in random_datasets() {
            construct_with(&dataset, |round| {
                assert_eq!(round.costs.len(), round.order.len() + 1);

                let best = round.costs[round.position];
                assert!(round.costs.iter().all(|&cost| cost >= best));
                assert!(round.costs[..round.position].iter().all(|&cost| cost > best));

                for (k, &cost) in round.costs.iter().enumerate() {
                    let mut inserted = round.order.to_vec();
                    inserted.insert(k, round.job);
                    assert_eq!(cost, total_time(&dataset, &inserted));
                }
            });
        }
    }

    #[test]
    fn jobs_are_visited_by_priority() {
        let dataset = Dataset::new(
            "ties",
            vec![
                Job::new(1, vec![1, 1]),
                Job::new(2, vec![3, 3]),
                Job::new(3, vec![2, 4]),
                Job::new(4, vec![2, 2]),
            ],
        )
        .unwrap();
        let mut visited = vec![];

        construct_with(&dataset, |round| visited.push(round.job));

        assert_eq!(visited, vec![1, 2, 3, 0]);
    }
}
