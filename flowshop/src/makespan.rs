use crate::{
    dataset::Dataset,
    job::{Job, Time},
};

/// Chain `job` behind the jobs that left the machines at `ready`.
///
/// Afterwards `ready[m]` holds the completion time of `job` on machine `m`.
pub(crate) fn chain(job: &Job, ready: &mut [Time]) {
    let mut t = 0;
    for (ready, &time) in ready.iter_mut().zip(job.times()) {
        t = t.max(*ready) + time;
        *ready = t;
    }
}

/// Makespan of `order`, recomputed from scratch.
pub fn total_time(dataset: &Dataset, order: &[usize]) -> Time {
    let mut machine_free_at = vec![0; dataset.machines()];

    for &job in order {
        chain(&dataset.jobs()[job], &mut machine_free_at);
    }

    machine_free_at.last().copied().unwrap_or(0)
}

/// Completion time of every job on every machine, one row per position of `order`.
pub fn completion_times(dataset: &Dataset, order: &[usize]) -> Vec<Vec<Time>> {
    let mut machine_free_at = vec![0; dataset.machines()];

    order
        .iter()
        .map(|&job| {
            chain(&dataset.jobs()[job], &mut machine_free_at);
            machine_free_at.clone()
        })
        .collect()
}
