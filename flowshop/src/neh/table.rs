use crate::{
    job::{Job, Time},
    makespan::chain,
};

/// Dense machines x jobs matrix of completion times.
///
/// Columns are addressed by job index, not by sequence position, so an insertion only
/// invalidates the columns of the jobs whose position relative to it changed. A column holds
/// the result of the most recent update covering its job and is stale otherwise.
#[derive(Debug, Clone)]
pub(crate) struct CompletionTable {
    machines: usize,
    // column major, `job * machines + machine`
    values: Vec<Time>,
}

impl CompletionTable {
    pub(crate) fn new(machines: usize, jobs: usize) -> Self {
        Self {
            machines,
            values: vec![0; machines * jobs],
        }
    }

    pub(crate) fn column(&self, job: usize) -> &[Time] {
        &self.values[job * self.machines..(job + 1) * self.machines]
    }

    fn column_mut(&mut self, job: usize) -> &mut [Time] {
        &mut self.values[job * self.machines..(job + 1) * self.machines]
    }
}

/// Recompute the forward completion times of the positions `k..` of `order`.
///
/// Positions before `k` must still be valid from an earlier update.
pub(crate) fn update_forward(
    jobs: &[Job],
    order: &[usize],
    forward: &mut CompletionTable,
    k: usize,
) {
    if order.is_empty() {
        return;
    }

    let mut ready = match k.checked_sub(1) {
        Some(previous) => forward.column(order[previous]).to_vec(),
        None => vec![0; forward.machines],
    };

    for &job in &order[k..] {
        chain(&jobs[job], &mut ready);
        forward.column_mut(job).copy_from_slice(&ready);
    }
}

/// Recompute the backward completion times of the positions `..=k` of `order`.
///
/// `backward[m][j]` is the time from job `j` starting on machine `m` until the suffix of the
/// sequence beginning with `j` is finished. Positions after `k` must still be valid.
pub(crate) fn update_backward(
    jobs: &[Job],
    order: &[usize],
    backward: &mut CompletionTable,
    k: usize,
) {
    if order.is_empty() {
        return;
    }
    debug_assert!(k < order.len(), "split index {k} outside of the sequence");

    let mut tail = match order.get(k + 1) {
        Some(&next) => backward.column(next).to_vec(),
        None => vec![0; backward.machines],
    };

    for &job in order[..=k].iter().rev() {
        let times = jobs[job].times();
        let mut t = 0;
        for m in (0..times.len()).rev() {
            t = t.max(tail[m]) + times[m];
            tail[m] = t;
        }
        backward.column_mut(job).copy_from_slice(&tail);
    }
}
