use super::table::CompletionTable;
use crate::job::{Job, Time};

/// Makespan of `order` with `job` inserted in front of position `k`, in O(machines).
///
/// The forward column of `order[k - 1]` gives the earliest start of `job` on every machine,
/// the backward column of `order[k]` how long the rest of the sequence still needs after it.
/// Both tables must be up to date for the whole of `order`.
pub(crate) fn insertion_cost(
    job: &Job,
    forward: &CompletionTable,
    backward: &CompletionTable,
    k: usize,
    order: &[usize],
) -> Time {
    let previous = k.checked_sub(1).map(|position| forward.column(order[position]));
    let suffix = order.get(k).map(|&next| backward.column(next));

    let mut completion = 0;
    let mut cmax = 0;

    for (m, &time) in job.times().iter().enumerate() {
        let ready = previous.map_or(0, |column| column[m]);
        completion = completion.max(ready) + time;

        if let Some(suffix) = suffix {
            cmax = cmax.max(completion + suffix[m]);
        }
    }

    if suffix.is_some() {
        cmax
    } else {
        completion
    }
}
