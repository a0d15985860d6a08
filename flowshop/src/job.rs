use std::fmt;

/// Processing and completion times.
pub type Time = u64;

/// A job of a permutation flow shop.
///
/// `times[m]` is the processing time on machine `m`, machines are visited in index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    id: usize,
    times: Vec<Time>,
    sum: Time,
}

impl Job {
    pub fn new(id: usize, times: Vec<Time>) -> Self {
        // saturates, datasets reject jobs whose times do not fit
        let sum = times.iter().fold(0, |sum: Time, &time| sum.saturating_add(time));

        Self { id, times, sum }
    }

    /// 1-based identifier, the row of the job within its dataset.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Total processing time over all machines.
    pub fn sum(&self) -> Time {
        self.sum
    }

    pub fn machines(&self) -> usize {
        self.times.len()
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id: {} | {:?}", self.id, self.times)
    }
}
