use std::cmp::Reverse;

use crate::job::Job;

/// Job indices by descending total processing time.
///
/// The sort is stable, jobs with equal sums keep their input order.
pub fn priority_order(jobs: &[Job]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..jobs.len()).collect();
    order.sort_by_key(|&job| Reverse(jobs[job].sum()));
    order
}

#[cfg(test)]
mod tests {
    use super::priority_order;
    use crate::job::Job;

    #[test]
    fn descending_sums() {
        let jobs = vec![
            Job::new(1, vec![1, 3, 8]),
            Job::new(2, vec![9, 3, 5]),
            Job::new(3, vec![7, 8, 6]),
            Job::new(4, vec![4, 8, 7]),
        ];

        assert_eq!(priority_order(&jobs), vec![2, 3, 1, 0]);
    }

    #[test]
    fn ties_keep_input_order() {
        let jobs = vec![
            Job::new(1, vec![2, 3]),
            Job::new(2, vec![1, 1]),
            Job::new(3, vec![4, 1]),
            Job::new(4, vec![5, 0]),
            Job::new(5, vec![0, 2]),
        ];

        assert_eq!(priority_order(&jobs), vec![0, 2, 3, 1, 4]);
    }

    #[test]
    fn empty() {
        assert!(priority_order(&[]).is_empty());
    }
}
