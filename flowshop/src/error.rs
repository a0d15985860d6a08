use thiserror::Error;

/// Broken preconditions of a dataset handed to the construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("dataset {dataset} contains no jobs")]
    EmptyDataset { dataset: String },
    #[error("dataset {dataset}: job {job} has no processing times, at least one machine is required")]
    NoMachines { dataset: String, job: usize },
    #[error("dataset {dataset}: job {job} has {found} processing times, expected {expected} like the first job")]
    InconsistentMachineCount {
        dataset: String,
        job: usize,
        expected: usize,
        found: usize,
    },
    #[error("dataset {dataset}: processing times up to job {job} exceed the time range")]
    TimeOverflow { dataset: String, job: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("dataset index {index} is out of range, only {available} datasets were parsed")]
pub struct IndexError {
    pub index: usize,
    pub available: usize,
}
