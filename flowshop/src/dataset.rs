use flowshop_parser::structs::FlowShopInstance;
use log::debug;

use crate::{
    error::{IndexError, ValidationError},
    job::{Job, Time},
};

/// Validated set of jobs that all run on the same number of machines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    name: String,
    jobs: Vec<Job>,
    machines: usize,
}

impl Dataset {
    pub fn new(name: impl Into<String>, jobs: Vec<Job>) -> Result<Self, ValidationError> {
        let name = name.into();

        let machines = match jobs.first() {
            Some(first) => first.machines(),
            None => return Err(ValidationError::EmptyDataset { dataset: name }),
        };

        if machines == 0 {
            return Err(ValidationError::NoMachines {
                dataset: name,
                job: jobs[0].id(),
            });
        }

        if let Some(job) = jobs.iter().find(|job| job.machines() != machines) {
            return Err(ValidationError::InconsistentMachineCount {
                job: job.id(),
                expected: machines,
                found: job.machines(),
                dataset: name,
            });
        }

        // Every completion time is bounded by the total work, so checking it once keeps the
        // construction arithmetic in range.
        let mut total: Time = 0;
        for job in &jobs {
            let work = job
                .times()
                .iter()
                .try_fold(0, |sum: Time, &time| sum.checked_add(time))
                .and_then(|sum| total.checked_add(sum));

            match work {
                Some(work) => total = work,
                None => {
                    return Err(ValidationError::TimeOverflow {
                        dataset: name,
                        job: job.id(),
                    })
                }
            }
        }

        Ok(Self {
            name,
            jobs,
            machines,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn machines(&self) -> usize {
        self.machines
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Always false for a validated dataset.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl TryFrom<&FlowShopInstance> for Dataset {
    type Error = ValidationError;

    fn try_from(instance: &FlowShopInstance) -> Result<Self, Self::Error> {
        let jobs = instance
            .processing_times
            .iter()
            .enumerate()
            .map(|(row, times)| Job::new(row + 1, times.clone()))
            .collect();

        Dataset::new(instance.name.clone(), jobs)
    }
}

/// All datasets of a data file, addressed by their 0-based position.
#[derive(Debug, Clone, Default)]
pub struct Datasets(Vec<Dataset>);

impl Datasets {
    pub fn new(datasets: Vec<Dataset>) -> Self {
        Self(datasets)
    }

    pub fn from_instances(instances: &[FlowShopInstance]) -> Result<Self, ValidationError> {
        let datasets = instances
            .iter()
            .map(Dataset::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!("validated {} datasets", datasets.len());

        Ok(Self(datasets))
    }

    pub fn get(&self, index: usize) -> Result<&Dataset, IndexError> {
        self.0.get(index).ok_or(IndexError {
            index,
            available: self.0.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dataset> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Dataset] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
