pub mod batch;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod job;
pub mod makespan;
pub mod neh;

pub use dataset::{Dataset, Datasets};
pub use error::{IndexError, ValidationError};
pub use job::{Job, Time};
pub use neh::{construct, Construction};
