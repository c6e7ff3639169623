//! Job queue: model, persistence and scheduling.

mod job;
mod scheduler;
mod store;

pub use job::{Job, JobStatus};
pub use scheduler::{Scheduler, SchedulerConfig};
pub use store::{FileJobStore, JobStore, MemoryJobStore};
