//! Job persistence.
//!
//! The queue is a flat list of jobs. Stores only load and save the whole
//! list; the scheduler owns every mutation.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use super::job::Job;
use crate::error::Result;
use crate::storage::{read_json_or_default, write_json_atomic};

/// Trait for job list storage.
pub trait JobStore: Send + Sync {
    /// Load every job. A missing queue is an empty queue.
    fn load(&self) -> Result<Vec<Job>>;

    /// Replace the stored list.
    fn save(&self, jobs: &[Job]) -> Result<()>;
}

/// Job queue kept in a single JSON file.
pub struct FileJobStore {
    path: PathBuf,
}

impl FileJobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JobStore for FileJobStore {
    fn load(&self) -> Result<Vec<Job>> {
        read_json_or_default(&self.path)
    }

    fn save(&self, jobs: &[Job]) -> Result<()> {
        write_json_atomic(&self.path, jobs)
    }
}

/// In-memory job store for tests.
#[derive(Default)]
pub struct MemoryJobStore {
    jobs: RwLock<Vec<Job>>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with jobs.
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        Self {
            jobs: RwLock::new(jobs),
        }
    }
}

impl JobStore for MemoryJobStore {
    fn load(&self) -> Result<Vec<Job>> {
        Ok(self.jobs.read().unwrap().clone())
    }

    fn save(&self, jobs: &[Job]) -> Result<()> {
        *self.jobs.write().unwrap() = jobs.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_type::PageType;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileJobStore::new(dir.path().join("jobs.json"));

        assert!(store.load().unwrap().is_empty());

        let jobs = vec![
            Job::immediate(PageType::Blog, "blog:snook-fishing-tips"),
            Job::immediate(PageType::Location, "location:tampa-bay"),
        ];
        store.save(&jobs).unwrap();

        assert_eq!(store.load().unwrap(), jobs);
    }
}
