//! Queue seeding from the topic catalog.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::catalog;
use crate::dedup::TopicRegistry;
use crate::error::Result;
use crate::jobs::{Job, JobStore, Scheduler};
use crate::page_type::PageType;

#[derive(Debug, Clone)]
pub struct SeedRequest {
    pub page_type: PageType,
    pub count: usize,
    pub priority: i32,
    pub max_attempts: u32,
}

/// Enqueue up to `count` pending jobs for catalog topics that are neither
/// queued nor already published.
///
/// Returns fewer jobs than requested once the catalog runs out.
pub fn seed<S: JobStore>(
    scheduler: &Scheduler<S>,
    registry: &TopicRegistry,
    request: &SeedRequest,
) -> Result<Vec<Job>> {
    let mut taken: HashSet<String> = scheduler
        .jobs()?
        .into_iter()
        .map(|job| job.topic_key)
        .collect();
    taken.extend(registry.topics()?);

    let topic_keys: Vec<String> = catalog::candidate_slugs(request.page_type)
        .into_iter()
        .map(|slug| request.page_type.topic_key(&slug))
        .filter(|key| !taken.contains(key))
        .take(request.count)
        .collect();

    if topic_keys.len() < request.count {
        warn!(
            page_type = %request.page_type,
            requested = request.count,
            available = topic_keys.len(),
            "Topic catalog exhausted"
        );
    }

    let mut seeded = Vec::with_capacity(topic_keys.len());
    for topic_key in topic_keys {
        let job = Job::builder()
            .page_type(request.page_type)
            .topic_key(topic_key)
            .priority(request.priority)
            .max_attempts(request.max_attempts)
            .build();
        seeded.push(scheduler.enqueue(job)?);
    }

    info!(page_type = %request.page_type, count = seeded.len(), "Seeded jobs");
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::{MemoryJobStore, SchedulerConfig};

    fn request(count: usize) -> SeedRequest {
        SeedRequest {
            page_type: PageType::Blog,
            count,
            priority: 0,
            max_attempts: 3,
        }
    }

    #[test]
    fn test_seed_skips_queued_and_published_topics() {
        let dir = tempfile::tempdir().unwrap();
        let registry = TopicRegistry::new(dir.path().join("topics.json"));
        registry.record("blog:best-lures-for-redfish").unwrap();

        let scheduler = Scheduler::new(
            MemoryJobStore::with_jobs(vec![Job::immediate(PageType::Blog, "blog:best-lures-for-snook")]),
            SchedulerConfig::default(),
        );

        let seeded = seed(&scheduler, &registry, &request(2)).unwrap();
        let keys: Vec<_> = seeded.iter().map(|j| j.topic_key.as_str()).collect();

        assert_eq!(keys, vec!["blog:best-lures-for-speckled-trout", "blog:best-lures-for-tarpon"]);
        assert_eq!(scheduler.jobs().unwrap().len(), 3);
    }

    #[test]
    fn test_seed_stops_when_catalog_exhausted() {
        let dir = tempfile::tempdir().unwrap();
        let registry = TopicRegistry::new(dir.path().join("topics.json"));
        let scheduler = Scheduler::new(MemoryJobStore::new(), SchedulerConfig::default());

        let request = SeedRequest {
            page_type: PageType::Location,
            count: 100,
            priority: 1,
            max_attempts: 3,
        };
        let seeded = seed(&scheduler, &registry, &request).unwrap();
        assert_eq!(seeded.len(), catalog::LOCATIONS.len());

        let again = seed(&scheduler, &registry, &request).unwrap();
        assert!(again.is_empty());
    }
}
