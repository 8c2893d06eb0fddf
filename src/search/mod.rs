//! Substring matching over the job board.
//!
//! There is no index; every query walks the full list. An empty term
//! matches everything.

use crate::board::Job;

/// Returns the jobs whose title, company or location contains `term`,
/// case-insensitively, preserving board order.
pub fn filter_jobs<'a>(jobs: &'a [Job], term: &str) -> Vec<&'a Job> {
    if term.is_empty() {
        return jobs.iter().collect();
    }

    let term = term.to_lowercase();
    jobs.iter()
        .filter(|job| {
            job.title.to_lowercase().contains(&term)
                || job.company.to_lowercase().contains(&term)
                || job.location.to_lowercase().contains(&term)
        })
        .collect()
}
