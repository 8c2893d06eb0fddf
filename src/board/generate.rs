use super::Job;

const TITLES: [&str; 10] = [
    "Senior React Developer",
    "Backend Engineer",
    "Full Stack Developer",
    "DevOps Specialist",
    "Machine Learning Engineer",
    "Cloud Architect",
    "Frontend Developer",
    "Data Scientist",
    "Security Analyst",
    "Product Manager",
];

const COMPANIES: [&str; 10] = [
    "Tech Innovations Inc.",
    "Cloud Solutions LLC",
    "Data Dynamics",
    "Web Wizards",
    "AI Frontier",
    "Quantum Systems",
    "Cyber Secure",
    "Global Networks",
    "Innovative Platforms",
    "Future Tech",
];

const LOCATIONS: [&str; 5] = [
    "San Francisco, CA",
    "New York, NY",
    "Remote",
    "Austin, TX",
    "Seattle, WA",
];

const TAGS: [&str; 3] = ["Full-time", "Tech", "Innovative"];

const DESCRIPTION: &str = "We are looking for a talented professional to join our \
                           innovative team and drive technological excellence.";

/// Derives `count` job records from the lookup tables. Record `i` (0-based)
/// gets id `job-{i+1}`; the remaining fields cycle through the tables or
/// follow a formula of the index. Deterministic, no I/O.
pub fn generate_jobs(count: usize) -> Vec<Job> {
    (0..count)
        .map(|index| Job {
            id: format!("job-{}", index + 1),
            title: TITLES[index % TITLES.len()].to_owned(),
            company: COMPANIES[index % COMPANIES.len()].to_owned(),
            location: LOCATIONS[index % LOCATIONS.len()].to_owned(),
            salary: format!(
                "${} - ${}",
                (90 + index * 5) * 1000,
                (120 + index * 5) * 1000
            ),
            description: DESCRIPTION.to_owned(),
            tags: TAGS.iter().map(|tag| (*tag).to_owned()).collect(),
            posted_date: format!("{} days ago", index / 3 + 1),
        })
        .collect()
}
