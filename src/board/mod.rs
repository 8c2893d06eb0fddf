mod board;
mod generate;
mod job;

pub use board::JobBoard;
pub use generate::generate_jobs;
pub use job::Job;
