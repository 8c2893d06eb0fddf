//! Askama templates for the page views.

use askama::Template;

use crate::board::Job;
use crate::posting::{FormErrors, JobPostingForm};

/// Decorative chips under the search bar. Rendered, not wired to anything.
pub const POPULAR_SEARCHES: [&str; 4] = ["React", "Frontend", "Backend", "Full Stack"];

#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingPage<'a> {
    pub query: &'a str,
    pub jobs: Vec<&'a Job>,
    pub popular_searches: &'static [&'static str],
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailPage<'a> {
    pub job: &'a Job,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage;

#[derive(Template)]
#[template(path = "posting_form.html")]
pub struct PostingFormPage<'a> {
    pub form: &'a JobPostingForm,
    pub errors: &'a FormErrors,
    pub submitted: bool,
}
