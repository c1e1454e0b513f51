mod job_scheduler;
mod project_build;
mod suffix_query;

#[rustfmt::skip]
pub use self::{
    job_scheduler::JobScheduler,
    project_build::ProjectBuilder,
    suffix_query::SuffixQuery,
};
