pub mod submit;

pub use self::submit::{Submission, SubmitOptions, SubmitService};
