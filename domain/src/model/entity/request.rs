/// One submission request, built from the command line and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    /// Requested wall-clock limit, in hours. Passed through as written.
    pub walltime_hours: String,
    /// Whether the build marker was present among the arguments.
    pub build_flag: bool,
    /// Arguments forwarded verbatim to the simulation program.
    pub sim_args: Vec<String>,
}
