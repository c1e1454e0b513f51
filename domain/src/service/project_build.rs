use std::process::ExitStatus;

#[async_trait::async_trait]
pub trait ProjectBuilder {
    /// Run the project build, forwarding the build marker when `forward_flag`
    /// is set. Failing to spawn is an error; a non-zero exit is reported in
    /// the returned status and left for the caller to judge.
    async fn build(&self, forward_flag: bool) -> anyhow::Result<ExitStatus>;
}
