use std::path::Path;

use domain::service::JobScheduler;
use tokio::process::Command;

/// Local fallback: run the job script directly with `sh`, output streaming
/// to the terminal. No job id to report.
pub struct ShellClient;

#[async_trait::async_trait]
impl JobScheduler for ShellClient {
    async fn submit_job(&self, script_path: &Path) -> anyhow::Result<Option<String>> {
        let status = Command::new("sh").arg(script_path).status().await?;
        if !status.success() {
            anyhow::bail!("Exit Status not 0 for local run. real: {status}");
        }
        Ok(None)
    }
}
