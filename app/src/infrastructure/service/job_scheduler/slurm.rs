use std::path::Path;

use domain::service::JobScheduler;
use tokio::process::Command;

/// Submits through `sbatch` and reports the scheduler's job id.
pub struct SlurmClient;

#[async_trait::async_trait]
impl JobScheduler for SlurmClient {
    async fn submit_job(&self, script_path: &Path) -> anyhow::Result<Option<String>> {
        let out = Command::new("sbatch").arg(script_path).output().await?;
        if !out.status.success() {
            anyhow::bail!(
                "Exit Status not 0 for submit_job. real: {}, err: {}",
                out.status,
                String::from_utf8_lossy(&out.stderr)
            );
        }
        Ok(Some(parse_job_id(&String::from_utf8_lossy(&out.stdout))))
    }
}

/// `sbatch` acknowledges with `Submitted batch job <id>`.
fn parse_job_id(stdout: &str) -> String {
    stdout.replace("Submitted batch job ", "").trim().to_string()
}
