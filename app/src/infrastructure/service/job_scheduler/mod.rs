pub mod shell;
pub mod slurm;

#[rustfmt::skip]
pub use self::{
    shell::ShellClient,
    slurm::SlurmClient,
};

use std::path::Path;

use domain::service::JobScheduler;
use tokio::process::Command;

use crate::config::SchedulerConfig;

/// The configured submission backend.
pub enum SchedulerClient {
    Slurm(SlurmClient),
    Shell(ShellClient),
}

#[async_trait::async_trait]
impl JobScheduler for SchedulerClient {
    async fn submit_job(&self, script_path: &Path) -> anyhow::Result<Option<String>> {
        match self {
            Self::Slurm(client) => client.submit_job(script_path).await,
            Self::Shell(client) => client.submit_job(script_path).await,
        }
    }
}

/// Pick the backend from configuration. `auto` matches the host FQDN against
/// the configured scheduler domain and falls back to the local shell, which
/// keeps test runs on a workstation out of the queue.
pub async fn select(config: &SchedulerConfig) -> anyhow::Result<SchedulerClient> {
    Ok(match config.r#type.as_str() {
        "slurm" => SchedulerClient::Slurm(SlurmClient),
        "shell" => SchedulerClient::Shell(ShellClient),
        "auto" => {
            let fqdn = fqdn().await;
            tracing::debug!(%fqdn, "detected host fqdn");
            if fqdn.contains(&config.domain) {
                SchedulerClient::Slurm(SlurmClient)
            } else {
                SchedulerClient::Shell(ShellClient)
            }
        }
        other => anyhow::bail!("Unknown scheduler type: {other}"),
    })
}

async fn fqdn() -> String {
    match Command::new("hostname").arg("-f").output().await {
        Ok(out) if out.status.success() => String::from_utf8_lossy(&out.stdout).trim().to_owned(),
        _ => {
            tracing::warn!("unable to read host fqdn, assuming local shell");
            String::new()
        }
    }
}
