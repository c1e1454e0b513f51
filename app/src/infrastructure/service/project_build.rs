use std::process::ExitStatus;

use anyhow::Context;
use domain::service::ProjectBuilder;
use tokio::process::Command;

use crate::config::BuildConfig;

/// Runs the configured build command in the working directory, streaming its
/// output to the terminal.
pub struct BuildCommand {
    command: String,
    flag: String,
}

impl BuildCommand {
    pub fn new(config: &BuildConfig) -> Self {
        Self {
            command: config.command.clone(),
            flag: config.flag.clone(),
        }
    }
}

#[async_trait::async_trait]
impl ProjectBuilder for BuildCommand {
    async fn build(&self, forward_flag: bool) -> anyhow::Result<ExitStatus> {
        let mut command = Command::new(&self.command);
        if forward_flag {
            command.arg(&self.flag);
        }
        command
            .status()
            .await
            .with_context(|| format!("failed to run build command {}", self.command))
    }
}
