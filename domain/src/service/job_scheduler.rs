use std::path::Path;

#[async_trait::async_trait]
pub trait JobScheduler {
    /// Submit a written job script. Returns the scheduler's job id when the
    /// backend reports one; the local shell fallback does not.
    async fn submit_job(&self, script_path: &Path) -> anyhow::Result<Option<String>>;
}
