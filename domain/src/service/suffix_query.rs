#[async_trait::async_trait]
pub trait SuffixQuery {
    /// Ask the simulation program which output suffix these arguments
    /// produce.
    async fn suffix(&self, sim_args: &[String]) -> anyhow::Result<String>;
}
