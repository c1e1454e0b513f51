use anyhow::Context;
use domain::service::SuffixQuery;
use tokio::process::Command;

/// Asks the simulation binary for its output suffix (`--suffix` mode). The
/// binary lives in the working directory, like the build it came from.
pub struct SimulateQuery {
    program: String,
}

impl SimulateQuery {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_owned(),
        }
    }
}

#[async_trait::async_trait]
impl SuffixQuery for SimulateQuery {
    async fn suffix(&self, sim_args: &[String]) -> anyhow::Result<String> {
        let out = Command::new(format!("./{}", self.program))
            .arg("--suffix")
            .args(sim_args)
            .output()
            .await
            .with_context(|| format!("failed to run ./{} --suffix", self.program))?;
        if !out.status.success() {
            anyhow::bail!(
                "Exit Status not 0 for suffix query. real: {}, err: {}",
                out.status,
                String::from_utf8_lossy(&out.stderr)
            );
        }
        let stdout = String::from_utf8(out.stdout)?;
        Ok(last_token(&stdout).context("suffix query printed no output")?.to_owned())
    }
}

/// The suffix is the last whitespace-delimited token the query prints; any
/// chatter before it is ignored.
fn last_token(stdout: &str) -> Option<&str> {
    stdout.split_whitespace().last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_last_token() {
        assert_eq!(last_token("foo.bar.net\n"), Some("foo.bar.net"));
        assert_eq!(
            last_token("configured for 3 runs\nsuffix: foo.bar.net\n"),
            Some("foo.bar.net")
        );
    }

    #[test]
    fn empty_output_has_no_token() {
        assert_eq!(last_token(""), None);
        assert_eq!(last_token(" \n\t"), None);
    }
}
