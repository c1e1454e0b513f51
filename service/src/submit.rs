use std::path::PathBuf;

use domain::{
    model::{
        entity::SubmitRequest,
        vo::job::{job_basename, ScriptInfo},
    },
    service::{JobScheduler, ProjectBuilder, SuffixQuery},
};
use typed_builder::TypedBuilder;

/// Knobs the pipeline needs beyond its collaborators.
#[derive(Debug, Clone, TypedBuilder)]
pub struct SubmitOptions {
    pub job_dir: PathBuf,
    pub simulate: String,
    pub basename_prefix: String,
    pub fail_on_build_error: bool,
}

/// Receipt for one submitted job.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub script_path: PathBuf,
    pub job_id: Option<String>,
}

/// The submission use case: build the project, ask the simulation program
/// for its suffix, render the job script, write it under the job directory
/// and hand it to the scheduler.
#[derive(TypedBuilder)]
pub struct SubmitService<B, Q, S> {
    builder: B,
    query: Q,
    scheduler: S,
    options: SubmitOptions,
}

impl<B, Q, S> SubmitService<B, Q, S>
where
    B: ProjectBuilder + Send + Sync,
    Q: SuffixQuery + Send + Sync,
    S: JobScheduler + Send + Sync,
{
    pub async fn run(&self, request: &SubmitRequest) -> anyhow::Result<Submission> {
        tracing::info!("building project");
        let status = self.builder.build(request.build_flag).await?;
        if !status.success() {
            if self.options.fail_on_build_error {
                anyhow::bail!("build exited with {status}");
            }
            tracing::warn!("build exited with {status}, continuing");
        }

        let suffix = self.query.suffix(&request.sim_args).await?;
        let basename = job_basename(&self.options.basename_prefix, &suffix);
        tracing::info!(%suffix, %basename, "resolved job basename");

        let info = ScriptInfo {
            basename: basename.clone(),
            walltime_hours: request.walltime_hours.clone(),
            program: self.options.simulate.clone(),
            arguments: request.sim_args.clone(),
        };

        // An existing job directory is fine; an existing script is replaced.
        tokio::fs::create_dir_all(&self.options.job_dir).await?;
        let script_path = self.options.job_dir.join(format!("{basename}.sh"));
        tokio::fs::write(&script_path, info.render()).await?;
        tracing::info!(path = %script_path.display(), "wrote job script");

        let job_id = self.scheduler.submit_job(&script_path).await?;
        if let Some(id) = &job_id {
            tracing::info!(job_id = %id, "job queued");
        }

        Ok(Submission {
            script_path,
            job_id,
        })
    }
}
