mod cli;
mod config;
mod infrastructure;

use anyhow::Context;
use colored::Colorize;
use service::submit::SubmitService;
use tracing_subscriber::EnvFilter;

use self::config::SubmitConfig;
use self::infrastructure::service::job_scheduler;
use self::infrastructure::service::project_build::BuildCommand;
use self::infrastructure::service::suffix_query::SimulateQuery;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::build_config().with_context(|| "Failed to build config".red())?;
    let config: SubmitConfig = config.try_deserialize()?;

    let mut args = std::env::args();
    let prog = args.next().unwrap_or_else(|| "simsub".to_owned());
    let request = match cli::parse(args, &config.build.flag) {
        Ok(request) => request,
        Err(_) => {
            eprintln!("{}", cli::usage(&prog, &config.build.flag));
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let scheduler = job_scheduler::select(&config.scheduler)
        .await
        .with_context(|| "Cannot select scheduler backend".red())?;

    let submit = SubmitService::builder()
        .builder(BuildCommand::new(&config.build))
        .query(SimulateQuery::new(&config.simulate))
        .scheduler(scheduler)
        .options(config.submit_options())
        .build();

    let submission = submit.run(&request).await?;
    if let Some(id) = submission.job_id {
        println!("Submitted batch job {id}");
    }
    Ok(())
}
