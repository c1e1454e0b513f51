use ::config::{Config, Environment, File};
use serde::Deserialize;
use service::submit::SubmitOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitConfig {
    #[serde(default = "SubmitConfig::default_job_dir")]
    pub job_dir: String,

    #[serde(default = "SubmitConfig::default_basename_prefix")]
    pub basename_prefix: String,

    #[serde(default = "SubmitConfig::default_simulate")]
    pub simulate: String,

    #[serde(default = "Default::default")]
    pub build: BuildConfig,

    #[serde(default = "Default::default")]
    pub scheduler: SchedulerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "BuildConfig::default_command")]
    pub command: String,

    #[serde(default = "BuildConfig::default_flag")]
    pub flag: String,

    #[serde(default = "Default::default")]
    pub fail_on_error: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    #[serde(default = "SchedulerConfig::default_type")]
    pub r#type: String,

    #[serde(default = "SchedulerConfig::default_domain")]
    pub domain: String,
}

impl SubmitConfig {
    pub fn default_job_dir() -> String {
        "jobs".to_owned()
    }

    pub fn default_basename_prefix() -> String {
        "network".to_owned()
    }

    pub fn default_simulate() -> String {
        "simulate.exe".to_owned()
    }

    pub fn submit_options(&self) -> SubmitOptions {
        SubmitOptions::builder()
            .job_dir(self.job_dir.clone().into())
            .simulate(self.simulate.clone())
            .basename_prefix(self.basename_prefix.clone())
            .fail_on_build_error(self.build.fail_on_error)
            .build()
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: Self::default_command(),
            flag: Self::default_flag(),
            fail_on_error: false,
        }
    }
}

impl BuildConfig {
    pub fn default_command() -> String {
        "./mkfac.py".to_owned()
    }

    pub fn default_flag() -> String {
        "whide".to_owned()
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            r#type: Self::default_type(),
            domain: Self::default_domain(),
        }
    }
}

impl SchedulerConfig {
    pub fn default_type() -> String {
        "auto".to_owned()
    }

    pub fn default_domain() -> String {
        "colorado.edu".to_owned()
    }
}

/// Layer the optional config file under `SIMSUB_`-prefixed environment
/// variables; nested keys use `__` (e.g. `SIMSUB_SCHEDULER__TYPE`).
pub fn build_config() -> anyhow::Result<Config> {
    let path = std::env::var("SIMSUB_CONFIG").unwrap_or_else(|_| "config".to_owned());
    Ok(Config::builder()
        .add_source(File::with_name(&path).required(false))
        .add_source(Environment::with_prefix("SIMSUB").separator("__"))
        .build()?)
}
