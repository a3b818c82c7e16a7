//! Command-line surface
//!
//! Turns argv into an [`Invocation`] or a usage error. Nothing here touches
//! the network or the filesystem.

use crate::config::{parse_api_url, ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::Result;
use crate::job::{
    JobStatusQuery, JobSubmissionRequest, Target, DEFAULT_MAX_RETRIES, DEFAULT_PRIORITY,
};
use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use reqwest::Url;
use std::ffi::OsString;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "qgjob")]
#[command(version, about = "Submit and track test jobs on the job queue service")]
pub struct Cli {
    /// Base URL of the job service
    #[arg(
        long,
        global = true,
        env = "QGJOB_API_URL",
        default_value = DEFAULT_API_URL,
        value_parser = parse_api_url
    )]
    pub api_url: Url,

    /// Request timeout in seconds
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a new job to the job service
    Submit(SubmitArgs),

    /// Check the status of a job
    Status(StatusArgs),

    /// Check that the job service is up
    Health,
}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Organization ID
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub org_id: String,

    /// Application version ID
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub app_version_id: String,

    /// Path to the test file
    #[arg(long = "test", value_name = "PATH", value_parser = NonEmptyStringValueParser::new())]
    pub test_path: String,

    /// Target device type
    #[arg(long, value_enum)]
    pub target: Target,

    /// Job priority (1-10, 10 is highest)
    #[arg(long, default_value_t = DEFAULT_PRIORITY, allow_negative_numbers = true)]
    pub priority: i64,

    /// Maximum number of retries on failure
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES, allow_negative_numbers = true)]
    pub max_retries: i64,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("job").required(true).args(["job_id", "job_id_flag"])))]
pub struct StatusArgs {
    /// The ID of the job to check
    #[arg(value_name = "JOB_ID", value_parser = parse_job_id)]
    pub job_id: Option<String>,

    /// The ID of the job to check (named form)
    #[arg(long = "job-id", value_name = "JOB_ID", value_parser = parse_job_id)]
    pub job_id_flag: Option<String>,
}

/// Job IDs travel as one URL path segment, so `.` and `..` cannot address a job.
fn parse_job_id(raw: &str) -> std::result::Result<String, String> {
    if raw.is_empty() {
        return Err("job ID must not be empty".to_string());
    }
    if !JobStatusQuery::is_addressable(raw) {
        return Err(format!("'{}' is not a valid job ID", raw));
    }
    Ok(raw.to_string())
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Submit(JobSubmissionRequest),
    Status(JobStatusQuery),
    Health,
}

/// A fully validated invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config: ClientConfig,
    pub command: Command,
    pub verbosity: u8,
}

impl From<SubmitArgs> for JobSubmissionRequest {
    fn from(args: SubmitArgs) -> Self {
        JobSubmissionRequest::new(args.org_id, args.app_version_id, args.test_path, args.target)
            .with_priority(args.priority)
            .with_max_retries(args.max_retries)
    }
}

impl From<StatusArgs> for JobStatusQuery {
    fn from(args: StatusArgs) -> Self {
        // The arg group guarantees exactly one of the two is set.
        JobStatusQuery::new(args.job_id.or(args.job_id_flag).unwrap_or_default())
    }
}

impl Cli {
    pub fn into_invocation(self) -> Invocation {
        let config =
            ClientConfig::new(self.api_url).with_timeout(Duration::from_secs(self.timeout));

        let command = match self.command {
            Commands::Submit(args) => Command::Submit(args.into()),
            Commands::Status(args) => Command::Status(args.into()),
            Commands::Health => Command::Health,
        };

        Invocation {
            config,
            command,
            verbosity: self.verbose,
        }
    }
}

/// Parse argv (program name first) into an [`Invocation`].
pub fn parse<I, T>(argv: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(argv)?;
    Ok(cli.into_invocation())
}
