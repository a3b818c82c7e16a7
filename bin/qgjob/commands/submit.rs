//! Submit command - queue a test job

use crate::style::*;
use anyhow::{Context, Result};
use qgjob::{report, ClientConfig, JobClient, JobSubmissionRequest};

pub async fn run(config: &ClientConfig, req: JobSubmissionRequest) -> Result<()> {
    let client = JobClient::new(config).context("Error submitting job")?;

    let record = client
        .submit_job(&req)
        .await
        .context("Error submitting job")?;

    print_success(&report::submission_report(&record));
    Ok(())
}
