//! Status command - look up a job by ID

use crate::style::*;
use anyhow::{Context, Result};
use qgjob::{report, ClientConfig, JobClient, JobStatusQuery};

pub async fn run(config: &ClientConfig, query: JobStatusQuery) -> Result<()> {
    let client = JobClient::new(config).context("Error fetching job status")?;

    let record = client
        .get_job_status(&query)
        .await
        .context("Error fetching job status")?;

    println!(
        "{} {}",
        icon_status(&record.status),
        report::status_report(&record)
    );
    Ok(())
}
