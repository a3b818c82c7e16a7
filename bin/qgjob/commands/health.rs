//! Health command - check the job service answers

use crate::style::*;
use anyhow::{Context, Result};
use qgjob::{ClientConfig, JobClient};

pub async fn run(config: &ClientConfig) -> Result<()> {
    let client = JobClient::new(config)?;

    let message = client
        .health()
        .await
        .with_context(|| format!("Job service at {} is not healthy", client.base_url()))?;

    print_success(&format!("{} ({})", message, client.base_url()));
    Ok(())
}
