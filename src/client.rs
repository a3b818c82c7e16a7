//! HTTP client for the job service
//!
//! Every method performs exactly one request. Nothing is retried and nothing
//! is cached; retries are the server's job, driven by `max_retries`.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::job::{JobRecord, JobStatusQuery, JobSubmissionRequest};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

/// Client for the job service's `/jobs` endpoints
pub struct JobClient {
    base_url: Url,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct HealthResponse {
    message: String,
}

impl JobClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /jobs`
    pub async fn submit_job(&self, req: &JobSubmissionRequest) -> Result<JobRecord> {
        req.warn_out_of_range();

        let url = self.endpoint(&["jobs"])?;
        debug!(
            %url,
            org_id = %req.org_id,
            app_version_id = %req.app_version_id,
            job_target = %req.target,
            priority = req.priority,
            max_retries = req.max_retries,
            "submitting job"
        );

        let response = self
            .client
            .post(url.clone())
            .json(req)
            .send()
            .await
            .map_err(|e| Error::from_reqwest(url.as_str(), e))?;

        let record: JobRecord = read_json(url.as_str(), response).await?;
        info!(job_id = %record.job_id, status = %record.status, "job submitted");
        Ok(record)
    }

    /// `GET /jobs/{job_id}`
    pub async fn get_job_status(&self, query: &JobStatusQuery) -> Result<JobRecord> {
        if !JobStatusQuery::is_addressable(&query.job_id) {
            return Err(Error::Usage(clap::Error::raw(
                clap::error::ErrorKind::ValueValidation,
                format!("'{}' is not a valid job ID\n", query.job_id),
            )));
        }

        let url = self.endpoint(&["jobs", &query.job_id])?;
        debug!(%url, job_id = %query.job_id, "fetching job status");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::from_reqwest(url.as_str(), e))?;

        read_json(url.as_str(), response).await
    }

    /// `GET /` - returns the service's greeting
    pub async fn health(&self) -> Result<String> {
        let url = self.base_url.clone();
        debug!(%url, "checking job service health");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| Error::from_reqwest(url.as_str(), e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::from_reqwest(url.as_str(), e))?;

        if !status.is_success() {
            return Err(Error::from_response(status, &body));
        }

        Ok(serde_json::from_str::<HealthResponse>(&body)
            .map(|h| h.message)
            .unwrap_or_else(|_| body.trim().to_string()))
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("'{}' cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Read a full response and decode it, or turn it into an error.
///
/// The body is read completely before anything is decoded so a failure
/// never leaves a half-printed record behind.
async fn read_json<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::from_reqwest(url, e))?;

    debug!(%status, bytes = body.len(), "job service responded");

    if !status.is_success() {
        return Err(Error::from_response(status, &body));
    }

    serde_json::from_str(&body)
        .map_err(|e| Error::Unexpected(format!("failed to parse response ({}): {}", status, e)))
}
