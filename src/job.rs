//! Job types exchanged with the job service

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Default scheduling priority sent when `--priority` is omitted
pub const DEFAULT_PRIORITY: i64 = 5;

/// Default server-side retry budget sent when `--max-retries` is omitted
pub const DEFAULT_MAX_RETRIES: i64 = 3;

/// Documented priority range (1 = lowest, 10 = highest)
pub const PRIORITY_RANGE: std::ops::RangeInclusive<i64> = 1..=10;

/// Execution environment a job runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Local or hosted emulator
    Emulator,
    /// Physical device
    Device,
    /// BrowserStack device farm
    Browserstack,
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Emulator => "emulator",
            Target::Device => "device",
            Target::Browserstack => "browserstack",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /jobs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSubmissionRequest {
    pub org_id: String,
    pub app_version_id: String,
    /// Path to the test definition. Never checked locally.
    pub test_path: String,
    pub target: Target,
    pub priority: i64,
    pub max_retries: i64,
}

impl JobSubmissionRequest {
    pub fn new(
        org_id: impl Into<String>,
        app_version_id: impl Into<String>,
        test_path: impl Into<String>,
        target: Target,
    ) -> Self {
        Self {
            org_id: org_id.into(),
            app_version_id: app_version_id.into(),
            test_path: test_path.into(),
            target,
            priority: DEFAULT_PRIORITY,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_max_retries(mut self, max_retries: i64) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Log hints that fall outside their documented ranges.
    ///
    /// Values are still sent as given; the server owns the bounds.
    pub fn warn_out_of_range(&self) {
        if !PRIORITY_RANGE.contains(&self.priority) {
            warn!(
                priority = self.priority,
                "priority is outside the documented 1-10 range; sending as given"
            );
        }
        if self.max_retries < 0 {
            warn!(
                max_retries = self.max_retries,
                "max retries is negative; sending as given"
            );
        }
    }
}

/// Lookup key for `GET /jobs/{job_id}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatusQuery {
    pub job_id: String,
}

impl JobStatusQuery {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
        }
    }

    /// Whether `job_id` survives as a single URL path segment.
    ///
    /// `.` and `..` are dot-segments and get removed from the path.
    pub fn is_addressable(job_id: &str) -> bool {
        !job_id.is_empty() && job_id != "." && job_id != ".."
    }
}

/// Job as reported by the server.
///
/// Only `job_id` and `status` are read by the client; every other field is
/// kept verbatim in `extra` and shown to the user untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_id: String,
    pub status: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl JobRecord {
    /// Free-form `details` field, when the server sent one
    pub fn details(&self) -> Option<&serde_json::Value> {
        self.extra.get("details")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_wire_keys() {
        let req = JobSubmissionRequest::new("org-1", "app-v2", "tests/login.yaml", Target::Device)
            .with_priority(8)
            .with_max_retries(1);

        let wire = serde_json::to_value(&req).unwrap();
        assert_eq!(
            wire,
            json!({
                "org_id": "org-1",
                "app_version_id": "app-v2",
                "test_path": "tests/login.yaml",
                "target": "device",
                "priority": 8,
                "max_retries": 1
            })
        );
    }

    #[test]
    fn test_submission_defaults() {
        let req = JobSubmissionRequest::new("o", "a", "t", Target::Emulator);
        assert_eq!(req.priority, 5);
        assert_eq!(req.max_retries, 3);
    }

    #[test]
    fn test_target_serializes_lowercase() {
        for (target, name) in [
            (Target::Emulator, "emulator"),
            (Target::Device, "device"),
            (Target::Browserstack, "browserstack"),
        ] {
            assert_eq!(serde_json::to_value(target).unwrap(), json!(name));
            assert_eq!(target.to_string(), name);
        }
    }

    #[test]
    fn test_dot_job_ids_are_not_addressable() {
        assert!(JobStatusQuery::is_addressable("abc123"));
        assert!(JobStatusQuery::is_addressable("..."));
        assert!(JobStatusQuery::is_addressable("a.b"));
        assert!(!JobStatusQuery::is_addressable("."));
        assert!(!JobStatusQuery::is_addressable(".."));
        assert!(!JobStatusQuery::is_addressable(""));
    }

    #[test]
    fn test_record_keeps_unknown_fields() {
        let body = json!({
            "job_id": "abc123",
            "status": "queued",
            "details": "Job enqueued to queue:p5",
            "queue": "queue:p5"
        });

        let record: JobRecord = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(record.job_id, "abc123");
        assert_eq!(record.status, "queued");
        assert_eq!(record.details(), Some(&json!("Job enqueued to queue:p5")));
        assert_eq!(serde_json::to_value(&record).unwrap(), body);
    }

    #[test]
    fn test_record_requires_job_id_and_status() {
        let missing_status = json!({ "job_id": "abc123" });
        assert!(serde_json::from_value::<JobRecord>(missing_status).is_err());

        let missing_id = json!({ "status": "running" });
        assert!(serde_json::from_value::<JobRecord>(missing_id).is_err());
    }
}
