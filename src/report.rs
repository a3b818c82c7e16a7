//! Plain-text rendering of job records
//!
//! The binary adds colors on top; these functions stay plain so the text
//! can be asserted on.

use crate::job::JobRecord;

/// Confirmation line printed after a successful submission
pub fn submission_summary(record: &JobRecord) -> String {
    format!(
        "Job submitted successfully! Job ID: {} (status: {})",
        record.job_id, record.status
    )
}

/// Headline printed for a status lookup
pub fn status_summary(record: &JobRecord) -> String {
    format!("Status for job {}: {}", record.job_id, record.status)
}

/// The full record as indented JSON
pub fn record_json(record: &JobRecord) -> String {
    // A map of strings to JSON values always serializes.
    serde_json::to_string_pretty(record).unwrap_or_else(|_| format!("{:?}", record))
}

/// Summary line followed by the full record
pub fn submission_report(record: &JobRecord) -> String {
    format!("{}\n{}", submission_summary(record), record_json(record))
}

/// Summary line followed by the full record
pub fn status_report(record: &JobRecord) -> String {
    format!("{}\n{}", status_summary(record), record_json(record))
}
