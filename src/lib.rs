//! qgjob - client for the test-job queue service
//!
//! Submits automated-test execution jobs (emulator, device or BrowserStack)
//! to a remote job queue and looks up their status.
//!
//! The flow for every invocation is:
//! argv -> [`cli::parse`] -> [`JobClient`] -> [`report`] -> exit code.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod job;
pub mod report;

pub use cli::{parse, Command, Invocation};
pub use client::JobClient;
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{Error, Result};
pub use job::{JobRecord, JobStatusQuery, JobSubmissionRequest, Target};
