use std::path::PathBuf;

use serde_json::Value;

use crate::form::{
    download::DownloadRequest,
    payload::SubmissionPayload,
};

pub type SubmissionId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum TaskResult {
    Submission { id: SubmissionId, result: Result<Value, String> },
    Download { id: SubmissionId, result: Result<PathBuf, String> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::Submission { .. } => "submission",
            TaskResult::Download { .. } => "download",
        }
    }
}

/// Background work the form controller hands off.
pub trait TaskRunner {
    fn submit_lead(&self, id: SubmissionId, payload: SubmissionPayload);
    /// `id` is the stored lead the download follows.
    fn download(&self, id: SubmissionId, request: DownloadRequest);
    fn poll_results(&mut self) -> Vec<TaskResult>;
}
