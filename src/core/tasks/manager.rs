use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
    time::Duration,
};

use reqwest::Client;
use tokio::runtime::Runtime;

use super::types::{
    SubmissionId,
    TaskResult,
    TaskRunner,
};
use crate::{
    core::{
        http::{
            storage_client,
            submit_lead,
        },
        FormError,
    },
    form::{
        download::{
            deliver,
            DownloadRequest,
        },
        payload::SubmissionPayload,
    },
};

pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

pub struct TaskManager {
    runtime: Arc<Runtime>,
    client: Client,
    endpoint: String,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    repaint: Option<RepaintHook>,
}

impl TaskManager {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, FormError> {
        let runtime = Arc::new(Runtime::new()?);
        let client = storage_client(timeout)?;
        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, client, endpoint: endpoint.into(), receiver, sender, repaint: None })
    }

    /// Called after every result is sent so the UI wakes up to poll.
    pub fn with_repaint(mut self, repaint: RepaintHook) -> Self {
        self.repaint = Some(repaint);
        self
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Option<RepaintHook>) {
        (self.sender.clone(), self.repaint.clone())
    }
}

fn send(sender: &mpsc::Sender<TaskResult>, repaint: &Option<RepaintHook>, result: TaskResult) {
    let task_type = result.task_type();
    if sender.send(result).is_err() {
        tracing::debug!("Dropped {} result, receiver is gone", task_type);
    }
    if let Some(repaint) = repaint {
        repaint();
    }
}

impl TaskRunner for TaskManager {
    fn submit_lead(&self, id: SubmissionId, payload: SubmissionPayload) {
        let (sender, repaint) = self.task_context();
        let runtime = self.runtime.clone();
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        thread::spawn(move || {
            tracing::info!(
                "Submitting lead #{} ({}) to storage",
                id,
                payload.email_domain()
            );

            let result = runtime
                .block_on(async { submit_lead(&client, &endpoint, &payload).await })
                .map_err(|e| {
                    tracing::error!("Storage error: {}", e);
                    e.user_message()
                });

            send(&sender, &repaint, TaskResult::Submission { id, result });
        });
    }

    fn download(&self, id: SubmissionId, request: DownloadRequest) {
        let (sender, repaint) = self.task_context();

        thread::spawn(move || {
            let result = deliver(&request).map_err(|e| {
                tracing::warn!("Syllabus download for lead #{} failed: {}", id, e);
                e.to_string()
            });

            send(&sender, &repaint, TaskResult::Download { id, result });
        });
    }

    fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn wait_for(manager: &mut TaskManager) -> TaskResult {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(result) = manager.poll_results().into_iter().next() {
                return result;
            }
            assert!(Instant::now() < deadline, "task did not finish");
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn submission_result_comes_back_through_poll() {
        let mut server = mockito::Server::new();
        server.mock("POST", "/").with_status(201).with_body(r#"{"created":1}"#).create();

        let mut manager = TaskManager::new(server.url(), None).unwrap();
        let payload = SubmissionPayload {
            name: "Asha Rao".to_string(),
            email: "asha.rao@example.com".to_string(),
            mobile: "+919876543210".to_string(),
            date: "17 Oct 2026, 3:45 pm".to_string(),
            source: "Website Form".to_string(),
            status: "Syllabus Download".to_string(),
        };
        manager.submit_lead(7, payload);

        match wait_for(&mut manager) {
            TaskResult::Submission { id, result } => {
                assert_eq!(id, 7);
                assert_eq!(result.unwrap()["created"], 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn download_failure_is_stringified() {
        let dir = tempfile::tempdir().unwrap();
        let mut manager = TaskManager::new("http://127.0.0.1:9/", None).unwrap();
        manager.download(
            3,
            DownloadRequest {
                asset: dir.path().join("missing.pdf").to_string_lossy().into_owned(),
                target: dir.path().join("copy.pdf"),
            },
        );

        match wait_for(&mut manager) {
            TaskResult::Download { id, result: Err(message) } => {
                assert_eq!(id, 3);
                assert!(message.contains("not found"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
