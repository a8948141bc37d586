use std::sync::{
    Arc,
    Mutex,
};

use serde::Serialize;

use super::payload::SubmissionPayload;

pub const SYLLABUS_EVENT: &str = "syllabus_download";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    pub event: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
}

impl AnalyticsEvent {
    pub fn syllabus_download(payload: &SubmissionPayload) -> Self {
        Self {
            event: SYLLABUS_EVENT.to_string(),
            name: payload.name.clone(),
            email: payload.email.clone(),
            mobile: payload.mobile.clone(),
        }
    }
}

/// Fire-and-forget event destination.
pub trait AnalyticsSink: Send {
    fn push(&self, event: AnalyticsEvent);
}

/// Process-wide append-only event queue. Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct DataLayer {
    events: Arc<Mutex<Vec<AnalyticsEvent>>>,
}

impl DataLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl AnalyticsSink for DataLayer {
    fn push(&self, event: AnalyticsEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => tracing::debug!(target: "analytics", "{}", json),
            Err(e) => tracing::debug!(target: "analytics", "Unserializable event: {}", e),
        }

        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_queue() {
        let layer = DataLayer::new();
        let sink: Box<dyn AnalyticsSink> = Box::new(layer.clone());

        let payload = SubmissionPayload {
            name: "Asha Rao".to_string(),
            email: "asha.rao@example.com".to_string(),
            mobile: "+919876543210".to_string(),
            date: "17 Oct 2026, 3:45 pm".to_string(),
            source: "Website Form".to_string(),
            status: "Syllabus Download".to_string(),
        };
        sink.push(AnalyticsEvent::syllabus_download(&payload));

        let events = layer.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event, "syllabus_download");
        assert_eq!(events[0].mobile, "+919876543210");
    }
}
