use std::time::{
    Duration,
    Instant,
};

use crate::core::scheduler::{
    Scheduler,
    TimerId,
};

pub const SUCCESS_MESSAGE: &str =
    "✅ Syllabus downloaded successfully! Check your downloads folder.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

struct Live {
    notification: Notification,
    seq: usize,
    timer: TimerId,
}

/// Holds at most one toast and removes it after `ttl`.
pub struct NotificationPresenter {
    ttl: Duration,
    live: Option<Live>,
    timers: Scheduler<usize>,
    shown: usize,
}

impl NotificationPresenter {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, live: None, timers: Scheduler::new(), shown: 0 }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.dismiss();

        let notification = Notification { message: message.into(), kind };
        tracing::debug!("Notification ({:?}): {}", kind, notification.message);

        let seq = self.shown;
        let timer = self.timers.schedule(now, self.ttl, seq);
        self.live = Some(Live { notification, seq, timer });
        self.shown += 1;
    }

    pub fn tick(&mut self, now: Instant) {
        for expired in self.timers.take_due(now) {
            if self.live.as_ref().is_some_and(|live| live.seq == expired) {
                self.live = None;
            }
        }
    }

    pub fn dismiss(&mut self) {
        if let Some(live) = self.live.take() {
            self.timers.cancel(live.timer);
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.live.as_ref().map(|live| &live.notification)
    }

    /// Number of notifications presented so far.
    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.timers.next_due()
    }
}
