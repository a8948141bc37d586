//! Drives the syllabus modal: opening and closing it, live validation,
//! submission and everything that follows a stored lead.
//!
//! All state lives on the UI thread. Background work goes through a
//! [`TaskRunner`] and comes back via [`FormController::tick`], which also fires
//! the post-success timers and expires notifications.

use std::{
    collections::HashMap,
    path::PathBuf,
    time::Instant,
};

use chrono::Utc;

use super::{
    analytics::{
        AnalyticsEvent,
        AnalyticsSink,
    },
    download::DownloadRequest,
    fields::{
        FieldId,
        FieldValue,
        FormFields,
    },
    mobile,
    notification::{
        NotificationKind,
        NotificationPresenter,
        SUCCESS_MESSAGE,
    },
    payload::SubmissionPayload,
    state::{
        ModalView,
        Transition,
    },
    validator,
};
use crate::core::{
    scheduler::Scheduler,
    settings::FormSettings,
    tasks::{
        SubmissionId,
        TaskResult,
        TaskRunner,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Open,
    Close,
    Input { field: FieldId, value: FieldValue },
    Blur(FieldId),
    Submit,
    Retry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent(SubmissionId),
    Invalid,
    /// A request is already pending.
    InFlight,
    /// The form view is not showing.
    Ignored,
    /// Moved straight to the Error view.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerAction {
    TriggerDownload { id: SubmissionId, session: u64 },
    CloseAndNotify { id: SubmissionId, session: u64 },
}

struct InFlight {
    id: SubmissionId,
    session: u64,
    payload: SubmissionPayload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: bool,
    pub scroll_locked: bool,
    pub view: ModalView,
}

pub struct FormController<R: TaskRunner> {
    settings: FormSettings,
    runner: R,
    analytics: Option<Box<dyn AnalyticsSink>>,
    fields: FormFields,
    modal: ModalState,
    notifications: NotificationPresenter,
    timers: Scheduler<TimerAction>,
    // Bumped on every open so stale timers can tell the modal was reopened.
    session: u64,
    next_submission: SubmissionId,
    in_flight: Option<InFlight>,
    // Downloads started but not yet announced, with the error if one came back.
    downloads: HashMap<SubmissionId, Option<String>>,
    last_download: Option<PathBuf>,
}

impl<R: TaskRunner> FormController<R> {
    pub fn new(settings: FormSettings, runner: R) -> Self {
        let notifications = NotificationPresenter::new(settings.notification_ttl());
        Self {
            settings,
            runner,
            analytics: None,
            fields: FormFields::default(),
            modal: ModalState::default(),
            notifications,
            timers: Scheduler::new(),
            session: 0,
            next_submission: 1,
            in_flight: None,
            downloads: HashMap::new(),
            last_download: None,
        }
    }

    pub fn with_analytics(mut self, sink: Box<dyn AnalyticsSink>) -> Self {
        self.analytics = Some(sink);
        self
    }

    pub fn dispatch(&mut self, event: FormEvent) {
        match event {
            FormEvent::Open => self.open(),
            FormEvent::Close => self.close(),
            FormEvent::Input { field, value } => self.input(field, value),
            FormEvent::Blur(field) => {
                self.validate(field);
            }
            FormEvent::Submit => {
                self.submit();
            }
            FormEvent::Retry => self.retry(),
        }
    }

    pub fn open(&mut self) {
        if self.modal.open {
            return;
        }
        self.session += 1;
        self.modal.open = true;
        self.modal.scroll_locked = true;

        // A request from an earlier session is still out: this session shows
        // its progress and receives its result.
        if let Some(pending) = &mut self.in_flight {
            pending.session = self.session;
            self.modal.view = ModalView::Loading;
        }
        tracing::debug!("Modal opened (session {})", self.session);
    }

    /// Hides the modal and resets it to an empty form. Safe to call repeatedly.
    pub fn close(&mut self) {
        self.modal.open = false;
        self.modal.scroll_locked = false;
        self.modal.view = ModalView::Form;
        self.fields.reset();
    }

    pub fn input(&mut self, field: FieldId, value: FieldValue) {
        let value = match (field, value) {
            (FieldId::Mobile, FieldValue::Text(raw)) => FieldValue::Text(mobile::normalize(&raw)),
            (_, value) => value,
        };

        self.fields.set(field, value);
        // Runs on every keystroke, so a completed mobile number is marked valid at once.
        self.validate(field);
    }

    pub fn validate(&mut self, field: FieldId) -> bool {
        validator::validate(&mut self.fields, field)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.in_flight.is_some() {
            tracing::debug!("Submit ignored, a request is already pending");
            return SubmitOutcome::InFlight;
        }
        if !self.modal.open || !self.modal.view.is_form() {
            return SubmitOutcome::Ignored;
        }
        if !validator::validate_all(&mut self.fields) {
            return SubmitOutcome::Invalid;
        }

        self.transition(Transition::Begin);

        let payload = match SubmissionPayload::build(&self.fields, &self.settings, Utc::now()) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Could not build submission: {}", e);
                self.transition(Transition::Failed(e.user_message()));
                return SubmitOutcome::Failed;
            }
        };

        let id = self.next_submission;
        self.next_submission += 1;

        self.runner.submit_lead(id, payload.clone());
        self.in_flight = Some(InFlight { id, session: self.session, payload });

        SubmitOutcome::Sent(id)
    }

    /// Hides the Error view and shows the form with its previous values.
    pub fn retry(&mut self) {
        if !self.transition(Transition::Retry) {
            tracing::debug!("Retry ignored outside the Error view");
        }
    }

    pub fn tick(&mut self, now: Instant) {
        for result in self.runner.poll_results() {
            self.handle_result(result, now);
        }

        for action in self.timers.take_due(now) {
            self.fire(action, now);
        }

        self.notifications.tick(now);
    }

    fn handle_result(&mut self, result: TaskResult, now: Instant) {
        match result {
            TaskResult::Submission { id, result } => {
                let in_flight = match self.in_flight.take() {
                    Some(pending) if pending.id == id => pending,
                    other => {
                        self.in_flight = other;
                        tracing::warn!("Ignoring result for unknown submission #{}", id);
                        return;
                    }
                };

                let current = self.modal.open && in_flight.session == self.session;
                match result {
                    Ok(_) => self.on_saved(in_flight, current, now),
                    Err(message) => self.on_failed(message, current, now),
                }
            }
            TaskResult::Download { result: Ok(path), .. } => {
                self.last_download = Some(path);
            }
            TaskResult::Download { id, result: Err(message) } => {
                match self.downloads.get_mut(&id) {
                    Some(error) => *error = Some(message),
                    None => self.notifications.show(message, NotificationKind::Error, now),
                }
            }
        }
    }

    fn on_saved(&mut self, in_flight: InFlight, current: bool, now: Instant) {
        tracing::info!("Lead #{} stored", in_flight.id);

        if current {
            self.transition(Transition::Saved);
        }

        if self.settings.analytics_enabled {
            if let Some(sink) = &self.analytics {
                sink.push(AnalyticsEvent::syllabus_download(&in_flight.payload));
            }
        }

        self.timers.schedule(
            now,
            self.settings.download_delay(),
            TimerAction::TriggerDownload { id: in_flight.id, session: in_flight.session },
        );
    }

    fn on_failed(&mut self, message: String, current: bool, now: Instant) {
        if current {
            self.transition(Transition::Failed(message));
        } else {
            self.notifications.show(message, NotificationKind::Error, now);
        }
    }

    fn fire(&mut self, action: TimerAction, now: Instant) {
        match action {
            TimerAction::TriggerDownload { id, session } => {
                self.downloads.insert(id, None);
                self.runner.download(
                    id,
                    DownloadRequest {
                        asset: self.settings.asset.clone(),
                        target: self.settings.download_target(),
                    },
                );
                self.timers.schedule(
                    now,
                    self.settings.close_delay(),
                    TimerAction::CloseAndNotify { id, session },
                );
            }
            TimerAction::CloseAndNotify { id, session } => {
                if session == self.session {
                    self.close();
                }

                match self.downloads.remove(&id).flatten() {
                    Some(message) => self.notifications.show(message, NotificationKind::Error, now),
                    None => self.notifications.show(SUCCESS_MESSAGE, NotificationKind::Success, now),
                }
            }
        }
    }

    fn transition(&mut self, transition: Transition) -> bool {
        match self.modal.view.apply(transition) {
            Ok(view) => {
                tracing::debug!("Modal view {} -> {}", self.modal.view.name(), view.name());
                self.modal.view = view;
                true
            }
            Err(e) => {
                tracing::debug!("{}", e);
                false
            }
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn view(&self) -> &ModalView {
        &self.modal.view
    }

    pub fn notifications(&self) -> &NotificationPresenter {
        &self.notifications
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.dismiss();
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn last_download(&self) -> Option<&PathBuf> {
        self.last_download.as_ref()
    }

    pub fn settings(&self) -> &FormSettings {
        &self.settings
    }

    /// Earliest moment a timer or notification needs attention.
    pub fn next_wakeup(&self) -> Option<Instant> {
        match (self.timers.next_due(), self.notifications.next_due()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn runner_mut(&mut self) -> &mut R {
        &mut self.runner
    }
}
