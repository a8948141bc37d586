use std::{
    sync::Arc,
    time::Instant,
};

use eframe::egui::{
    self,
    RichText,
};

use super::{
    syllabus_modal,
    theme::{
        set_theme,
        Theme,
    },
    toast,
    top_bar::TopBar,
};
use crate::{
    core::{
        settings::FormSettings,
        tasks::TaskManager,
        FormError,
    },
    form::{
        analytics::DataLayer,
        FormController,
        FormEvent,
    },
};

const MODULES: [&str; 6] = [
    "Linux & Shell Fundamentals",
    "Git and Branching Workflows",
    "CI/CD Pipelines",
    "Docker & Container Images",
    "Kubernetes in Production",
    "Infrastructure as Code with Terraform",
];

pub struct SyllabusApp {
    controller: FormController<TaskManager>,
    theme: Theme,
}

impl SyllabusApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: FormSettings) -> Result<Self, FormError> {
        let repaint_ctx = cc.egui_ctx.clone();
        let timeout = settings.request_timeout_secs.map(std::time::Duration::from_secs);
        let task_manager = TaskManager::new(settings.endpoint.clone(), timeout)?
            .with_repaint(Arc::new(move || repaint_ctx.request_repaint()));

        let mut controller = FormController::new(settings, task_manager);
        if controller.settings().analytics_enabled {
            controller = controller.with_analytics(Box::new(DataLayer::new()));
        }

        let theme = Theme::velocity();
        set_theme(&cc.egui_ctx, &theme);

        Ok(Self { controller, theme })
    }

    fn landing_page(&self, ui: &mut egui::Ui, events: &mut Vec<FormEvent>) {
        let ctx = ui.ctx().clone();

        egui::ScrollArea::vertical()
            .enable_scrolling(!self.controller.modal().scroll_locked)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(32.0);
                    ui.label(RichText::new("Velocity9 DevOps Bootcamp").size(30.0).strong());
                    ui.label(self.theme.muted(&ctx, "Twelve weeks from first commit to production."));
                    ui.add_space(24.0);

                    // Download trigger: the only way into the modal.
                    let button = egui::Button::new(RichText::new("⬇ Download Syllabus").strong())
                        .fill(self.theme.accent(&ctx))
                        .min_size(egui::vec2(220.0, 40.0));
                    if ui.add(button).clicked() {
                        events.push(FormEvent::Open);
                    }

                    ui.add_space(32.0);
                    ui.label(self.theme.heading(&ctx, "What you'll learn"));
                    ui.add_space(8.0);
                    for module in MODULES {
                        ui.label(format!("• {}", module));
                    }
                });
            });
    }
}

impl eframe::App for SyllabusApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.tick(Instant::now());

        let mut events = Vec::new();

        let download_label = self
            .controller
            .last_download()
            .map(|path| format!("Last saved to {}", path.display()));
        TopBar::show(ctx, download_label);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.landing_page(ui, &mut events);
        });

        events.extend(syllabus_modal::show(ctx, &self.theme, &self.controller));

        if toast::show(ctx, &self.theme, self.controller.notifications().current()) {
            self.controller.dismiss_notification();
        }

        for event in events {
            self.controller.dispatch(event);
        }

        if let Some(wakeup) = self.controller.next_wakeup() {
            ctx.request_repaint_after(wakeup.saturating_duration_since(Instant::now()));
        }
    }
}
