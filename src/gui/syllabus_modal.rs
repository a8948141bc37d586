use eframe::egui::{
    self,
    RichText,
};

use super::theme::Theme;
use crate::{
    core::tasks::TaskRunner,
    form::{
        fields::FIELD_REGISTRY,
        FieldId,
        FieldStatus,
        FieldValue,
        FormController,
        FormEvent,
        ModalView,
    },
};

const MODAL_WIDTH: f32 = 420.0;
const FIELD_SPACING: f32 = 8.0;

/// Renders the open modal and returns the events the user produced.
pub fn show<R: TaskRunner>(
    ctx: &egui::Context,
    theme: &Theme,
    controller: &FormController<R>,
) -> Vec<FormEvent> {
    let mut events = Vec::new();

    if !controller.modal().open {
        return events;
    }

    let modal = egui::Modal::new(egui::Id::new("syllabus_modal")).show(ctx, |ui| {
        ui.set_width(MODAL_WIDTH);

        ui.horizontal(|ui| {
            ui.label(theme.heading(ctx, "Download the DevOps Syllabus"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✕").on_hover_text("Close").clicked() {
                    events.push(FormEvent::Close);
                }
            });
        });
        ui.add_space(FIELD_SPACING);

        match controller.view() {
            ModalView::Form => form_view(ui, theme, controller, &mut events),
            ModalView::Loading => loading_view(ui, theme),
            ModalView::Success => success_view(ui, theme),
            ModalView::Error { message } => error_view(ui, theme, message, &mut events),
        }
    });

    if modal.should_close() {
        events.push(FormEvent::Close);
    }

    events
}

fn form_view<R: TaskRunner>(
    ui: &mut egui::Ui,
    theme: &Theme,
    controller: &FormController<R>,
    events: &mut Vec<FormEvent>,
) {
    let ctx = ui.ctx().clone();
    let fields = controller.fields();

    for spec in &FIELD_REGISTRY {
        let annotation = fields.annotation(spec.id);

        let response = match fields.value(spec.id) {
            FieldValue::Text(mut text) => {
                ui.label(spec.label);
                let hint = match spec.id {
                    FieldId::Name => "Your full name",
                    FieldId::Email => "you@example.com",
                    FieldId::Mobile => "10-digit mobile number",
                    FieldId::Terms => "",
                };

                let frame = match theme.field_stroke(&ctx, annotation.status) {
                    Some(stroke) => egui::Frame::new().stroke(stroke).corner_radius(4.0),
                    None => egui::Frame::new(),
                };
                let response = frame
                    .show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut text)
                                .hint_text(hint)
                                .desired_width(f32::INFINITY),
                        )
                    })
                    .inner;

                if response.changed() {
                    events.push(FormEvent::Input { field: spec.id, value: FieldValue::Text(text) });
                }
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    events.push(FormEvent::Submit);
                }
                response
            }
            FieldValue::Checked(mut checked) => {
                let label = RichText::new(spec.label).color(match annotation.status {
                    FieldStatus::Error => theme.error(&ctx),
                    _ => ui.visuals().text_color(),
                });
                let response = ui.checkbox(&mut checked, label);
                if response.changed() {
                    events.push(FormEvent::Input {
                        field: spec.id,
                        value: FieldValue::Checked(checked),
                    });
                }
                response
            }
        };

        if response.lost_focus() {
            events.push(FormEvent::Blur(spec.id));
        }

        if annotation.show {
            ui.label(RichText::new(&annotation.message).small().color(theme.error(&ctx)));
        }
        ui.add_space(FIELD_SPACING);
    }

    ui.vertical_centered_justified(|ui| {
        let button = egui::Button::new(RichText::new("Download Syllabus").strong())
            .fill(theme.accent(&ctx))
            .min_size(egui::vec2(0.0, 32.0));
        if ui.add(button).clicked() {
            events.push(FormEvent::Submit);
        }
    });
}

fn loading_view(ui: &mut egui::Ui, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.add(egui::Spinner::new().size(32.0));
        ui.add_space(12.0);
        ui.label(theme.muted(ui.ctx(), "Saving your details..."));
        ui.add_space(24.0);
    });
}

fn success_view(ui: &mut egui::Ui, theme: &Theme) {
    let ctx = ui.ctx().clone();
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new("✔").size(36.0).color(theme.success(&ctx)));
        ui.label(RichText::new("Thank you!").size(18.0).strong());
        ui.label(theme.muted(&ctx, "Your syllabus download will start shortly."));
        ui.add_space(24.0);
    });
}

fn error_view(ui: &mut egui::Ui, theme: &Theme, message: &str, events: &mut Vec<FormEvent>) {
    let ctx = ui.ctx().clone();
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(RichText::new("⚠").size(36.0).color(theme.error(&ctx)));
        ui.label(RichText::new("Something went wrong").size(18.0).strong());
        ui.label(RichText::new(message).color(theme.error(&ctx)));
        ui.add_space(12.0);
        if ui.button("Try Again").clicked() {
            events.push(FormEvent::Retry);
        }
        ui.add_space(24.0);
    });
}
