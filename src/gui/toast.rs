use eframe::egui::{
    self,
    Color32,
    RichText,
};

use super::theme::Theme;
use crate::form::{
    Notification,
    NotificationKind,
};

const TOAST_MARGIN: f32 = 16.0;

/// Draws the live notification in the top-right corner. Returns true when
/// the user clicked it away.
pub fn show(ctx: &egui::Context, theme: &Theme, notification: Option<&Notification>) -> bool {
    let Some(notification) = notification else {
        return false;
    };

    let icon = match notification.kind {
        NotificationKind::Success => "✔",
        NotificationKind::Error => "⚠",
    };

    egui::Area::new(egui::Id::new("custom_notification"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-TOAST_MARGIN, TOAST_MARGIN))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(theme.toast_fill(ctx, notification.kind))
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(24, 12))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(icon).color(Color32::WHITE));
                        ui.label(RichText::new(&notification.message).color(Color32::WHITE));
                    });
                })
                .response
                .interact(egui::Sense::click())
                .clicked()
        })
        .inner
}
