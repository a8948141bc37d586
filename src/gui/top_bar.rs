use eframe::egui::{
    self,
    containers,
    RichText,
};

pub struct TopBar;

impl TopBar {
    pub fn show(ctx: &egui::Context, download_label: Option<String>) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                egui::widgets::global_theme_preference_switch(ui);
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.add_space(16.0);
                ui.label(RichText::new("Velocity9").strong());

                if let Some(label) = download_label {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(label).small());
                    });
                }
            });
        });
    }
}
