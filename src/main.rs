use eframe::egui;
use syllabus_form::{
    core::FormSettings,
    gui::SyllabusApp,
};
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("syllabus_form=info")),
        )
        .init();

    let settings = FormSettings::load();
    tracing::info!("Leads go to {}", settings.endpoint);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([520.0, 560.0])
            .with_title("Velocity9 DevOps Syllabus"),
        ..Default::default()
    };

    eframe::run_native(
        "syllabus-form",
        options,
        Box::new(|cc| Ok(Box::new(SyllabusApp::new(cc, settings)?))),
    )
}
