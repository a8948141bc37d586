pub mod app;
pub mod syllabus_modal;
pub mod theme;
pub mod toast;
pub mod top_bar;

pub use app::SyllabusApp;
