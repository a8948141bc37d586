pub mod errors;
pub mod http;
pub mod scheduler;
pub mod settings;
pub mod tasks;

pub use errors::FormError;
pub use settings::FormSettings;
