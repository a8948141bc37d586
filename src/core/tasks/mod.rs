pub mod manager;
pub mod types;

pub use manager::TaskManager;
pub use types::{
    SubmissionId,
    TaskResult,
    TaskRunner,
};
