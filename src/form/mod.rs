pub mod analytics;
pub mod controller;
pub mod download;
pub mod fields;
pub mod mobile;
pub mod notification;
pub mod payload;
pub mod state;
pub mod validator;

pub use controller::{
    FormController,
    FormEvent,
    ModalState,
    SubmitOutcome,
};
pub use fields::{
    FieldId,
    FieldStatus,
    FieldValue,
    FormFields,
};
pub use notification::{
    Notification,
    NotificationKind,
};
pub use state::ModalView;
