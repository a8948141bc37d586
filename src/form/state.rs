//! Which region of the modal is visible.
//!
//! Exactly one view is shown at a time; the Error view carries its message so
//! an error label can never be visible without its region.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalView {
    #[default]
    Form,
    Loading,
    Success,
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Fields passed validation, request is about to go out.
    Begin,
    Saved,
    Failed(String),
    Retry,
    /// Modal was closed.
    Reset,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot apply {transition:?} while in {from:?}")]
pub struct InvalidTransition {
    pub from: ModalView,
    pub transition: Transition,
}

impl ModalView {
    pub fn apply(&self, transition: Transition) -> Result<ModalView, InvalidTransition> {
        match (self, transition) {
            (_, Transition::Reset) => Ok(ModalView::Form),
            (ModalView::Form, Transition::Begin) => Ok(ModalView::Loading),
            (ModalView::Loading, Transition::Saved) => Ok(ModalView::Success),
            (ModalView::Loading, Transition::Failed(message)) => Ok(ModalView::Error { message }),
            (ModalView::Error { .. }, Transition::Retry) => Ok(ModalView::Form),
            (from, transition) => Err(InvalidTransition { from: from.clone(), transition }),
        }
    }

    pub fn is_form(&self) -> bool {
        matches!(self, ModalView::Form)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModalView::Form => "form",
            ModalView::Loading => "loading",
            ModalView::Success => "success",
            ModalView::Error { .. } => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path() {
        let view = ModalView::Form.apply(Transition::Begin).unwrap();
        assert_eq!(view, ModalView::Loading);
        assert_eq!(view.apply(Transition::Saved).unwrap(), ModalView::Success);
    }

    #[test]
    fn failure_then_retry_returns_to_form() {
        let view = ModalView::Loading.apply(Transition::Failed("quota exceeded".into())).unwrap();
        assert_eq!(view, ModalView::Error { message: "quota exceeded".to_string() });
        assert_eq!(view.apply(Transition::Retry).unwrap(), ModalView::Form);
    }

    #[test]
    fn second_begin_is_rejected() {
        let err = ModalView::Loading.apply(Transition::Begin).unwrap_err();
        assert_eq!(err.from, ModalView::Loading);
        assert!(ModalView::Success.apply(Transition::Begin).is_err());
        assert!(ModalView::Form.apply(Transition::Retry).is_err());
        assert!(ModalView::Success.apply(Transition::Failed("late".into())).is_err());
    }

    #[test]
    fn reset_works_from_anywhere() {
        for view in [
            ModalView::Form,
            ModalView::Loading,
            ModalView::Success,
            ModalView::Error { message: "x".into() },
        ] {
            assert_eq!(view.apply(Transition::Reset).unwrap(), ModalView::Form);
        }
    }
}
