use std::rc::Rc;

use serde::Serialize;
use yew::prelude::Reducible;

use crate::content::WAITLIST_SEED;
use crate::submit::Ack;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WaitlistField {
    FirstName,
    Email,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct WaitlistForm {
    pub first_name: String,
    pub email: String,
}

impl WaitlistForm {
    pub fn set(&mut self, field: WaitlistField, value: String) {
        match field {
            WaitlistField::FirstName => self.first_name = value,
            WaitlistField::Email => self.email = value,
        }
    }
}

pub enum WaitlistAction {
    Update(WaitlistField, String),
    SubmitStarted,
    SubmitResolved(Ack),
    // "Join Another Person" clears the form but keeps the counter
    Reset,
}

#[derive(Clone, PartialEq, Debug)]
pub struct WaitlistState {
    pub form: WaitlistForm,
    pub submitting: bool,
    pub submitted: bool,
    pub count: u32,
}

impl Default for WaitlistState {
    fn default() -> Self {
        Self {
            form: WaitlistForm::default(),
            submitting: false,
            submitted: false,
            count: WAITLIST_SEED,
        }
    }
}

impl Reducible for WaitlistState {
    type Action = WaitlistAction;

    fn reduce(self: Rc<Self>, action: WaitlistAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WaitlistAction::Update(field, value) => next.form.set(field, value),
            WaitlistAction::SubmitStarted => next.submitting = true,
            WaitlistAction::SubmitResolved(_) => {
                next.submitting = false;
                next.submitted = true;
                next.count += 1;
            }
            WaitlistAction::Reset => {
                next.form = WaitlistForm::default();
                next.submitting = false;
                next.submitted = false;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_the_seed() {
        assert_eq!(WaitlistState::default().count, 12_847);
    }

    #[test]
    fn resolved_submission_bumps_the_counter_and_shows_success() {
        let state = Rc::new(WaitlistState::default());
        let before = state.count;
        let state = state.reduce(WaitlistAction::SubmitStarted);
        assert!(state.submitting);
        let state = state.reduce(WaitlistAction::SubmitResolved(Ack));
        assert_eq!(state.count, before + 1);
        assert!(state.submitted);
        assert!(!state.submitting);
    }

    #[test]
    fn update_stores_values_verbatim() {
        let state = Rc::new(WaitlistState::default());
        let state = state.reduce(WaitlistAction::Update(
            WaitlistField::Email,
            "Someone@Example.COM ".to_string(),
        ));
        assert_eq!(state.form.email, "Someone@Example.COM ");
    }

    #[test]
    fn reset_clears_the_form_but_keeps_the_counter() {
        let state = Rc::new(WaitlistState::default());
        let state = state.reduce(WaitlistAction::Update(
            WaitlistField::FirstName,
            "Ada".to_string(),
        ));
        let state = state.reduce(WaitlistAction::SubmitStarted);
        let state = state.reduce(WaitlistAction::SubmitResolved(Ack));
        let bumped = state.count;
        let state = state.reduce(WaitlistAction::Reset);
        assert_eq!(state.count, bumped);
        assert!(state.form.first_name.is_empty());
        assert!(!state.submitted);
    }
}
