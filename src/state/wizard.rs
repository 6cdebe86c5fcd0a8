use std::rc::Rc;

use serde::Serialize;
use yew::prelude::Reducible;

use crate::submit::Ack;

pub const MAX_STEP: u8 = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PartnerField {
    CompanyName,
    Industry,
    Website,
    ContactName,
    Email,
    Phone,
    Employees,
    Revenue,
    PartnershipType,
    Description,
}

#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct PartnerForm {
    pub company_name: String,
    pub industry: String,
    pub website: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub employees: String,
    pub revenue: String,
    pub partnership_type: String,
    pub description: String,
}

impl PartnerForm {
    // Values are stored verbatim; nothing is trimmed or coerced.
    pub fn set(&mut self, field: PartnerField, value: String) {
        match field {
            PartnerField::CompanyName => self.company_name = value,
            PartnerField::Industry => self.industry = value,
            PartnerField::Website => self.website = value,
            PartnerField::ContactName => self.contact_name = value,
            PartnerField::Email => self.email = value,
            PartnerField::Phone => self.phone = value,
            PartnerField::Employees => self.employees = value,
            PartnerField::Revenue => self.revenue = value,
            PartnerField::PartnershipType => self.partnership_type = value,
            PartnerField::Description => self.description = value,
        }
    }

    pub fn get(&self, field: PartnerField) -> &str {
        match field {
            PartnerField::CompanyName => &self.company_name,
            PartnerField::Industry => &self.industry,
            PartnerField::Website => &self.website,
            PartnerField::ContactName => &self.contact_name,
            PartnerField::Email => &self.email,
            PartnerField::Phone => &self.phone,
            PartnerField::Employees => &self.employees,
            PartnerField::Revenue => &self.revenue,
            PartnerField::PartnershipType => &self.partnership_type,
            PartnerField::Description => &self.description,
        }
    }
}

pub enum PartnerAction {
    Update(PartnerField, String),
    Advance,
    Retreat,
    SubmitStarted,
    SubmitResolved(Ack),
}

#[derive(Clone, PartialEq, Debug)]
pub struct PartnerState {
    pub form: PartnerForm,
    pub step: u8,
    pub submitting: bool,
    pub submitted: bool,
}

impl Default for PartnerState {
    fn default() -> Self {
        Self {
            form: PartnerForm::default(),
            step: 1,
            submitting: false,
            submitted: false,
        }
    }
}

impl Reducible for PartnerState {
    type Action = PartnerAction;

    fn reduce(self: Rc<Self>, action: PartnerAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PartnerAction::Update(field, value) => next.form.set(field, value),
            // Emptiness of required fields is deliberately not checked here;
            // the inputs carry the native `required` attribute and nothing more.
            PartnerAction::Advance => {
                if next.step < MAX_STEP {
                    next.step += 1;
                }
            }
            PartnerAction::Retreat => {
                if next.step > 1 {
                    next.step -= 1;
                }
            }
            PartnerAction::SubmitStarted => next.submitting = true,
            PartnerAction::SubmitResolved(_) => {
                next.submitting = false;
                next.submitted = true;
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: Rc<PartnerState>, action: PartnerAction) -> Rc<PartnerState> {
        state.reduce(action)
    }

    #[test]
    fn starts_on_step_one() {
        assert_eq!(PartnerState::default().step, 1);
    }

    #[test]
    fn retreat_on_first_step_is_a_no_op() {
        let state = dispatch(Rc::new(PartnerState::default()), PartnerAction::Retreat);
        assert_eq!(state.step, 1);
    }

    #[test]
    fn advance_saturates_at_the_last_step() {
        let mut state = Rc::new(PartnerState::default());
        for _ in 0..10 {
            state = dispatch(state, PartnerAction::Advance);
            assert!(state.step >= 1 && state.step <= MAX_STEP);
        }
        assert_eq!(state.step, MAX_STEP);
    }

    #[test]
    fn advance_then_retreat_moves_one_step_at_a_time() {
        let state = Rc::new(PartnerState::default());
        let state = dispatch(state, PartnerAction::Advance);
        assert_eq!(state.step, 2);
        let state = dispatch(state, PartnerAction::Retreat);
        assert_eq!(state.step, 1);
    }

    #[test]
    fn update_stores_the_value_verbatim() {
        let state = dispatch(
            Rc::new(PartnerState::default()),
            PartnerAction::Update(PartnerField::CompanyName, "  Acme Corp  ".to_string()),
        );
        assert_eq!(state.form.get(PartnerField::CompanyName), "  Acme Corp  ");
    }

    #[test]
    fn advance_never_requires_filled_fields() {
        // The source flow trusts native input affordances; state logic must not
        // be stricter than that.
        let state = dispatch(Rc::new(PartnerState::default()), PartnerAction::Advance);
        assert_eq!(state.step, 2);
        assert!(state.form.company_name.is_empty());
    }

    #[test]
    fn submit_lifecycle_flips_the_flags() {
        let state = dispatch(Rc::new(PartnerState::default()), PartnerAction::SubmitStarted);
        assert!(state.submitting);
        assert!(!state.submitted);
        let state = dispatch(state, PartnerAction::SubmitResolved(Ack));
        assert!(!state.submitting);
        assert!(state.submitted);
    }

    #[test]
    fn every_field_is_addressable() {
        let fields = [
            PartnerField::CompanyName,
            PartnerField::Industry,
            PartnerField::Website,
            PartnerField::ContactName,
            PartnerField::Email,
            PartnerField::Phone,
            PartnerField::Employees,
            PartnerField::Revenue,
            PartnerField::PartnershipType,
            PartnerField::Description,
        ];
        let mut form = PartnerForm::default();
        for (i, field) in fields.iter().enumerate() {
            form.set(*field, format!("value-{i}"));
        }
        for (i, field) in fields.iter().enumerate() {
            assert_eq!(form.get(*field), format!("value-{i}"));
        }
    }
}
