use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;
use yew::prelude::*;

use crate::components::hover::{on_hover_drop, on_hover_lift};
use crate::components::input_hint::{on_blur_hint, on_focus_hint};
use crate::forms::hook::use_submission_form;
use crate::forms::message::FormMessage;
use crate::forms::submission::FormDefinition;

/// Class types offered in the registration select, as `(value, label)`.
pub const CLASS_TYPES: &[(&str, &str)] = &[
    ("baking-basics", "Baking Basics"),
    ("pastry", "Pastry Masterclass"),
    ("latte-art", "Coffee & Latte Art"),
    ("private", "Private Group Session"),
];

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub class_type: String,
    pub preferred_date: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistrationField {
    FullName,
    Email,
    Phone,
    ClassType,
    PreferredDate,
    Message,
}

impl FormDefinition for RegistrationFields {
    type Field = RegistrationField;

    const ENDPOINT: &'static str = "registrations";
    const IDLE_LABEL: &'static str = "Register Now";
    const PENDING_LABEL: &'static str = "Submitting...";
    const SUCCESS_TEXT: &'static str =
        "Registration successful! We will contact you shortly to confirm your class details.";
    const FAILURE_TEXT: &'static str =
        "Sorry, there was an error submitting your registration. Please try again.";

    fn set(&mut self, field: RegistrationField, value: String) {
        match field {
            RegistrationField::FullName => self.full_name = value,
            RegistrationField::Email => self.email = value,
            RegistrationField::Phone => self.phone = value,
            RegistrationField::ClassType => self.class_type = value,
            RegistrationField::PreferredDate => self.preferred_date = value,
            RegistrationField::Message => self.message = value,
        }
    }
}

/// Earliest bookable date: the day after `today`, formatted for `<input type="date">`.
pub fn earliest_class_date(today: NaiveDate) -> String {
    (today + Duration::days(1)).format("%Y-%m-%d").to_string()
}

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    pub api_base: AttrValue,
}

#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let form = use_submission_form::<RegistrationFields>(props.api_base.clone());
    let state = &*form.state;
    let min_date = use_memo(|_| earliest_class_date(Utc::now().date_naive()), ());

    html! {
        <form id="registrationForm" class="registration-form glass-card" onsubmit={form.on_submit.clone()}>
            <div class="form-row">
                <div class="form-group">
                    <label for="fullName">{"Full Name"}</label>
                    <input
                        id="fullName"
                        type="text"
                        class="form-input"
                        required=true
                        value={state.fields.full_name.clone()}
                        oninput={form.on_input(RegistrationField::FullName)}
                        onfocus={on_focus_hint()}
                        onblur={on_blur_hint()}
                    />
                </div>
                <div class="form-group">
                    <label for="regEmail">{"Email"}</label>
                    <input
                        id="regEmail"
                        type="email"
                        class="form-input"
                        required=true
                        value={state.fields.email.clone()}
                        oninput={form.on_input(RegistrationField::Email)}
                        onfocus={on_focus_hint()}
                        onblur={on_blur_hint()}
                    />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="phone">{"Phone"}</label>
                    <input
                        id="phone"
                        type="tel"
                        class="form-input"
                        required=true
                        value={state.fields.phone.clone()}
                        oninput={form.on_input(RegistrationField::Phone)}
                        onfocus={on_focus_hint()}
                        onblur={on_blur_hint()}
                    />
                </div>
                <div class="form-group">
                    <label for="classType">{"Class"}</label>
                    <select
                        id="classType"
                        class="form-select"
                        required=true
                        onchange={form.on_change(RegistrationField::ClassType)}
                        onfocus={on_focus_hint()}
                        onblur={on_blur_hint()}
                    >
                        <option value="" selected={state.fields.class_type.is_empty()}>
                            {"Select a class"}
                        </option>
                        { for CLASS_TYPES.iter().map(|(value, label)| html! {
                            <option value={*value} selected={state.fields.class_type == *value}>
                                {*label}
                            </option>
                        }) }
                    </select>
                </div>
            </div>
            <div class="form-group">
                <label for="preferredDate">{"Preferred Date"}</label>
                <input
                    id="preferredDate"
                    type="date"
                    class="form-input"
                    required=true
                    min={(*min_date).clone()}
                    value={state.fields.preferred_date.clone()}
                    oninput={form.on_input(RegistrationField::PreferredDate)}
                    onfocus={on_focus_hint()}
                    onblur={on_blur_hint()}
                />
            </div>
            <div class="form-group">
                <label for="regMessage">{"Anything we should know?"}</label>
                <textarea
                    id="regMessage"
                    class="form-textarea"
                    rows="4"
                    value={state.fields.message.clone()}
                    oninput={form.on_input(RegistrationField::Message)}
                    onfocus={on_focus_hint()}
                    onblur={on_blur_hint()}
                />
            </div>
            <button
                type="submit"
                class="btn-glass"
                disabled={state.is_pending()}
                onmouseenter={on_hover_lift()}
                onmouseleave={on_hover_drop()}
            >
                {state.button_label()}
            </button>
            <FormMessage id="registrationFormMessage" message={state.message.clone()} />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earliest_date_is_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(earliest_class_date(today), "2026-10-20");
    }

    #[test]
    fn earliest_date_rolls_over_year_end() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(earliest_class_date(today), "2027-01-01");
    }

    #[test]
    fn payload_keys_use_camel_case() {
        let body = serde_json::to_value(RegistrationFields::default()).unwrap();
        let mut keys: Vec<_> = body.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            ["classType", "email", "fullName", "message", "phone", "preferredDate"]
        );
    }

    #[test]
    fn class_type_values_are_unique() {
        let mut values: Vec<_> = CLASS_TYPES.iter().map(|(value, _)| *value).collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), CLASS_TYPES.len());
    }
}
