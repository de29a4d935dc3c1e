use serde::Serialize;
use yew::prelude::*;

use crate::components::hover::{on_hover_drop, on_hover_lift};
use crate::components::input_hint::{on_blur_hint, on_focus_hint};
use crate::forms::hook::use_submission_form;
use crate::forms::message::FormMessage;
use crate::forms::submission::FormDefinition;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl FormDefinition for ContactFields {
    type Field = ContactField;

    const ENDPOINT: &'static str = "contact";
    const IDLE_LABEL: &'static str = "Send Message";
    const PENDING_LABEL: &'static str = "Sending...";
    const SUCCESS_TEXT: &'static str = "Thank you for your message! We will get back to you soon.";
    const FAILURE_TEXT: &'static str =
        "Sorry, there was an error sending your message. Please try again.";

    fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub api_base: AttrValue,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let form = use_submission_form::<ContactFields>(props.api_base.clone());
    let state = &*form.state;

    html! {
        <form id="contactForm" class="contact-form glass-card" onsubmit={form.on_submit.clone()}>
            <div class="form-group">
                <label for="name">{"Name"}</label>
                <input
                    id="name"
                    type="text"
                    class="form-input"
                    placeholder="Your name"
                    required=true
                    value={state.fields.name.clone()}
                    oninput={form.on_input(ContactField::Name)}
                    onfocus={on_focus_hint()}
                    onblur={on_blur_hint()}
                />
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    type="email"
                    class="form-input"
                    placeholder="you@example.com"
                    required=true
                    value={state.fields.email.clone()}
                    oninput={form.on_input(ContactField::Email)}
                    onfocus={on_focus_hint()}
                    onblur={on_blur_hint()}
                />
            </div>
            <div class="form-group">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    class="form-textarea"
                    rows="5"
                    placeholder="How can we help?"
                    required=true
                    value={state.fields.message.clone()}
                    oninput={form.on_input(ContactField::Message)}
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
            <FormMessage id="contactFormMessage" message={state.message.clone()} />
        </form>
    }
}
