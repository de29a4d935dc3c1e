use std::rc::Rc;
use yew::prelude::*;

use crate::forms::submission::{FormDefinition, Outcome};

/// Interactive state of a form's submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlState {
    Idle,
    Pending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageClass {
    Success,
    Error,
}

impl MessageClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageClass::Success => "success",
            MessageClass::Error => "error",
        }
    }
}

/// Identifies which settled submission a scheduled clear belongs to.
/// Only the ticket of the message currently on screen may clear it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClearTicket(pub(crate) u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeMessage {
    pub text: &'static str,
    pub class: MessageClass,
    pub ticket: ClearTicket,
}

pub enum FormAction<F: FormDefinition> {
    Edit(F::Field, String),
    Begin,
    Settle { outcome: Outcome, ticket: ClearTicket },
    ClearMessage(ClearTicket),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState<F> {
    pub fields: F,
    pub control: ControlState,
    pub message: Option<OutcomeMessage>,
}

impl<F: Default> Default for FormState<F> {
    fn default() -> Self {
        Self {
            fields: F::default(),
            control: ControlState::Idle,
            message: None,
        }
    }
}

impl<F: FormDefinition> FormState<F> {
    pub fn is_pending(&self) -> bool {
        self.control == ControlState::Pending
    }

    pub fn button_label(&self) -> &'static str {
        match self.control {
            ControlState::Idle => F::IDLE_LABEL,
            ControlState::Pending => F::PENDING_LABEL,
        }
    }
}

impl<F: FormDefinition> Reducible for FormState<F> {
    type Action = FormAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => {
                next.fields.set(field, value);
            }
            FormAction::Begin => {
                next.control = ControlState::Pending;
            }
            FormAction::Settle { outcome, ticket } => {
                next.control = ControlState::Idle;
                next.message = Some(match outcome {
                    Outcome::Success => {
                        next.fields = F::default();
                        OutcomeMessage {
                            text: F::SUCCESS_TEXT,
                            class: MessageClass::Success,
                            ticket,
                        }
                    }
                    Outcome::Failure(_) => OutcomeMessage {
                        text: F::FAILURE_TEXT,
                        class: MessageClass::Error,
                        ticket,
                    },
                });
            }
            FormAction::ClearMessage(ticket) => {
                // superseded by a newer outcome, or already cleared
                if next.message.as_ref().map(|m| m.ticket) != Some(ticket) {
                    return self;
                }
                next.message = None;
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::contact::{ContactField, ContactFields};
    use crate::forms::submission::FailureReason;

    fn filled() -> Rc<FormState<ContactFields>> {
        let state = Rc::new(FormState::<ContactFields>::default());
        let state = state.reduce(FormAction::Edit(ContactField::Name, "Ada".into()));
        let state = state.reduce(FormAction::Edit(ContactField::Email, "ada@example.com".into()));
        state.reduce(FormAction::Edit(ContactField::Message, "Hello".into()))
    }

    #[test]
    fn begin_switches_to_pending_label() {
        let state = filled().reduce(FormAction::Begin);
        assert!(state.is_pending());
        assert_eq!(state.button_label(), "Sending...");
    }

    #[test]
    fn success_resets_fields_and_returns_to_idle() {
        let state = filled()
            .reduce(FormAction::Begin)
            .reduce(FormAction::Settle { outcome: Outcome::Success, ticket: ClearTicket(1) });

        assert_eq!(state.control, ControlState::Idle);
        assert_eq!(state.button_label(), "Send Message");
        assert_eq!(state.fields, ContactFields::default());
        let message = state.message.as_ref().unwrap();
        assert_eq!(message.class, MessageClass::Success);
        assert_eq!(message.text, "Thank you for your message! We will get back to you soon.");
    }

    #[test]
    fn failure_keeps_fields_and_returns_to_idle() {
        let before = filled();
        let state = before
            .clone()
            .reduce(FormAction::Begin)
            .reduce(FormAction::Settle {
                outcome: Outcome::Failure(FailureReason::ServerStatus(500)),
                ticket: ClearTicket(1),
            });

        assert_eq!(state.control, ControlState::Idle);
        assert_eq!(state.fields, before.fields);
        assert_eq!(state.message.as_ref().unwrap().class, MessageClass::Error);
    }

    #[test]
    fn stale_ticket_does_not_clear_newer_message() {
        let state = filled()
            .reduce(FormAction::Settle {
                outcome: Outcome::Failure(FailureReason::Network("refused".into())),
                ticket: ClearTicket(1),
            })
            .reduce(FormAction::Settle { outcome: Outcome::Success, ticket: ClearTicket(2) });

        let state = state.reduce(FormAction::ClearMessage(ClearTicket(1)));
        assert_eq!(state.message.as_ref().map(|m| m.ticket), Some(ClearTicket(2)));

        let state = state.reduce(FormAction::ClearMessage(ClearTicket(2)));
        assert!(state.message.is_none());
    }

    #[test]
    fn message_class_names() {
        assert_eq!(MessageClass::Success.as_str(), "success");
        assert_eq!(MessageClass::Error.as_str(), "error");
    }
}
