use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::forms::state::{FormAction, FormState};
use crate::forms::submission::{
    endpoint_url, submit, FormDefinition, SubmissionSlot, MESSAGE_VISIBLE_MS,
};
use crate::forms::transport::BrowserTransport;

/// Everything a form component needs to render and drive one form.
pub struct SubmissionForm<F: FormDefinition> {
    pub state: UseReducerHandle<FormState<F>>,
    pub on_submit: Callback<SubmitEvent>,
}

impl<F: FormDefinition> SubmissionForm<F> {
    /// Input handler writing the control's value into `field`.
    pub fn on_input(&self, field: F::Field) -> Callback<InputEvent> {
        let dispatcher = self.state.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = control_value(&e) {
                dispatcher.dispatch(FormAction::Edit(field, value));
            }
        })
    }

    /// Change handler for `<select>` controls, which do not reliably fire `input`.
    pub fn on_change(&self, field: F::Field) -> Callback<Event> {
        let dispatcher = self.state.dispatcher();
        Callback::from(move |e: Event| {
            if let Some(value) = control_value(&e) {
                dispatcher.dispatch(FormAction::Edit(field, value));
            }
        })
    }
}

/// Current value of the form control that fired `e`.
pub fn control_value<E: TargetCast>(e: &E) -> Option<String> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    e.target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
}

#[hook]
pub fn use_submission_form<F>(api_base: AttrValue) -> SubmissionForm<F>
where
    F: FormDefinition,
{
    let state = use_reducer(FormState::<F>::default);
    let slot = (*use_state(SubmissionSlot::default)).clone();
    let clear_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let on_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let fields = state.fields.clone();
            let dispatcher = state.dispatcher();
            let slot = slot.clone();
            let clear_timer = clear_timer.clone();
            let url = endpoint_url(&api_base, F::ENDPOINT);

            spawn_local(async move {
                let dispatch = {
                    let dispatcher = dispatcher.clone();
                    move |action| dispatcher.dispatch(action)
                };
                let Some(settled) = submit(&slot, &BrowserTransport, &url, fields, dispatch).await else {
                    return;
                };

                let ticket = settled.ticket;
                let timeout = Timeout::new(MESSAGE_VISIBLE_MS, move || {
                    dispatcher.dispatch(FormAction::ClearMessage(ticket));
                });
                // dropping the previous Timeout cancels its pending clear
                clear_timer.borrow_mut().replace(timeout);
            });
        })
    };

    SubmissionForm { state, on_submit }
}
