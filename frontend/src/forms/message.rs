use yew::prelude::*;

use crate::forms::state::OutcomeMessage;

#[derive(Properties, PartialEq)]
pub struct FormMessageProps {
    pub id: AttrValue,
    pub message: Option<OutcomeMessage>,
}

#[function_component(FormMessage)]
pub fn form_message(props: &FormMessageProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div id={props.id.clone()} class={classes!("form-message", message.class.as_str())}>
                {message.text}
            </div>
        },
        None => html! {
            <div id={props.id.clone()} class="form-message" style="display: none;"></div>
        },
    }
}
