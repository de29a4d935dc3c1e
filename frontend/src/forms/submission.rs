use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::{error, info, warn};
use serde::Serialize;

use crate::forms::state::{ClearTicket, FormAction};
use crate::forms::transport::Transport;

/// How long an outcome message stays on screen.
pub const MESSAGE_VISIBLE_MS: u32 = 5_000;

/// A form whose fields are posted as one flat JSON object.
///
/// The implementing type is the field set itself: it is edited in place while
/// the user types, serialized as the request body on submit, and replaced by
/// `Default::default()` after a successful submission.
pub trait FormDefinition: Clone + Default + PartialEq + Serialize + 'static {
    type Field: Copy + PartialEq + 'static;

    /// Path under the API base, without a leading slash.
    const ENDPOINT: &'static str;
    const IDLE_LABEL: &'static str;
    const PENDING_LABEL: &'static str;
    const SUCCESS_TEXT: &'static str;
    const FAILURE_TEXT: &'static str;

    fn set(&mut self, field: Self::Field, value: String);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// The request could not be built or sent, or no response arrived.
    Network(String),
    /// A response arrived with a status outside 2xx.
    ServerStatus(u16),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Network(detail) => write!(f, "network error: {}", detail),
            FailureReason::ServerStatus(code) => write!(f, "server responded with status {}", code),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(FailureReason),
}

impl Outcome {
    pub fn from_response(response: Result<u16, String>) -> Self {
        match response {
            Ok(status) if (200..300).contains(&status) => Outcome::Success,
            Ok(status) => Outcome::Failure(FailureReason::ServerStatus(status)),
            Err(detail) => Outcome::Failure(FailureReason::Network(detail)),
        }
    }
}

/// Result of one submission that actually went out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    pub outcome: Outcome,
    pub ticket: ClearTicket,
}

/// Per-form bookkeeping shared by every submit of that form: whether a
/// request is in flight, and the next clear ticket to hand out.
#[derive(Clone, Default)]
pub struct SubmissionSlot {
    in_flight: Rc<Cell<bool>>,
    tickets: Rc<Cell<u64>>,
}

/// Held while a request is in flight. Dropping it reopens the slot.
pub struct InFlight {
    flag: Rc<Cell<bool>>,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl SubmissionSlot {
    pub fn try_begin(&self) -> Option<InFlight> {
        if self.in_flight.replace(true) {
            return None;
        }
        Some(InFlight {
            flag: self.in_flight.clone(),
        })
    }

    pub fn next_ticket(&self) -> ClearTicket {
        let next = self.tickets.get() + 1;
        self.tickets.set(next);
        ClearTicket(next)
    }
}

pub fn endpoint_url(api_base: &str, endpoint: &str) -> String {
    format!("{}/{}", api_base.trim_end_matches('/'), endpoint)
}

/// Runs one submit attempt of `fields` against `url`.
///
/// Emits `Begin` before the request and `Settle` once it resolves. Returns
/// `None` without touching the network when the slot already has a request
/// in flight.
pub async fn submit<F, T, D>(
    slot: &SubmissionSlot,
    transport: &T,
    url: &str,
    fields: F,
    dispatch: D,
) -> Option<Settled>
where
    F: FormDefinition,
    T: Transport,
    D: Fn(FormAction<F>),
{
    let Some(in_flight) = slot.try_begin() else {
        warn!("Ignoring submit to {}: previous request still in flight", url);
        return None;
    };

    dispatch(FormAction::Begin);

    let outcome = Outcome::from_response(transport.post_json(url, &fields).await);
    match &outcome {
        Outcome::Success => info!("Submitted form to {}", url),
        Outcome::Failure(reason) => error!("Form submission to {} failed: {}", url, reason),
    }

    drop(in_flight);
    let ticket = slot.next_ticket();
    dispatch(FormAction::Settle {
        outcome: outcome.clone(),
        ticket,
    });

    Some(Settled { outcome, ticket })
}
