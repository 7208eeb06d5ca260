use cosmwasm_std::{Event, SubMsg};

use crate::{batch::Batch, emit::Emitter};

/// The outcome of a state-changing operation: scheduled collaborator
/// calls plus the events describing what happened.
#[derive(Default)]
#[cfg_attr(
    any(debug_assertions, test, feature = "testing"),
    derive(Debug, PartialEq)
)]
pub struct Response {
    pub(crate) messages: Vec<SubMsg>,
    pub(crate) events: Vec<Event>,
}

impl Response {
    pub fn messages_only(messages: Batch) -> Self {
        Self {
            messages: messages.into(),
            events: vec![],
        }
    }

    pub fn messages_with_event(messages: Batch, event: Emitter) -> Self {
        Self {
            messages: messages.into(),
            events: vec![event.into()],
        }
    }
}

impl From<Batch> for Response {
    fn from(messages: Batch) -> Self {
        Self::messages_only(messages)
    }
}

impl From<Emitter> for Response {
    fn from(event: Emitter) -> Self {
        Self::messages_with_event(Batch::default(), event)
    }
}
