use serde::Serialize;

use cosmwasm_std::{to_json_binary, Response as CwResponse};

use crate::{
    error::{self, Error},
    message::Response as MessageResponse,
};

pub fn empty_response() -> CwResponse {
    response_only_messages(MessageResponse::default())
}

pub fn response<T, E>(response: T) -> Result<CwResponse, E>
where
    T: Serialize,
    error::Error: Into<E>,
{
    response_with_messages(response, MessageResponse::default())
}

pub fn response_only_messages<M>(messages: M) -> CwResponse
where
    M: Into<MessageResponse>,
{
    let MessageResponse { messages, events } = messages.into();

    let cw_resp: CwResponse = messages
        .into_iter()
        .fold(Default::default(), CwResponse::add_submessage);

    events.into_iter().fold(cw_resp, CwResponse::add_event)
}

pub fn response_with_messages<T, M, E>(response: T, messages: M) -> Result<CwResponse, E>
where
    T: Serialize,
    error::Error: Into<E>,
    M: Into<MessageResponse>,
{
    to_json_binary(&response)
        .map_err(Error::Serialization)
        .map_err(Into::into)
        .map(|resp_bin| response_only_messages(messages).set_data(resp_bin))
}

#[cfg(test)]
mod test {
    use cosmwasm_std::{CosmosMsg, Event, Response, WasmMsg};

    use crate::{
        batch::Batch,
        emit::{Emit, Emitter},
        message::Response as MessageResponse,
    };

    const TY1: &str = "E_TYPE";
    const KEY1: &str = "my_event_key";
    const KEY2: &str = "my_other_event_key";
    const VALUE1: &str = "my_event_value";
    const VALUE2: &str = "my_other_event_value";

    #[test]
    fn no_events() {
        let resp: Response = super::response_only_messages(MessageResponse::messages_only(
            Batch::default().schedule_execute_no_reply(CosmosMsg::Wasm(WasmMsg::ClearAdmin {
                contract_addr: "".to_string(),
            })),
        ));
        assert_eq!(1, resp.messages.len());
        assert_eq!(0, resp.attributes.len());
        assert_eq!(0, resp.events.len());
        assert_eq!(None, resp.data);
    }

    #[test]
    fn emit() {
        let e = Emitter::of_type(TY1).emit(KEY1, VALUE1);
        let resp: Response = super::response_only_messages(e);
        assert_eq!(1, resp.events.len());
        let exp = Event::new(TY1).add_attribute(KEY1, VALUE1);
        assert_eq!(exp, resp.events[0]);
        assert_eq!(0, resp.messages.len());
        assert_eq!(None, resp.data);
    }

    #[test]
    fn emit_two_attrs() {
        let emitter = Emitter::of_type(TY1).emit(KEY1, VALUE1).emit(KEY2, VALUE2);
        let resp: Response = super::response_only_messages(emitter);
        assert_eq!(1, resp.events.len());
        let exp = Event::new(TY1)
            .add_attribute(KEY1, VALUE1)
            .add_attribute(KEY2, VALUE2);
        assert_eq!(exp, resp.events[0]);
    }

    #[test]
    fn data_set() {
        let resp: Result<Response, crate::error::Error> =
            super::response(42u64);
        let resp = resp.unwrap();
        assert!(resp.data.is_some());
        assert_eq!(0, resp.messages.len());
    }
}
