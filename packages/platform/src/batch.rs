use serde::Serialize;

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, SubMsg, WasmMsg};

use crate::error::{Error, Result};

/// The collaborator calls an operation schedules, in order.
///
/// They execute after the state changes commit; a failure of any of them
/// aborts the whole transaction.
#[must_use]
#[derive(Default)]
#[cfg_attr(
    any(debug_assertions, test, feature = "testing"),
    derive(Debug, PartialEq, Eq)
)]
pub struct Batch {
    msgs: Vec<SubMsg>,
}

impl Batch {
    pub fn schedule_execute_no_reply<M>(mut self, msg: M) -> Self
    where
        M: Into<CosmosMsg>,
    {
        self.msgs.push(SubMsg::new(msg));
        self
    }

    pub fn schedule_execute_wasm_no_reply_no_funds<M>(self, addr: Addr, msg: &M) -> Result<Self>
    where
        M: Serialize + ?Sized,
    {
        to_json_binary(msg)
            .map_err(Error::Serialization)
            .map(|msg_bin| {
                self.schedule_execute_no_reply(WasmMsg::Execute {
                    contract_addr: addr.into(),
                    msg: msg_bin,
                    funds: vec![],
                })
            })
    }

    pub fn merge(mut self, mut other: Batch) -> Self {
        self.msgs.append(&mut other.msgs);
        self
    }

    pub fn len(&self) -> usize {
        self.msgs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.msgs.is_empty()
    }
}

impl From<Batch> for Vec<SubMsg> {
    fn from(batch: Batch) -> Self {
        batch.msgs
    }
}

#[cfg(test)]
mod test {
    use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, SubMsg, WasmMsg};

    use super::Batch;

    fn msg() -> CosmosMsg {
        CosmosMsg::Wasm(WasmMsg::ClearAdmin {
            contract_addr: "".into(),
        })
    }

    #[test]
    fn no_msgs() {
        let b = Batch::default();
        assert_eq!(0, b.len());
        assert!(b.is_empty());
    }

    #[test]
    fn schedule_order() {
        let b = Batch::default()
            .schedule_execute_no_reply(msg())
            .schedule_execute_no_reply(msg());
        assert_eq!(2, b.len());
        assert!(!b.is_empty());
    }

    #[test]
    fn schedule_wasm_execute() {
        let b: crate::error::Result<Batch> = Batch::default()
            .schedule_execute_wasm_no_reply_no_funds(Addr::unchecked("collab"), "payload");

        let msgs: Vec<SubMsg> = b.unwrap().into();
        assert_eq!(
            vec![SubMsg::new(WasmMsg::Execute {
                contract_addr: "collab".into(),
                msg: to_json_binary("payload").unwrap(),
                funds: vec![],
            })],
            msgs
        );
    }

    #[test]
    fn merge() {
        let first = Batch::default().schedule_execute_no_reply(msg());
        let second = Batch::default()
            .schedule_execute_no_reply(msg())
            .schedule_execute_no_reply(msg());
        assert_eq!(3, first.merge(second).len());
    }
}
