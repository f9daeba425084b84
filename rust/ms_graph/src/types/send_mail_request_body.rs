/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to SendMailRequestBody. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::message::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum SendMailRequestBodySelection {
    #[strum(serialize = "Message")]
    Message,
    #[strum(serialize = "SaveToSentItems")]
    SaveToSentItems,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SendMailRequestBody<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> SendMailRequestBody<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        SendMailRequestBody {
            properties: Cow::Borrowed(properties),
        }
    }
    pub fn message(&self) -> Result<Message<'_>, Error> {
        store::required(&self.properties, "Message", |v| v.as_object().map(Message::new))
    }
    pub fn set_message(&mut self, val: Message<'_>) -> &mut Self {
        store::set(&mut self.properties, "Message", val);
        self
    }
    pub fn save_to_sent_items(&self) -> Result<Option<bool>, Error> {
        store::nullable(&self.properties, "SaveToSentItems", Value::as_bool)
    }
    pub fn set_save_to_sent_items(&mut self, val: Option<bool>) -> &mut Self {
        store::set(&mut self.properties, "SaveToSentItems", val);
        self
    }
}
impl From<SendMailRequestBody<'_>> for Value {
    fn from(val: SendMailRequestBody<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for SendMailRequestBody<'_> {
    const ODATA_TYPE: Option<&'static str> = None;
    const PROPERTIES: &'static [&'static str] = &["Message", "SaveToSentItems"];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
