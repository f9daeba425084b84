/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to MessageCollectionResponse. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::message::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum MessageCollectionResponseSelection {
    #[strum(serialize = "value")]
    Value,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MessageCollectionResponse<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> MessageCollectionResponse<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        MessageCollectionResponse {
            properties: Cow::Borrowed(properties),
        }
    }
    pub fn value(&self) -> Result<Vec<Message<'_>>, Error> {
        store::collection(&self.properties, "value", |v| v.as_object().map(Message::new))
    }
    pub fn set_value(&mut self, val: Vec<Message<'_>>) -> &mut Self {
        store::set(&mut self.properties, "value", val);
        self
    }
}
impl From<MessageCollectionResponse<'_>> for Value {
    fn from(val: MessageCollectionResponse<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for MessageCollectionResponse<'_> {
    const ODATA_TYPE: Option<&'static str> = None;
    const PROPERTIES: &'static [&'static str] = &["value"];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
