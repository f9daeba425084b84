/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to ChannelCollectionResponse. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::channel::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum ChannelCollectionResponseSelection {
    #[strum(serialize = "value")]
    Value,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ChannelCollectionResponse<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> ChannelCollectionResponse<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        ChannelCollectionResponse {
            properties: Cow::Borrowed(properties),
        }
    }
    pub fn value(&self) -> Result<Vec<Channel<'_>>, Error> {
        store::collection(&self.properties, "value", |v| v.as_object().map(Channel::new))
    }
    pub fn set_value(&mut self, val: Vec<Channel<'_>>) -> &mut Self {
        store::set(&mut self.properties, "value", val);
        self
    }
}
impl From<ChannelCollectionResponse<'_>> for Value {
    fn from(val: ChannelCollectionResponse<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for ChannelCollectionResponse<'_> {
    const ODATA_TYPE: Option<&'static str> = None;
    const PROPERTIES: &'static [&'static str] = &["value"];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
