/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to MainError. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::o_data_errors::error_details::*;
use crate::types::o_data_errors::inner_error::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum MainErrorSelection {
    #[strum(serialize = "code")]
    Code,
    #[strum(serialize = "details")]
    Details,
    #[strum(serialize = "innerError")]
    InnerError,
    #[strum(serialize = "message")]
    Message,
    #[strum(serialize = "target")]
    Target,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MainError<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> MainError<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        MainError {
            properties: Cow::Borrowed(properties),
        }
    }
    pub fn code(&self) -> Result<&str, Error> {
        store::required(&self.properties, "code", Value::as_str)
    }
    pub fn set_code(&mut self, val: &str) -> &mut Self {
        store::set(&mut self.properties, "code", val);
        self
    }
    pub fn details(&self) -> Result<Vec<ErrorDetails<'_>>, Error> {
        store::collection(&self.properties, "details", |v| v.as_object().map(ErrorDetails::new))
    }
    pub fn set_details(&mut self, val: Vec<ErrorDetails<'_>>) -> &mut Self {
        store::set(&mut self.properties, "details", val);
        self
    }
    pub fn inner_error(&self) -> Result<InnerError<'_>, Error> {
        store::required(&self.properties, "innerError", |v| v.as_object().map(InnerError::new))
    }
    pub fn set_inner_error(&mut self, val: InnerError<'_>) -> &mut Self {
        store::set(&mut self.properties, "innerError", val);
        self
    }
    pub fn message(&self) -> Result<&str, Error> {
        store::required(&self.properties, "message", Value::as_str)
    }
    pub fn set_message(&mut self, val: &str) -> &mut Self {
        store::set(&mut self.properties, "message", val);
        self
    }
    pub fn target(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "target", Value::as_str)
    }
    pub fn set_target(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "target", val);
        self
    }
}
impl From<MainError<'_>> for Value {
    fn from(val: MainError<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for MainError<'_> {
    const ODATA_TYPE: Option<&'static str> = None;
    const PROPERTIES: &'static [&'static str] = &[
        "code",
        "details",
        "innerError",
        "message",
        "target",
    ];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
