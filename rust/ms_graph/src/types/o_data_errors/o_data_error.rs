/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to ODataError. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::o_data_errors::main_error::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum ODataErrorSelection {
    #[strum(serialize = "error")]
    Error,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ODataError<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> ODataError<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        ODataError {
            properties: Cow::Borrowed(properties),
        }
    }
    pub fn error(&self) -> Result<MainError<'_>, Error> {
        store::required(&self.properties, "error", |v| v.as_object().map(MainError::new))
    }
    pub fn set_error(&mut self, val: MainError<'_>) -> &mut Self {
        store::set(&mut self.properties, "error", val);
        self
    }
}
impl From<ODataError<'_>> for Value {
    fn from(val: ODataError<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for ODataError<'_> {
    const ODATA_TYPE: Option<&'static str> = None;
    const PROPERTIES: &'static [&'static str] = &["error"];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
