/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to InnerError. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum InnerErrorSelection {
    #[strum(serialize = "client-request-id")]
    ClientRequestId,
    #[strum(serialize = "date")]
    Date,
    #[strum(serialize = "request-id")]
    RequestId,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct InnerError<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> InnerError<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        InnerError {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "Client request Id as sent by the client application."]
    pub fn client_request_id(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "client-request-id", Value::as_str)
    }
    pub fn set_client_request_id(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "client-request-id", val);
        self
    }
    #[doc = "Date when the error occured."]
    pub fn date(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "date", Value::as_str)
    }
    pub fn set_date(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "date", val);
        self
    }
    #[doc = "Request Id as tracked internally by the service"]
    pub fn request_id(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "request-id", Value::as_str)
    }
    pub fn set_request_id(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "request-id", val);
        self
    }
}
impl From<InnerError<'_>> for Value {
    fn from(val: InnerError<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for InnerError<'_> {
    const ODATA_TYPE: Option<&'static str> = None;
    const PROPERTIES: &'static [&'static str] = &["client-request-id", "date", "request-id"];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
