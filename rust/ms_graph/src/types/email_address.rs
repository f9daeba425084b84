/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to EmailAddress. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum EmailAddressSelection {
    #[strum(serialize = "address")]
    Address,
    #[strum(serialize = "name")]
    Name,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct EmailAddress<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> EmailAddress<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        EmailAddress {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "The email address of the person or entity."]
    pub fn address(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "address", Value::as_str)
    }
    pub fn set_address(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "address", val);
        self
    }
    #[doc = "The display name of the person or entity."]
    pub fn name(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "name", Value::as_str)
    }
    pub fn set_name(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "name", val);
        self
    }
}
impl From<EmailAddress<'_>> for Value {
    fn from(val: EmailAddress<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for EmailAddress<'_> {
    const ODATA_TYPE: Option<&'static str> = Some("#microsoft.graph.emailAddress");
    const PROPERTIES: &'static [&'static str] = &["address", "name"];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
