/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Recipient. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::email_address::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum RecipientSelection {
    #[strum(serialize = "emailAddress")]
    EmailAddress,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Recipient<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> Recipient<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        Recipient {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "The recipient's email address."]
    pub fn email_address(&self) -> Result<Option<EmailAddress<'_>>, Error> {
        store::nullable(&self.properties, "emailAddress", |v| v.as_object().map(EmailAddress::new))
    }
    pub fn set_email_address(&mut self, val: Option<EmailAddress<'_>>) -> &mut Self {
        store::set(&mut self.properties, "emailAddress", val);
        self
    }
}
impl From<Recipient<'_>> for Value {
    fn from(val: Recipient<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for Recipient<'_> {
    const ODATA_TYPE: Option<&'static str> = Some("#microsoft.graph.recipient");
    const PROPERTIES: &'static [&'static str] = &["emailAddress"];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
