/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Entity. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum EntitySelection {
    #[strum(serialize = "id")]
    Id,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Entity<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> Entity<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        Entity {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "The unique identifier for an entity. Read-only."]
    pub fn id(&self) -> Result<&str, Error> {
        store::required(&self.properties, "id", Value::as_str)
    }
    pub fn set_id(&mut self, val: &str) -> &mut Self {
        store::set(&mut self.properties, "id", val);
        self
    }
}
impl From<Entity<'_>> for Value {
    fn from(val: Entity<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for Entity<'_> {
    const ODATA_TYPE: Option<&'static str> = Some("#microsoft.graph.entity");
    const PROPERTIES: &'static [&'static str] = &["id"];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
