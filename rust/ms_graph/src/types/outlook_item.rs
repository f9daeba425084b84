/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to OutlookItem. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::entity::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum OutlookItemSelection {
    #[strum(serialize = "categories")]
    Categories,
    #[strum(serialize = "changeKey")]
    ChangeKey,
    #[strum(serialize = "createdDateTime")]
    CreatedDateTime,
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "lastModifiedDateTime")]
    LastModifiedDateTime,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct OutlookItem<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> OutlookItem<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        OutlookItem {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "The categories associated with the item."]
    pub fn categories(&self) -> Result<Vec<&str>, Error> {
        store::collection(&self.properties, "categories", Value::as_str)
    }
    pub fn set_categories(&mut self, val: &[&str]) -> &mut Self {
        store::set(&mut self.properties, "categories", val);
        self
    }
    #[doc = "Identifies the version of the item. Every time the item is changed, changeKey changes as well. This allows Exchange to apply changes to the correct version of the object. Read-only."]
    pub fn change_key(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "changeKey", Value::as_str)
    }
    pub fn set_change_key(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "changeKey", val);
        self
    }
    #[doc = "The Timestamp type represents date and time information using ISO 8601 format and is always in UTC. For example, midnight UTC on Jan 1, 2014 is 2014-01-01T00:00:00Z."]
    pub fn created_date_time(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "createdDateTime", Value::as_str)
    }
    pub fn set_created_date_time(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "createdDateTime", val);
        self
    }
    #[doc = "Accessor to inherited properties from `Entity`."]
    pub fn entity(&self) -> Entity<'_> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }
    #[doc = "The Timestamp type represents date and time information using ISO 8601 format and is always in UTC. For example, midnight UTC on Jan 1, 2014 is 2014-01-01T00:00:00Z."]
    pub fn last_modified_date_time(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "lastModifiedDateTime", Value::as_str)
    }
    pub fn set_last_modified_date_time(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "lastModifiedDateTime", val);
        self
    }
}
impl From<OutlookItem<'_>> for Value {
    fn from(val: OutlookItem<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for OutlookItem<'_> {
    const ODATA_TYPE: Option<&'static str> = Some("#microsoft.graph.outlookItem");
    const PROPERTIES: &'static [&'static str] = &[
        "categories",
        "changeKey",
        "createdDateTime",
        "id",
        "lastModifiedDateTime",
    ];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
