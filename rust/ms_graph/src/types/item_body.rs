/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to ItemBody. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::body_type::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum ItemBodySelection {
    #[strum(serialize = "content")]
    Content,
    #[strum(serialize = "contentType")]
    ContentType,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ItemBody<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> ItemBody<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        ItemBody {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "The content of the item."]
    pub fn content(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "content", Value::as_str)
    }
    pub fn set_content(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "content", val);
        self
    }
    #[doc = "The type of the content. Possible values are text and html."]
    pub fn content_type(&self) -> Result<Option<BodyType>, Error> {
        store::nullable(&self.properties, "contentType", store::parse)
    }
    pub fn set_content_type(&mut self, val: Option<BodyType>) -> &mut Self {
        store::set(&mut self.properties, "contentType", val);
        self
    }
}
impl From<ItemBody<'_>> for Value {
    fn from(val: ItemBody<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for ItemBody<'_> {
    const ODATA_TYPE: Option<&'static str> = Some("#microsoft.graph.itemBody");
    const PROPERTIES: &'static [&'static str] = &["content", "contentType"];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
