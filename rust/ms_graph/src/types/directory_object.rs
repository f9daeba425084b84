/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to DirectoryObject. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::entity::*;
use crate::types::group::*;
use crate::types::user::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum DirectoryObjectSelection {
    #[strum(serialize = "deletedDateTime")]
    DeletedDateTime,
    #[strum(serialize = "id")]
    Id,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct DirectoryObject<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> DirectoryObject<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        DirectoryObject {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "Date and time when this object was deleted. Always null when the object hasn't been deleted."]
    pub fn deleted_date_time(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "deletedDateTime", Value::as_str)
    }
    pub fn set_deleted_date_time(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "deletedDateTime", val);
        self
    }
    #[doc = "Accessor to inherited properties from `Entity`."]
    pub fn entity(&self) -> Entity<'_> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }
    #[doc = "The concrete type named by `@odata.type`, borrowing this object's properties."]
    pub fn kind(&self) -> DirectoryObjectKind<'_> {
        DirectoryObjectKind::from_properties(Cow::Borrowed(&*self.properties))
    }
    pub fn into_kind(self) -> DirectoryObjectKind<'a> {
        DirectoryObjectKind::from_properties(self.properties)
    }
}
impl From<DirectoryObject<'_>> for Value {
    fn from(val: DirectoryObject<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for DirectoryObject<'_> {
    const ODATA_TYPE: Option<&'static str> = Some("#microsoft.graph.directoryObject");
    const PROPERTIES: &'static [&'static str] = &["deletedDateTime", "id"];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
#[doc = "A `DirectoryObject` resolved to its most derived known type using `@odata.type`. Unknown or missing discriminators resolve to `DirectoryObject` itself."]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectoryObjectKind<'a> {
    Group(Group<'a>),
    User(User<'a>),
    DirectoryObject(DirectoryObject<'a>),
}
impl<'a> DirectoryObjectKind<'a> {
    pub fn from_properties(properties: Cow<'a, Map<String, Value>>) -> Self {
        match properties.get(store::ODATA_TYPE_KEY).and_then(Value::as_str) {
            Some("#microsoft.graph.group") => Self::Group(Group { properties }),
            Some("#microsoft.graph.user") => Self::User(User { properties }),
            _ => Self::DirectoryObject(DirectoryObject { properties }),
        }
    }
}
impl<'de> Deserialize<'de> for DirectoryObjectKind<'_> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let properties = Map::deserialize(deserializer)?;
        Ok(Self::from_properties(Cow::Owned(properties)))
    }
}
