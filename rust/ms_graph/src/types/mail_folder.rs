/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to MailFolder. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::entity::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum MailFolderSelection {
    #[strum(serialize = "childFolderCount")]
    ChildFolderCount,
    #[strum(serialize = "displayName")]
    DisplayName,
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "isHidden")]
    IsHidden,
    #[strum(serialize = "parentFolderId")]
    ParentFolderId,
    #[strum(serialize = "totalItemCount")]
    TotalItemCount,
    #[strum(serialize = "unreadItemCount")]
    UnreadItemCount,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MailFolder<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> MailFolder<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        MailFolder {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "The number of immediate child mailFolders in the current mailFolder."]
    pub fn child_folder_count(&self) -> Result<Option<i32>, Error> {
        store::nullable(&self.properties, "childFolderCount", store::as_i32)
    }
    pub fn set_child_folder_count(&mut self, val: Option<i32>) -> &mut Self {
        store::set(&mut self.properties, "childFolderCount", val);
        self
    }
    #[doc = "The mailFolder's display name."]
    pub fn display_name(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "displayName", Value::as_str)
    }
    pub fn set_display_name(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "displayName", val);
        self
    }
    #[doc = "Accessor to inherited properties from `Entity`."]
    pub fn entity(&self) -> Entity<'_> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }
    #[doc = "Indicates whether the mailFolder is hidden. This property can be set only when creating the folder. Find more information in Hidden mail folders."]
    pub fn is_hidden(&self) -> Result<Option<bool>, Error> {
        store::nullable(&self.properties, "isHidden", Value::as_bool)
    }
    pub fn set_is_hidden(&mut self, val: Option<bool>) -> &mut Self {
        store::set(&mut self.properties, "isHidden", val);
        self
    }
    #[doc = "The unique identifier for the mailFolder's parent mailFolder."]
    pub fn parent_folder_id(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "parentFolderId", Value::as_str)
    }
    pub fn set_parent_folder_id(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "parentFolderId", val);
        self
    }
    #[doc = "The number of items in the mailFolder."]
    pub fn total_item_count(&self) -> Result<Option<i32>, Error> {
        store::nullable(&self.properties, "totalItemCount", store::as_i32)
    }
    pub fn set_total_item_count(&mut self, val: Option<i32>) -> &mut Self {
        store::set(&mut self.properties, "totalItemCount", val);
        self
    }
    #[doc = "The number of items in the mailFolder marked as unread."]
    pub fn unread_item_count(&self) -> Result<Option<i32>, Error> {
        store::nullable(&self.properties, "unreadItemCount", store::as_i32)
    }
    pub fn set_unread_item_count(&mut self, val: Option<i32>) -> &mut Self {
        store::set(&mut self.properties, "unreadItemCount", val);
        self
    }
}
impl From<MailFolder<'_>> for Value {
    fn from(val: MailFolder<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for MailFolder<'_> {
    const ODATA_TYPE: Option<&'static str> = Some("#microsoft.graph.mailFolder");
    const PROPERTIES: &'static [&'static str] = &[
        "childFolderCount",
        "displayName",
        "id",
        "isHidden",
        "parentFolderId",
        "totalItemCount",
        "unreadItemCount",
    ];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
