/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Group. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::directory_object::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum GroupSelection {
    #[strum(serialize = "classification")]
    Classification,
    #[strum(serialize = "createdDateTime")]
    CreatedDateTime,
    #[strum(serialize = "deletedDateTime")]
    DeletedDateTime,
    #[strum(serialize = "description")]
    Description,
    #[strum(serialize = "displayName")]
    DisplayName,
    #[strum(serialize = "groupTypes")]
    GroupTypes,
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "mail")]
    Mail,
    #[strum(serialize = "mailEnabled")]
    MailEnabled,
    #[strum(serialize = "mailNickname")]
    MailNickname,
    #[strum(serialize = "securityEnabled")]
    SecurityEnabled,
    #[strum(serialize = "visibility")]
    Visibility,
}
#[doc = "Represents a Microsoft Entra group, a Microsoft 365 group, a team in Microsoft Teams, or a security group."]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Group<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> Group<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        Group {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "Describes a classification for the group (such as low, medium, or high business impact). Returned by default."]
    pub fn classification(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "classification", Value::as_str)
    }
    pub fn set_classification(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "classification", val);
        self
    }
    #[doc = "Timestamp of when the group was created. The value can't be modified and is automatically populated when the group is created. Read-only."]
    pub fn created_date_time(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "createdDateTime", Value::as_str)
    }
    pub fn set_created_date_time(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "createdDateTime", val);
        self
    }
    #[doc = "An optional description for the group. Returned by default."]
    pub fn description(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "description", Value::as_str)
    }
    pub fn set_description(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "description", val);
        self
    }
    #[doc = "Accessor to inherited properties from `DirectoryObject`."]
    pub fn directory_object(&self) -> DirectoryObject<'_> {
        DirectoryObject {
            properties: Cow::Borrowed(&*self.properties),
        }
    }
    #[doc = "The display name for the group. This property is required when a group is created and can't be cleared during updates. Maximum length is 256 characters. Returned by default."]
    pub fn display_name(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "displayName", Value::as_str)
    }
    pub fn set_display_name(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "displayName", val);
        self
    }
    #[doc = "Specifies the group type and its membership. If the collection contains Unified, the group is a Microsoft 365 group; otherwise, it's either a security group or a distribution group."]
    pub fn group_types(&self) -> Result<Vec<&str>, Error> {
        store::collection(&self.properties, "groupTypes", Value::as_str)
    }
    pub fn set_group_types(&mut self, val: &[&str]) -> &mut Self {
        store::set(&mut self.properties, "groupTypes", val);
        self
    }
    #[doc = "The SMTP address for the group, for example: `serviceadmins@contoso.com`. Returned by default. Read-only."]
    pub fn mail(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "mail", Value::as_str)
    }
    pub fn set_mail(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "mail", val);
        self
    }
    #[doc = "Specifies whether the group is mail-enabled. Required. Returned by default."]
    pub fn mail_enabled(&self) -> Result<Option<bool>, Error> {
        store::nullable(&self.properties, "mailEnabled", Value::as_bool)
    }
    pub fn set_mail_enabled(&mut self, val: Option<bool>) -> &mut Self {
        store::set(&mut self.properties, "mailEnabled", val);
        self
    }
    #[doc = "The mail alias for the group, unique for Microsoft 365 groups in the organization. Maximum length is 64 characters. Required. Returned by default."]
    pub fn mail_nickname(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "mailNickname", Value::as_str)
    }
    pub fn set_mail_nickname(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "mailNickname", val);
        self
    }
    #[doc = "Specifies whether the group is a security group. Required. Returned by default."]
    pub fn security_enabled(&self) -> Result<Option<bool>, Error> {
        store::nullable(&self.properties, "securityEnabled", Value::as_bool)
    }
    pub fn set_security_enabled(&mut self, val: Option<bool>) -> &mut Self {
        store::set(&mut self.properties, "securityEnabled", val);
        self
    }
    #[doc = "Specifies the group join policy and group content visibility for groups. Possible values are: Private, Public, or HiddenMembership. Returned by default."]
    pub fn visibility(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "visibility", Value::as_str)
    }
    pub fn set_visibility(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "visibility", val);
        self
    }
}
impl From<Group<'_>> for Value {
    fn from(val: Group<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for Group<'_> {
    const ODATA_TYPE: Option<&'static str> = Some("#microsoft.graph.group");
    const PROPERTIES: &'static [&'static str] = &[
        "classification",
        "createdDateTime",
        "deletedDateTime",
        "description",
        "displayName",
        "groupTypes",
        "id",
        "mail",
        "mailEnabled",
        "mailNickname",
        "securityEnabled",
        "visibility",
    ];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
