/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Channel. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::channel_membership_type::*;
use crate::types::entity::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum ChannelSelection {
    #[strum(serialize = "createdDateTime")]
    CreatedDateTime,
    #[strum(serialize = "description")]
    Description,
    #[strum(serialize = "displayName")]
    DisplayName,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "isArchived")]
    IsArchived,
    #[strum(serialize = "membershipType")]
    MembershipType,
    #[strum(serialize = "tenantId")]
    TenantId,
    #[strum(serialize = "webUrl")]
    WebUrl,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Channel<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> Channel<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        Channel {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "Read only. Timestamp at which the channel was created."]
    pub fn created_date_time(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "createdDateTime", Value::as_str)
    }
    pub fn set_created_date_time(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "createdDateTime", val);
        self
    }
    #[doc = "Optional textual description for the channel."]
    pub fn description(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "description", Value::as_str)
    }
    pub fn set_description(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "description", val);
        self
    }
    #[doc = "Channel name as it will appear to the user in Microsoft Teams. The maximum length is 50 characters."]
    pub fn display_name(&self) -> Result<&str, Error> {
        store::required(&self.properties, "displayName", Value::as_str)
    }
    pub fn set_display_name(&mut self, val: &str) -> &mut Self {
        store::set(&mut self.properties, "displayName", val);
        self
    }
    #[doc = "The email address for sending messages to the channel. Read-only."]
    pub fn email(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "email", Value::as_str)
    }
    pub fn set_email(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "email", val);
        self
    }
    #[doc = "Accessor to inherited properties from `Entity`."]
    pub fn entity(&self) -> Entity<'_> {
        Entity {
            properties: Cow::Borrowed(&*self.properties),
        }
    }
    #[doc = "Indicates whether the channel is archived. Read-only."]
    pub fn is_archived(&self) -> Result<Option<bool>, Error> {
        store::nullable(&self.properties, "isArchived", Value::as_bool)
    }
    pub fn set_is_archived(&mut self, val: Option<bool>) -> &mut Self {
        store::set(&mut self.properties, "isArchived", val);
        self
    }
    #[doc = "The type of the channel. Can be set during creation and can't be changed. The possible values are: standard, private, unknownFutureValue, shared."]
    pub fn membership_type(&self) -> Result<Option<ChannelMembershipType>, Error> {
        store::nullable(&self.properties, "membershipType", store::parse)
    }
    pub fn set_membership_type(&mut self, val: Option<ChannelMembershipType>) -> &mut Self {
        store::set(&mut self.properties, "membershipType", val);
        self
    }
    #[doc = "The ID of the Microsoft Entra tenant."]
    pub fn tenant_id(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "tenantId", Value::as_str)
    }
    pub fn set_tenant_id(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "tenantId", val);
        self
    }
    #[doc = "A hyperlink that will go to the channel in Microsoft Teams. This is the URL that you get when you right-click a channel in Microsoft Teams and select Get link to channel. This URL should be treated as an opaque blob, and not parsed. Read-only."]
    pub fn web_url(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "webUrl", Value::as_str)
    }
    pub fn set_web_url(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "webUrl", val);
        self
    }
}
impl From<Channel<'_>> for Value {
    fn from(val: Channel<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for Channel<'_> {
    const ODATA_TYPE: Option<&'static str> = Some("#microsoft.graph.channel");
    const PROPERTIES: &'static [&'static str] = &[
        "createdDateTime",
        "description",
        "displayName",
        "email",
        "id",
        "isArchived",
        "membershipType",
        "tenantId",
        "webUrl",
    ];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
