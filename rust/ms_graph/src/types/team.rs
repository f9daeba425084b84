/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Team. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::entity::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum TeamSelection {
    #[strum(serialize = "classification")]
    Classification,
    #[strum(serialize = "createdDateTime")]
    CreatedDateTime,
    #[strum(serialize = "description")]
    Description,
    #[strum(serialize = "displayName")]
    DisplayName,
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "internalId")]
    InternalId,
    #[strum(serialize = "isArchived")]
    IsArchived,
    #[strum(serialize = "tenantId")]
    TenantId,
    #[strum(serialize = "webUrl")]
    WebUrl,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Team<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> Team<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        Team {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "An optional label. Typically describes the data or business sensitivity of the team. Must match one of a preconfigured set in the tenant's directory."]
    pub fn classification(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "classification", Value::as_str)
    }
    pub fn set_classification(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "classification", val);
        self
    }
    #[doc = "Timestamp at which the team was created."]
    pub fn created_date_time(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "createdDateTime", Value::as_str)
    }
    pub fn set_created_date_time(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "createdDateTime", val);
        self
    }
    #[doc = "An optional description for the team. Maximum length: 1,024 characters."]
    pub fn description(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "description", Value::as_str)
    }
    pub fn set_description(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "description", val);
        self
    }
    #[doc = "The name of the team."]
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
    #[doc = "A unique ID for the team that was used in a few places such as the audit log/Office 365 Management Activity API."]
    pub fn internal_id(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "internalId", Value::as_str)
    }
    pub fn set_internal_id(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "internalId", val);
        self
    }
    #[doc = "Whether this team is in read-only mode."]
    pub fn is_archived(&self) -> Result<Option<bool>, Error> {
        store::nullable(&self.properties, "isArchived", Value::as_bool)
    }
    pub fn set_is_archived(&mut self, val: Option<bool>) -> &mut Self {
        store::set(&mut self.properties, "isArchived", val);
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
    #[doc = "A hyperlink that goes to the team in the Microsoft Teams client. You get this URL when you right-click a team in the Microsoft Teams client and select Get link to team. This URL should be treated as an opaque blob, and not parsed."]
    pub fn web_url(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "webUrl", Value::as_str)
    }
    pub fn set_web_url(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "webUrl", val);
        self
    }
}
impl From<Team<'_>> for Value {
    fn from(val: Team<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for Team<'_> {
    const ODATA_TYPE: Option<&'static str> = Some("#microsoft.graph.team");
    const PROPERTIES: &'static [&'static str] = &[
        "classification",
        "createdDateTime",
        "description",
        "displayName",
        "id",
        "internalId",
        "isArchived",
        "tenantId",
        "webUrl",
    ];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
