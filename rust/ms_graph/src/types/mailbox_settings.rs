/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to MailboxSettings. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum MailboxSettingsSelection {
    #[strum(serialize = "archiveFolder")]
    ArchiveFolder,
    #[strum(serialize = "dateFormat")]
    DateFormat,
    #[strum(serialize = "timeFormat")]
    TimeFormat,
    #[strum(serialize = "timeZone")]
    TimeZone,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct MailboxSettings<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> MailboxSettings<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        MailboxSettings {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "Folder ID of an archive folder for the user."]
    pub fn archive_folder(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "archiveFolder", Value::as_str)
    }
    pub fn set_archive_folder(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "archiveFolder", val);
        self
    }
    #[doc = "The date format for the user's mailbox."]
    pub fn date_format(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "dateFormat", Value::as_str)
    }
    pub fn set_date_format(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "dateFormat", val);
        self
    }
    #[doc = "The time format for the user's mailbox."]
    pub fn time_format(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "timeFormat", Value::as_str)
    }
    pub fn set_time_format(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "timeFormat", val);
        self
    }
    #[doc = "The default time zone for the user's mailbox."]
    pub fn time_zone(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "timeZone", Value::as_str)
    }
    pub fn set_time_zone(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "timeZone", val);
        self
    }
}
impl From<MailboxSettings<'_>> for Value {
    fn from(val: MailboxSettings<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for MailboxSettings<'_> {
    const ODATA_TYPE: Option<&'static str> = Some("#microsoft.graph.mailboxSettings");
    const PROPERTIES: &'static [&'static str] = &[
        "archiveFolder",
        "dateFormat",
        "timeFormat",
        "timeZone",
    ];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
