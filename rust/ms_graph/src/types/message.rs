/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Message. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::importance::*;
use crate::types::item_body::*;
use crate::types::outlook_item::*;
use crate::types::recipient::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum MessageSelection {
    #[strum(serialize = "bccRecipients")]
    BccRecipients,
    #[strum(serialize = "body")]
    Body,
    #[strum(serialize = "bodyPreview")]
    BodyPreview,
    #[strum(serialize = "categories")]
    Categories,
    #[strum(serialize = "ccRecipients")]
    CcRecipients,
    #[strum(serialize = "changeKey")]
    ChangeKey,
    #[strum(serialize = "conversationId")]
    ConversationId,
    #[strum(serialize = "createdDateTime")]
    CreatedDateTime,
    #[strum(serialize = "from")]
    From,
    #[strum(serialize = "hasAttachments")]
    HasAttachments,
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "importance")]
    Importance,
    #[strum(serialize = "internetMessageId")]
    InternetMessageId,
    #[strum(serialize = "isDraft")]
    IsDraft,
    #[strum(serialize = "isRead")]
    IsRead,
    #[strum(serialize = "lastModifiedDateTime")]
    LastModifiedDateTime,
    #[strum(serialize = "parentFolderId")]
    ParentFolderId,
    #[strum(serialize = "receivedDateTime")]
    ReceivedDateTime,
    #[strum(serialize = "replyTo")]
    ReplyTo,
    #[strum(serialize = "sender")]
    Sender,
    #[strum(serialize = "sentDateTime")]
    SentDateTime,
    #[strum(serialize = "subject")]
    Subject,
    #[strum(serialize = "toRecipients")]
    ToRecipients,
    #[strum(serialize = "webLink")]
    WebLink,
}
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Message<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> Message<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        Message {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "The Bcc: recipients for the message."]
    pub fn bcc_recipients(&self) -> Result<Vec<Recipient<'_>>, Error> {
        store::collection(&self.properties, "bccRecipients", |v| v.as_object().map(Recipient::new))
    }
    pub fn set_bcc_recipients(&mut self, val: Vec<Recipient<'_>>) -> &mut Self {
        store::set(&mut self.properties, "bccRecipients", val);
        self
    }
    #[doc = "The body of the message. It can be in HTML or text format. Find out about safe HTML in a message body."]
    pub fn body(&self) -> Result<Option<ItemBody<'_>>, Error> {
        store::nullable(&self.properties, "body", |v| v.as_object().map(ItemBody::new))
    }
    pub fn set_body(&mut self, val: Option<ItemBody<'_>>) -> &mut Self {
        store::set(&mut self.properties, "body", val);
        self
    }
    #[doc = "The first 255 characters of the message body. It is in text format."]
    pub fn body_preview(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "bodyPreview", Value::as_str)
    }
    pub fn set_body_preview(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "bodyPreview", val);
        self
    }
    #[doc = "The Cc: recipients for the message."]
    pub fn cc_recipients(&self) -> Result<Vec<Recipient<'_>>, Error> {
        store::collection(&self.properties, "ccRecipients", |v| v.as_object().map(Recipient::new))
    }
    pub fn set_cc_recipients(&mut self, val: Vec<Recipient<'_>>) -> &mut Self {
        store::set(&mut self.properties, "ccRecipients", val);
        self
    }
    #[doc = "The ID of the conversation the email belongs to."]
    pub fn conversation_id(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "conversationId", Value::as_str)
    }
    pub fn set_conversation_id(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "conversationId", val);
        self
    }
    #[doc = "The owner of the mailbox from which the message is sent. In most cases, this value is the same as the sender property, except for sharing or delegation scenarios."]
    pub fn from(&self) -> Result<Option<Recipient<'_>>, Error> {
        store::nullable(&self.properties, "from", |v| v.as_object().map(Recipient::new))
    }
    pub fn set_from(&mut self, val: Option<Recipient<'_>>) -> &mut Self {
        store::set(&mut self.properties, "from", val);
        self
    }
    #[doc = "Indicates whether the message has attachments. This property doesn't include inline attachments."]
    pub fn has_attachments(&self) -> Result<Option<bool>, Error> {
        store::nullable(&self.properties, "hasAttachments", Value::as_bool)
    }
    pub fn set_has_attachments(&mut self, val: Option<bool>) -> &mut Self {
        store::set(&mut self.properties, "hasAttachments", val);
        self
    }
    #[doc = "The importance of the message. The possible values are: low, normal, and high."]
    pub fn importance(&self) -> Result<Option<Importance>, Error> {
        store::nullable(&self.properties, "importance", store::parse)
    }
    pub fn set_importance(&mut self, val: Option<Importance>) -> &mut Self {
        store::set(&mut self.properties, "importance", val);
        self
    }
    #[doc = "The message ID in the format specified by RFC2822."]
    pub fn internet_message_id(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "internetMessageId", Value::as_str)
    }
    pub fn set_internet_message_id(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "internetMessageId", val);
        self
    }
    #[doc = "Indicates whether the message is a draft. A message is a draft if it hasn't been sent yet."]
    pub fn is_draft(&self) -> Result<Option<bool>, Error> {
        store::nullable(&self.properties, "isDraft", Value::as_bool)
    }
    pub fn set_is_draft(&mut self, val: Option<bool>) -> &mut Self {
        store::set(&mut self.properties, "isDraft", val);
        self
    }
    #[doc = "Indicates whether the message has been read."]
    pub fn is_read(&self) -> Result<Option<bool>, Error> {
        store::nullable(&self.properties, "isRead", Value::as_bool)
    }
    pub fn set_is_read(&mut self, val: Option<bool>) -> &mut Self {
        store::set(&mut self.properties, "isRead", val);
        self
    }
    #[doc = "Accessor to inherited properties from `OutlookItem`."]
    pub fn outlook_item(&self) -> OutlookItem<'_> {
        OutlookItem {
            properties: Cow::Borrowed(&*self.properties),
        }
    }
    #[doc = "The unique identifier for the message's parent mailFolder."]
    pub fn parent_folder_id(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "parentFolderId", Value::as_str)
    }
    pub fn set_parent_folder_id(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "parentFolderId", val);
        self
    }
    #[doc = "The date and time the message was received. The date and time information uses ISO 8601 format and is always in UTC."]
    pub fn received_date_time(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "receivedDateTime", Value::as_str)
    }
    pub fn set_received_date_time(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "receivedDateTime", val);
        self
    }
    #[doc = "The email addresses to use when replying."]
    pub fn reply_to(&self) -> Result<Vec<Recipient<'_>>, Error> {
        store::collection(&self.properties, "replyTo", |v| v.as_object().map(Recipient::new))
    }
    pub fn set_reply_to(&mut self, val: Vec<Recipient<'_>>) -> &mut Self {
        store::set(&mut self.properties, "replyTo", val);
        self
    }
    #[doc = "The account that is actually used to generate the message. In most cases, this value is the same as the from property."]
    pub fn sender(&self) -> Result<Option<Recipient<'_>>, Error> {
        store::nullable(&self.properties, "sender", |v| v.as_object().map(Recipient::new))
    }
    pub fn set_sender(&mut self, val: Option<Recipient<'_>>) -> &mut Self {
        store::set(&mut self.properties, "sender", val);
        self
    }
    #[doc = "The date and time the message was sent. The date and time information uses ISO 8601 format and is always in UTC."]
    pub fn sent_date_time(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "sentDateTime", Value::as_str)
    }
    pub fn set_sent_date_time(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "sentDateTime", val);
        self
    }
    #[doc = "The subject of the message."]
    pub fn subject(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "subject", Value::as_str)
    }
    pub fn set_subject(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "subject", val);
        self
    }
    #[doc = "The To: recipients for the message."]
    pub fn to_recipients(&self) -> Result<Vec<Recipient<'_>>, Error> {
        store::collection(&self.properties, "toRecipients", |v| v.as_object().map(Recipient::new))
    }
    pub fn set_to_recipients(&mut self, val: Vec<Recipient<'_>>) -> &mut Self {
        store::set(&mut self.properties, "toRecipients", val);
        self
    }
    #[doc = "The URL to open the message in Outlook on the web. You can append an ispopout argument to the end of the URL to change how the message is displayed."]
    pub fn web_link(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "webLink", Value::as_str)
    }
    pub fn set_web_link(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "webLink", val);
        self
    }
}
impl From<Message<'_>> for Value {
    fn from(val: Message<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for Message<'_> {
    const ODATA_TYPE: Option<&'static str> = Some("#microsoft.graph.message");
    const PROPERTIES: &'static [&'static str] = &[
        "bccRecipients",
        "body",
        "bodyPreview",
        "categories",
        "ccRecipients",
        "changeKey",
        "conversationId",
        "createdDateTime",
        "from",
        "hasAttachments",
        "id",
        "importance",
        "internetMessageId",
        "isDraft",
        "isRead",
        "lastModifiedDateTime",
        "parentFolderId",
        "receivedDateTime",
        "replyTo",
        "sender",
        "sentDateTime",
        "subject",
        "toRecipients",
        "webLink",
    ];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
