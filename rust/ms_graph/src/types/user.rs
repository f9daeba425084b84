/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to User. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::Error;
use crate::store::{self, Model};
use crate::types::directory_object::*;
use crate::types::mailbox_settings::*;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use strum::Display;
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum UserSelection {
    #[strum(serialize = "aboutMe")]
    AboutMe,
    #[strum(serialize = "accountEnabled")]
    AccountEnabled,
    #[strum(serialize = "ageGroup")]
    AgeGroup,
    #[strum(serialize = "birthday")]
    Birthday,
    #[strum(serialize = "businessPhones")]
    BusinessPhones,
    #[strum(serialize = "city")]
    City,
    #[strum(serialize = "companyName")]
    CompanyName,
    #[strum(serialize = "country")]
    Country,
    #[strum(serialize = "createdDateTime")]
    CreatedDateTime,
    #[strum(serialize = "deletedDateTime")]
    DeletedDateTime,
    #[strum(serialize = "department")]
    Department,
    #[strum(serialize = "displayName")]
    DisplayName,
    #[strum(serialize = "employeeId")]
    EmployeeId,
    #[strum(serialize = "givenName")]
    GivenName,
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "imAddresses")]
    ImAddresses,
    #[strum(serialize = "jobTitle")]
    JobTitle,
    #[strum(serialize = "mail")]
    Mail,
    #[strum(serialize = "mailNickname")]
    MailNickname,
    #[strum(serialize = "mailboxSettings")]
    MailboxSettings,
    #[strum(serialize = "mobilePhone")]
    MobilePhone,
    #[strum(serialize = "officeLocation")]
    OfficeLocation,
    #[strum(serialize = "otherMails")]
    OtherMails,
    #[strum(serialize = "postalCode")]
    PostalCode,
    #[strum(serialize = "preferredLanguage")]
    PreferredLanguage,
    #[strum(serialize = "proxyAddresses")]
    ProxyAddresses,
    #[strum(serialize = "surname")]
    Surname,
    #[strum(serialize = "usageLocation")]
    UsageLocation,
    #[strum(serialize = "userPrincipalName")]
    UserPrincipalName,
    #[strum(serialize = "userType")]
    UserType,
}
#[doc = "Represents a Microsoft Entra user account."]
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct User<'a> {
    #[serde(flatten)]
    pub(crate) properties: Cow<'a, Map<String, Value>>,
}
impl<'a> User<'a> {
    #[doc = r"Internal constructor."]
    #[allow(dead_code)]
    pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
        User {
            properties: Cow::Borrowed(properties),
        }
    }
    #[doc = "A freeform text entry field for the user to describe themselves. Returned only on `$select`."]
    pub fn about_me(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "aboutMe", Value::as_str)
    }
    pub fn set_about_me(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "aboutMe", val);
        self
    }
    #[doc = "true if the account is enabled; otherwise, false. This property is required when a user is created. Returned only on `$select`. Supports `$filter` (`eq`, `ne`, `not`, and `in`)."]
    pub fn account_enabled(&self) -> Result<Option<bool>, Error> {
        store::nullable(&self.properties, "accountEnabled", Value::as_bool)
    }
    pub fn set_account_enabled(&mut self, val: Option<bool>) -> &mut Self {
        store::set(&mut self.properties, "accountEnabled", val);
        self
    }
    #[doc = "Sets the age group of the user. Allowed values: `null`, `Minor`, `NotAdult`, and `Adult`. Returned only on `$select`. Supports `$filter` (`eq`, `ne`, `not`, and `in`)."]
    pub fn age_group(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "ageGroup", Value::as_str)
    }
    pub fn set_age_group(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "ageGroup", val);
        self
    }
    #[doc = "The birthday of the user. The Timestamp type represents date and time information using ISO 8601 format and is always in UTC. Returned only on `$select`."]
    pub fn birthday(&self) -> Result<&str, Error> {
        store::required(&self.properties, "birthday", Value::as_str)
    }
    pub fn set_birthday(&mut self, val: &str) -> &mut Self {
        store::set(&mut self.properties, "birthday", val);
        self
    }
    #[doc = "The telephone numbers for the user. NOTE: Although it's a string collection, only one number can be set for this property. Returned by default."]
    pub fn business_phones(&self) -> Result<Vec<&str>, Error> {
        store::collection(&self.properties, "businessPhones", Value::as_str)
    }
    pub fn set_business_phones(&mut self, val: &[&str]) -> &mut Self {
        store::set(&mut self.properties, "businessPhones", val);
        self
    }
    #[doc = "The city where the user is located. Maximum length is 128 characters. Returned only on `$select`."]
    pub fn city(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "city", Value::as_str)
    }
    pub fn set_city(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "city", val);
        self
    }
    #[doc = "The name of the company that the user is associated with. The maximum length is 64 characters. Returned only on `$select`."]
    pub fn company_name(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "companyName", Value::as_str)
    }
    pub fn set_company_name(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "companyName", val);
        self
    }
    #[doc = "The country or region where the user is located; for example: `US or UK`. Maximum length is 128 characters. Returned only on `$select`."]
    pub fn country(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "country", Value::as_str)
    }
    pub fn set_country(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "country", val);
        self
    }
    #[doc = "The date and time the user was created, in ISO 8601 format and UTC. The value can't be modified and is automatically populated when the entity is created. Read-only. Returned only on `$select`."]
    pub fn created_date_time(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "createdDateTime", Value::as_str)
    }
    pub fn set_created_date_time(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "createdDateTime", val);
        self
    }
    #[doc = "The name of the department in which the user works. Maximum length is 64 characters. Returned only on `$select`."]
    pub fn department(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "department", Value::as_str)
    }
    pub fn set_department(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "department", val);
        self
    }
    #[doc = "Accessor to inherited properties from `DirectoryObject`."]
    pub fn directory_object(&self) -> DirectoryObject<'_> {
        DirectoryObject {
            properties: Cow::Borrowed(&*self.properties),
        }
    }
    #[doc = "The name displayed in the address book for the user. This value is usually the combination of the user's first name, middle initial, and family name. Returned by default. Supports `$filter` (`eq`, `ne`, `not`, `ge`, `le`, `in`, `startsWith`, and `eq` on null values), `$orderby`, and `$search`."]
    pub fn display_name(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "displayName", Value::as_str)
    }
    pub fn set_display_name(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "displayName", val);
        self
    }
    #[doc = "The employee identifier assigned to the user by the organization. The maximum length is 16 characters. Returned only on `$select`."]
    pub fn employee_id(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "employeeId", Value::as_str)
    }
    pub fn set_employee_id(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "employeeId", val);
        self
    }
    #[doc = "The given name (first name) of the user. Maximum length is 64 characters. Returned by default."]
    pub fn given_name(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "givenName", Value::as_str)
    }
    pub fn set_given_name(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "givenName", val);
        self
    }
    #[doc = "The instant message voice-over IP (VOIP) session initiation protocol (SIP) addresses for the user. Read-only. Returned only on `$select`."]
    pub fn im_addresses(&self) -> Result<Vec<&str>, Error> {
        store::collection(&self.properties, "imAddresses", Value::as_str)
    }
    pub fn set_im_addresses(&mut self, val: &[&str]) -> &mut Self {
        store::set(&mut self.properties, "imAddresses", val);
        self
    }
    #[doc = "The user's job title. Maximum length is 128 characters. Returned by default."]
    pub fn job_title(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "jobTitle", Value::as_str)
    }
    pub fn set_job_title(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "jobTitle", val);
        self
    }
    #[doc = "The SMTP address for the user, for example: `jeff@contoso.com`. Changes to this property update the user's proxyAddresses collection to include the value as an SMTP address. Returned by default."]
    pub fn mail(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "mail", Value::as_str)
    }
    pub fn set_mail(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "mail", val);
        self
    }
    #[doc = "The mail alias for the user. This property must be specified when a user is created. Maximum length is 64 characters. Returned only on `$select`."]
    pub fn mail_nickname(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "mailNickname", Value::as_str)
    }
    pub fn set_mail_nickname(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "mailNickname", val);
        self
    }
    #[doc = "Settings for the primary mailbox of the signed-in user. You can get or update settings for sending automatic replies to incoming messages, locale, and time zone. Returned only on `$select`."]
    pub fn mailbox_settings(&self) -> Result<Option<MailboxSettings<'_>>, Error> {
        store::nullable(
            &self.properties,
            "mailboxSettings",
            |v| v.as_object().map(MailboxSettings::new),
        )
    }
    pub fn set_mailbox_settings(&mut self, val: Option<MailboxSettings<'_>>) -> &mut Self {
        store::set(&mut self.properties, "mailboxSettings", val);
        self
    }
    #[doc = "The primary cellular telephone number for the user. Read-only for users synced from the on-premises directory. Returned by default."]
    pub fn mobile_phone(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "mobilePhone", Value::as_str)
    }
    pub fn set_mobile_phone(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "mobilePhone", val);
        self
    }
    #[doc = "The office location in the user's place of business. Returned by default."]
    pub fn office_location(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "officeLocation", Value::as_str)
    }
    pub fn set_office_location(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "officeLocation", val);
        self
    }
    #[doc = "A list of other email addresses for the user; for example: `['bob@contoso.com', 'Robert@fabrikam.com']`. Can store up to 250 values, each with a limit of 250 characters. Returned only on `$select`."]
    pub fn other_mails(&self) -> Result<Vec<&str>, Error> {
        store::collection(&self.properties, "otherMails", Value::as_str)
    }
    pub fn set_other_mails(&mut self, val: &[&str]) -> &mut Self {
        store::set(&mut self.properties, "otherMails", val);
        self
    }
    #[doc = "The postal code for the user's postal address. The postal code is specific to the user's country or region. Returned only on `$select`."]
    pub fn postal_code(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "postalCode", Value::as_str)
    }
    pub fn set_postal_code(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "postalCode", val);
        self
    }
    #[doc = "The preferred language for the user. The preferred language format is based on RFC 4646. Returned by default."]
    pub fn preferred_language(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "preferredLanguage", Value::as_str)
    }
    pub fn set_preferred_language(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "preferredLanguage", val);
        self
    }
    #[doc = "For example: `['SMTP: bob@contoso.com', 'smtp: bob@sales.contoso.com']`. Changes to the mail property update this collection to include the value as an SMTP address. Read-only. Returned only on `$select`."]
    pub fn proxy_addresses(&self) -> Result<Vec<&str>, Error> {
        store::collection(&self.properties, "proxyAddresses", Value::as_str)
    }
    pub fn set_proxy_addresses(&mut self, val: &[&str]) -> &mut Self {
        store::set(&mut self.properties, "proxyAddresses", val);
        self
    }
    #[doc = "The user's surname (family name or last name). Maximum length is 64 characters. Returned by default."]
    pub fn surname(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "surname", Value::as_str)
    }
    pub fn set_surname(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "surname", val);
        self
    }
    #[doc = "A two-letter country code (ISO standard 3166). Required for users that are assigned licenses due to legal requirements to check for availability of services in countries. Returned only on `$select`."]
    pub fn usage_location(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "usageLocation", Value::as_str)
    }
    pub fn set_usage_location(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "usageLocation", val);
        self
    }
    #[doc = "The user principal name (UPN) of the user. The UPN is an Internet-style sign-in name for the user based on the Internet standard RFC 822. Returned by default."]
    pub fn user_principal_name(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "userPrincipalName", Value::as_str)
    }
    pub fn set_user_principal_name(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "userPrincipalName", val);
        self
    }
    #[doc = "A string value that can be used to classify user types in your directory. The possible values are Member and Guest. Returned only on `$select`."]
    pub fn user_type(&self) -> Result<Option<&str>, Error> {
        store::nullable(&self.properties, "userType", Value::as_str)
    }
    pub fn set_user_type(&mut self, val: Option<&str>) -> &mut Self {
        store::set(&mut self.properties, "userType", val);
        self
    }
}
impl From<User<'_>> for Value {
    fn from(val: User<'_>) -> Self {
        Value::Object(val.properties.into_owned())
    }
}
impl Model for User<'_> {
    const ODATA_TYPE: Option<&'static str> = Some("#microsoft.graph.user");
    const PROPERTIES: &'static [&'static str] = &[
        "aboutMe",
        "accountEnabled",
        "ageGroup",
        "birthday",
        "businessPhones",
        "city",
        "companyName",
        "country",
        "createdDateTime",
        "deletedDateTime",
        "department",
        "displayName",
        "employeeId",
        "givenName",
        "id",
        "imAddresses",
        "jobTitle",
        "mail",
        "mailNickname",
        "mailboxSettings",
        "mobilePhone",
        "officeLocation",
        "otherMails",
        "postalCode",
        "preferredLanguage",
        "proxyAddresses",
        "surname",
        "usageLocation",
        "userPrincipalName",
        "userType",
    ];
    fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}
