/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Request builders and models for the Microsoft Graph REST API.
//!
//! The [`paths`] and [`types`] modules are generated from the Microsoft
//! OpenAPI metadata by `ms_graph_extract`. Everything else is the small
//! runtime they are written against: [`RequestInformation`] describes a
//! request independently of any transport, and a [`RequestAdapter`] sends it
//! and turns the response into a model or an [`Error`].

use http::{HeaderMap, StatusCode, header, method::Method};
use serde::{Deserialize, de::DeserializeOwned};
use std::{fmt::Display, marker::PhantomData};
use thiserror::Error;

pub mod adapter;
pub mod builder;
pub mod client;
pub mod paths;
pub mod query;
pub mod request;
pub mod store;
pub mod types;
pub mod uri_template;

pub use adapter::{ErrorMapping, ODATA_ERROR_MAPPING, RequestAdapter, Response};
pub use builder::BaseRequestBuilder;
pub use client::GraphServiceClient;
pub use query::{Count, Expand, Filter, OrderBy, QueryOptions, Queryable, Search, Select, Skip, Top};
pub use request::{JSON_CONTENT_TYPE, PathParameters, RequestInformation, TEXT_CONTENT_TYPE};
pub use store::Model;

use types::o_data_errors::o_data_error::ODataError;
use uri_template::TemplateError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("object does not have this property set")]
    NotFound,
    #[error("property has an unexpected type")]
    UnexpectedResponse(String),
    #[error("invalid request URI")]
    Uri(#[from] http::uri::InvalidUri),
    #[error("not an absolute URL: {0}")]
    RelativeLink(String),
    #[error("invalid URL template")]
    Template(#[from] TemplateError),
    #[error("failed to process JSON")]
    Json(#[from] serde_json::Error),
    #[error("request failed with status {status}: {}", odata_summary(.error))]
    OData {
        status: StatusCode,
        error: Box<ODataError<'static>>,
    },
    #[error("request failed with status {status}")]
    Status { status: StatusCode, body: String },
    #[error("failed to send request")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

fn odata_summary(error: &ODataError<'_>) -> String {
    match error.error() {
        Ok(main) => format!(
            "{}: {}",
            main.code().unwrap_or_default(),
            main.message().unwrap_or_default()
        ),
        Err(_) => String::from("no error details"),
    }
}

/// Trait for Graph operations.
pub trait Operation {
    /// The HTTP request method used for this operation.
    const METHOD: Method;

    /// How error statuses returned for this operation are turned into an
    /// [`Error`].
    const ERROR_MAPPING: ErrorMapping = ODATA_ERROR_MAPPING;

    /// The type of the body of the request. Requests without a body will set
    /// this to `()`.
    type Body;

    /// The type of the response of the request, in the success case. Requests
    /// without a response type will set this to `()`.
    // This could be generalized for a possible performance win, but
    // at the cost of making consumers responsible for the lifetime of
    // the raw, unparsed response:
    // type Response<'response>: Deserialize<'response>
    type Response<'response>: DeserializeOwned;

    /// Create a [`RequestInformation`] from the current state of the
    /// operation object.
    fn build(&self) -> Result<RequestInformation, Error>;

    /// Extra headers sent with the request, e.g. `ConsistencyLevel` for
    /// advanced directory queries.
    fn headers_mut(&mut self) -> &mut HeaderMap;
}

/// Common internal representation of the `$select` parameter (used with
/// [`Select`]).
#[derive(Clone, Debug)]
pub struct Selection<P: Clone> {
    // The API seems to deduplicate on the server-side, so we don't need to do that. Because this
    // parameter will likely consist of a few small enum variants, vec operations are a good fit.
    properties: Vec<P>,
}

impl<T: Clone> Default for Selection<T> {
    fn default() -> Self {
        Self {
            properties: Vec::new(),
        }
    }
}

impl<P: Display + Clone> Selection<P> {
    pub fn select<I: IntoIterator<Item = P>>(&mut self, properties: I) {
        self.properties = properties.into_iter().collect();
    }

    pub fn extend<I: IntoIterator<Item = P>>(&mut self, properties: I) {
        self.properties.extend(properties);
    }

    /// Get the selection as a (key, value) pair, where the value is the list
    /// of selected property names.
    pub fn pair(&self) -> (&'static str, Vec<String>) {
        (
            query::SELECT,
            self.properties.iter().map(ToString::to_string).collect(),
        )
    }
}

/// A paginated response message. If the response has additional results, then
/// [`Self::next_page`] will return `Some`.
///
/// See [Microsoft documentation](https://learn.microsoft.com/en-us/graph/paging)
/// for more information.
#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    #[serde(rename = "@odata.nextLink")]
    next_link: Option<String>,
    #[serde(flatten)]
    pub response: T,
}

impl<T> Paginated<T> {
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    /// Get the operation to retreive the next page, if there is one.
    pub fn next_page(&self) -> Option<NextPage<T>> {
        self.next_link.as_ref().map(|next_link| NextPage {
            _phantom: PhantomData,
            next_link: next_link.clone(),
            headers: HeaderMap::new(),
        })
    }
}

/// The next page of a response. Note that unlike other [`Operation`]s, the
/// request constructed contains the *full* URL, and should not be modified.
#[derive(Debug)]
pub struct NextPage<T> {
    _phantom: PhantomData<T>,
    next_link: String,
    headers: HeaderMap,
}

impl<T: DeserializeOwned> Operation for NextPage<T> {
    const METHOD: Method = Method::GET;
    type Body = ();
    type Response<'response> = Paginated<T>;

    /// Create a [`RequestInformation`] from `Self`. See the struct note, the
    /// URL is used as is.
    fn build(&self) -> Result<RequestInformation, Error> {
        let mut request = RequestInformation::from_raw_url(Self::METHOD, self.next_link.as_str());
        request.headers = self.headers.clone();
        set_default_accept(&mut request.headers, JSON_CONTENT_TYPE);
        Ok(request)
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

/// The response to a [delta query](https://learn.microsoft.com/en-us/graph/delta-query-overview).
///
/// Exactly one of the links is expected: a next link while there are more
/// changes to fetch, then a delta link to use for the following round of
/// synchronization.
#[derive(Debug, Deserialize)]
pub struct DeltaResponse<T> {
    #[serde(rename = "@odata.nextLink")]
    next_link: Option<String>,
    #[serde(rename = "@odata.deltaLink")]
    delta_link: Option<String>,
    pub value: T,
}

impl<T> DeltaResponse<T> {
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    pub fn delta_link(&self) -> Option<&str> {
        self.delta_link.as_deref()
    }
}

/// Ask for `media_type` unless the caller already chose one.
pub(crate) fn set_default_accept(headers: &mut HeaderMap, media_type: &'static str) {
    headers
        .entry(header::ACCEPT)
        .or_insert(http::HeaderValue::from_static(media_type));
}

#[cfg(test)]
mod tests {
    use super::paths;
    use super::types::{mail_folder, user};
    use super::{Operation, Select, Selection};
    use std::borrow::Cow;

    #[test]
    fn serialize_selection() {
        let mut selection = Selection::default();
        selection.extend(vec![user::UserSelection::AboutMe]);
        let (key, value) = selection.pair();
        assert_eq!(key, "$select");
        assert_eq!(value, vec!["aboutMe".to_string()]);
    }

    #[test]
    fn serialize_get_me() {
        let mut get_me = paths::me::Get::new(Default::default());
        get_me.select(vec![user::UserSelection::AboutMe]);
        let req = get_me.build().unwrap();
        assert_eq!(req.uri().unwrap(), "/me?%24select=aboutMe");
    }

    #[test]
    fn deserialize_user() {
        let json = r#"{
    "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#users/$entity",
    "businessPhones": [],
    "displayName": "Adele Vance",
    "givenName": "Adele",
    "jobTitle": null,
    "mail": "AdeleV@M365x63639251.OnMicrosoft.com",
    "mobilePhone": null,
    "officeLocation": null,
    "preferredLanguage": null,
    "surname": "Vance",
    "userPrincipalName": "AdeleV@M365x63639251.OnMicrosoft.com",
    "id": "3a2bc284-f11c-4676-a9e1-6310eea60f26"
}"#;

        let parsed: user::User = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.display_name().unwrap(), Some("Adele Vance"));
        assert_eq!(parsed.job_title().unwrap(), None);
        assert_eq!(parsed.business_phones().unwrap(), Vec::<&str>::new());
        assert_eq!(
            parsed.directory_object().entity().id().unwrap(),
            "3a2bc284-f11c-4676-a9e1-6310eea60f26"
        );
        assert!(matches!(parsed.about_me(), Err(super::Error::NotFound)));
    }

    #[test]
    fn deserialize_paginated_with_page() {
        use mail_folder::MailFolder;

        let json = r#"{
    "@odata.context": "https://graph.microsoft.com/v1.0/me/mailFolders",
    "value": [
        {
            "id": "AQMkADYAAAIBXQAAAA==",
            "displayName": "Archive",
            "parentFolderId": "AQMkADYAAAIBCAAAAA==",
            "childFolderCount": 0,
            "unreadItemCount": 0,
            "totalItemCount": 0,
            "sizeInBytes": 0,
            "isHidden": false
        }
    ],
    "@odata.nextLink": "https://graph.microsoft.com/v1.0/me/mailFolders?%24skip=10"
}"#;

        let parsed: <paths::me_mail_folders::Get as Operation>::Response<'_> =
            serde_json::from_str(json).unwrap();
        let value = vec![MailFolder {
            properties: Cow::Owned(serde_json::Map::from_iter([
                ("id".to_string(), "AQMkADYAAAIBXQAAAA==".into()),
                ("displayName".to_string(), "Archive".into()),
                ("parentFolderId".to_string(), "AQMkADYAAAIBCAAAAA==".into()),
                ("childFolderCount".to_string(), 0.into()),
                ("unreadItemCount".to_string(), 0.into()),
                ("totalItemCount".to_string(), 0.into()),
                ("sizeInBytes".to_string(), 0.into()),
                ("isHidden".to_string(), false.into()),
            ])),
        }];

        assert_eq!(
            parsed.response.value().expect("value should be present"),
            value
        );

        let next_page = parsed.next_page().expect("next page should be present");
        let request = next_page.build().unwrap();
        assert_eq!(
            request.uri().unwrap(),
            "https://graph.microsoft.com/v1.0/me/mailFolders?%24skip=10"
        );
        assert_eq!(
            request.headers.get(http::header::ACCEPT).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn deserialize_paginated_without_page() {
        let json = r#"{
    "@odata.context": "https://graph.microsoft.com/v1.0/me/mailFolders",
    "value": []
}"#;

        let parsed: <paths::me_mail_folders::Get as Operation>::Response<'_> =
            serde_json::from_str(json).unwrap();
        assert!(parsed.response.value().unwrap().is_empty());
        assert!(parsed.next_page().is_none());
        assert!(parsed.next_link().is_none());
    }

    #[test]
    fn deserialize_delta_links() {
        let json = r#"{
    "value": [{"id": "AQMkADYAAAIBXQAAAA==", "@removed": {"reason": "deleted"}}],
    "@odata.deltaLink": "https://graph.microsoft.com/v1.0/me/mailFolders/delta()?%24deltatoken=abc"
}"#;

        let parsed: <paths::me_mail_folders_delta::Get as Operation>::Response<'_> =
            serde_json::from_str(json).unwrap();
        assert_eq!(parsed.next_link(), None);
        assert_eq!(
            parsed.delta_link(),
            Some("https://graph.microsoft.com/v1.0/me/mailFolders/delta()?%24deltatoken=abc")
        );
        assert_eq!(parsed.value.len(), 1);
    }
}
