/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Provides operations to call the delta method.\n\nAuto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::types::mail_folder::*;
use crate::*;
use http::{HeaderMap, method::Method};
pub const URL_TEMPLATE: &str = "{+baseurl}/me/mailFolders/delta(){?%24count,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
#[doc = "Invoke function delta\n\nGet a set of mail folders that have been added, deleted, or removed from the user's mailbox.\n\nMore information available via [Microsoft documentation](https://learn.microsoft.com/graph/api/mailfolder-delta?view=graph-rest-1.0)."]
#[derive(Debug)]
pub struct Get {
    path_parameters: PathParameters,
    headers: HeaderMap,
    query: QueryOptions<MailFolderSelection>,
}
impl Get {
    pub fn new(path_parameters: PathParameters) -> Self {
        Self {
            path_parameters,
            headers: HeaderMap::new(),
            query: QueryOptions::default(),
        }
    }
}
impl Operation for Get {
    const METHOD: Method = Method::GET;
    type Body = ();
    type Response<'response> = DeltaResponse<Vec<MailFolder<'response>>>;
    fn build(&self) -> Result<RequestInformation, Error> {
        let mut request =
            RequestInformation::new(Self::METHOD, URL_TEMPLATE, self.path_parameters.clone());
        request.headers = self.headers.clone();
        set_default_accept(&mut request.headers, JSON_CONTENT_TYPE);
        self.query.apply(&mut request);
        Ok(request)
    }
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}
impl Queryable for Get {
    type Properties = MailFolderSelection;
    fn query_options(&mut self) -> &mut QueryOptions<Self::Properties> {
        &mut self.query
    }
}
impl Count for Get {}
impl Filter for Get {}
impl OrderBy for Get {}
impl Search for Get {}
impl Select for Get {}
impl Skip for Get {}
impl Top for Get {}
#[doc = r"Retrieve delta changes using a next or delta link from a previous"]
#[doc = r" delta response. The caller must ensure only links from this"]
#[doc = r" path are used."]
#[derive(Debug)]
pub struct GetDelta {
    link: String,
    headers: HeaderMap,
}
impl TryFrom<&str> for GetDelta {
    type Error = Error;
    fn try_from(link: &str) -> Result<Self, Self::Error> {
        let uri = link.parse::<http::Uri>()?;
        if uri.scheme().is_none() || uri.host().is_none() {
            return Err(Error::RelativeLink(link.to_string()));
        }
        Ok(Self {
            link: link.to_string(),
            headers: HeaderMap::new(),
        })
    }
}
impl Operation for GetDelta {
    const METHOD: Method = Method::GET;
    type Body = ();
    type Response<'response> = DeltaResponse<Vec<MailFolder<'response>>>;
    fn build(&self) -> Result<RequestInformation, Error> {
        let mut request = RequestInformation::from_raw_url(Self::METHOD, self.link.as_str());
        request.headers = self.headers.clone();
        set_default_accept(&mut request.headers, JSON_CONTENT_TYPE);
        Ok(request)
    }
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}
#[doc = "Builds and executes requests for operations under `/me/mailFolders/delta()`."]
#[derive(Debug)]
pub struct RequestBuilder<A> {
    base: BaseRequestBuilder<A>,
}
impl<A> RequestBuilder<A> {
    pub fn new(base: BaseRequestBuilder<A>) -> Self {
        Self { base }
    }
    pub fn base(&self) -> &BaseRequestBuilder<A> {
        &self.base
    }
    #[doc = r"A builder whose requests go to `raw_url` as is, e.g. a link returned by the service."]
    pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
        Self::new(self.base.with_url(raw_url))
    }
    pub fn get_request(&self) -> Get {
        Get::new(self.base.path_parameters.clone())
    }
}
impl<A: RequestAdapter> RequestBuilder<A> {
    #[doc = "Invoke function delta"]
    pub async fn get(
        &self,
        configure: impl FnOnce(&mut Get),
    ) -> Result<DeltaResponse<Vec<MailFolder<'static>>>, Error> {
        let mut operation = self.get_request();
        configure(&mut operation);
        self.base.adapter.send(&operation).await
    }
    #[doc = r"Resume a delta query from a link returned by a previous round."]
    pub async fn get_delta(
        &self,
        link: &str,
        configure: impl FnOnce(&mut GetDelta),
    ) -> Result<DeltaResponse<Vec<MailFolder<'static>>>, Error> {
        let mut operation = GetDelta::try_from(link)?;
        configure(&mut operation);
        self.base.adapter.send(&operation).await
    }
}
