/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Provides operations to manage the mailFolders property of the microsoft.graph.user entity.\n\nAuto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::types::mail_folder::*;
use crate::types::mail_folder_collection_response::*;
use crate::*;
use http::{HeaderMap, method::Method};
pub const URL_TEMPLATE: &str = "{+baseurl}/me/mailFolders{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
#[doc = "List mailFolders\n\nGet the mail folder collection.\n\nMore information available via [Microsoft documentation](https://learn.microsoft.com/graph/api/user-list-mailfolders?view=graph-rest-1.0)."]
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
    type Response<'response> = Paginated<MailFolderCollectionResponse<'response>>;
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
impl Expand for Get {}
impl Filter for Get {}
impl OrderBy for Get {}
impl Search for Get {}
impl Select for Get {}
impl Skip for Get {}
impl Top for Get {}
#[doc = "Create MailFolder\n\nCreate a new mail folder.\n\nMore information available via [Microsoft documentation](https://learn.microsoft.com/graph/api/user-post-mailfolders?view=graph-rest-1.0)."]
#[derive(Debug)]
pub struct Post<'body> {
    path_parameters: PathParameters,
    headers: HeaderMap,
    body: MailFolder<'body>,
}
impl<'body> Post<'body> {
    pub fn new(path_parameters: PathParameters, body: MailFolder<'body>) -> Self {
        Self {
            path_parameters,
            headers: HeaderMap::new(),
            body,
        }
    }
}
impl<'body> Operation for Post<'body> {
    const METHOD: Method = Method::POST;
    type Body = MailFolder<'body>;
    type Response<'response> = MailFolder<'response>;
    fn build(&self) -> Result<RequestInformation, Error> {
        let mut request =
            RequestInformation::new(Self::METHOD, URL_TEMPLATE, self.path_parameters.clone());
        request.headers = self.headers.clone();
        set_default_accept(&mut request.headers, JSON_CONTENT_TYPE);
        request.set_json_content(&self.body)?;
        Ok(request)
    }
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}
#[doc = "Builds and executes requests for operations under `/me/mailFolders`."]
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
    pub fn delta(&self) -> super::me_mail_folders_delta::RequestBuilder<A> {
        super::me_mail_folders_delta::RequestBuilder::new(self.base.clone())
    }
    #[doc = "Navigate to the item identified by `mail_folder_id`."]
    pub fn by_mail_folder_id(
        &self,
        mail_folder_id: impl Into<String>,
    ) -> super::me_mail_folders_mail_folder_id::RequestBuilder<A> {
        super::me_mail_folders_mail_folder_id::RequestBuilder::new(
            self.base.child("mailFolder%2Did", mail_folder_id),
        )
    }
    pub fn get_request(&self) -> Get {
        Get::new(self.base.path_parameters.clone())
    }
    pub fn post_request<'body>(&self, body: MailFolder<'body>) -> Post<'body> {
        Post::new(self.base.path_parameters.clone(), body)
    }
}
impl<A: RequestAdapter> RequestBuilder<A> {
    #[doc = "List mailFolders"]
    pub async fn get(
        &self,
        configure: impl FnOnce(&mut Get),
    ) -> Result<Paginated<MailFolderCollectionResponse<'static>>, Error> {
        let mut operation = self.get_request();
        configure(&mut operation);
        self.base.adapter.send(&operation).await
    }
    #[doc = r"Like `get`, then follows next links until every page has been fetched."]
    pub async fn get_all_pages(
        &self,
        configure: impl FnOnce(&mut Get),
    ) -> Result<Vec<MailFolderCollectionResponse<'static>>, Error> {
        let mut operation = self.get_request();
        configure(&mut operation);
        self.base.adapter.send_all_pages(&operation).await
    }
    #[doc = "Create MailFolder"]
    pub async fn post(
        &self,
        body: MailFolder<'_>,
        configure: impl FnOnce(&mut Post<'_>),
    ) -> Result<Option<MailFolder<'static>>, Error> {
        let mut operation = self.post_request(body);
        configure(&mut operation);
        self.base.adapter.send_optional(&operation).await
    }
}
