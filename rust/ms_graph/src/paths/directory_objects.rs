/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Provides operations to manage the collection of directoryObject entities.\n\nAuto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::types::directory_object::*;
use crate::types::directory_object_collection_response::*;
use crate::*;
use http::{HeaderMap, method::Method};
pub const URL_TEMPLATE: &str = "{+baseurl}/directoryObjects{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
#[doc = "List directoryObjects\n\nGet the directory object collection.\n\nMore information available via [Microsoft documentation](https://learn.microsoft.com/graph/api/directoryobject-list?view=graph-rest-1.0)."]
#[derive(Debug)]
pub struct Get {
    path_parameters: PathParameters,
    headers: HeaderMap,
    query: QueryOptions<DirectoryObjectSelection>,
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
    type Response<'response> = Paginated<DirectoryObjectCollectionResponse<'response>>;
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
    type Properties = DirectoryObjectSelection;
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
#[doc = "Add new entity to directoryObjects\n\nCreate a new directory object.\n\nMore information available via [Microsoft documentation](https://learn.microsoft.com/graph/api/directoryobject-post?view=graph-rest-1.0)."]
#[derive(Debug)]
pub struct Post<'body> {
    path_parameters: PathParameters,
    headers: HeaderMap,
    body: DirectoryObject<'body>,
}
impl<'body> Post<'body> {
    pub fn new(path_parameters: PathParameters, body: DirectoryObject<'body>) -> Self {
        Self {
            path_parameters,
            headers: HeaderMap::new(),
            body,
        }
    }
}
impl<'body> Operation for Post<'body> {
    const METHOD: Method = Method::POST;
    type Body = DirectoryObject<'body>;
    type Response<'response> = DirectoryObject<'response>;
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
#[doc = "Builds and executes requests for operations under `/directoryObjects`."]
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
    #[doc = "Navigate to the item identified by `directory_object_id`."]
    pub fn by_directory_object_id(
        &self,
        directory_object_id: impl Into<String>,
    ) -> super::directory_objects_directory_object_id::RequestBuilder<A> {
        super::directory_objects_directory_object_id::RequestBuilder::new(
            self.base.child("directoryObject%2Did", directory_object_id),
        )
    }
    pub fn get_request(&self) -> Get {
        Get::new(self.base.path_parameters.clone())
    }
    pub fn post_request<'body>(&self, body: DirectoryObject<'body>) -> Post<'body> {
        Post::new(self.base.path_parameters.clone(), body)
    }
}
impl<A: RequestAdapter> RequestBuilder<A> {
    #[doc = "List directoryObjects"]
    pub async fn get(
        &self,
        configure: impl FnOnce(&mut Get),
    ) -> Result<Paginated<DirectoryObjectCollectionResponse<'static>>, Error> {
        let mut operation = self.get_request();
        configure(&mut operation);
        self.base.adapter.send(&operation).await
    }
    #[doc = r"Like `get`, then follows next links until every page has been fetched."]
    pub async fn get_all_pages(
        &self,
        configure: impl FnOnce(&mut Get),
    ) -> Result<Vec<DirectoryObjectCollectionResponse<'static>>, Error> {
        let mut operation = self.get_request();
        configure(&mut operation);
        self.base.adapter.send_all_pages(&operation).await
    }
    #[doc = "Add new entity to directoryObjects"]
    pub async fn post(
        &self,
        body: DirectoryObject<'_>,
        configure: impl FnOnce(&mut Post<'_>),
    ) -> Result<Option<DirectoryObject<'static>>, Error> {
        let mut operation = self.post_request(body);
        configure(&mut operation);
        self.base.adapter.send_optional(&operation).await
    }
}
