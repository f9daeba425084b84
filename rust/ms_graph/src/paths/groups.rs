/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Provides operations to manage the collection of group entities.\n\nAuto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::types::group::*;
use crate::types::group_collection_response::*;
use crate::*;
use http::{HeaderMap, method::Method};
pub const URL_TEMPLATE: &str = "{+baseurl}/groups{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";
#[doc = "List groups\n\nList all the groups in an organization, including but not limited to Microsoft 365 groups.\n\nMore information available via [Microsoft documentation](https://learn.microsoft.com/graph/api/group-list?view=graph-rest-1.0)."]
#[derive(Debug)]
pub struct Get {
    path_parameters: PathParameters,
    headers: HeaderMap,
    query: QueryOptions<GroupSelection>,
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
    type Response<'response> = Paginated<GroupCollectionResponse<'response>>;
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
    type Properties = GroupSelection;
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
#[doc = "Create group\n\nCreate a new group as specified in the request body. You can create a Microsoft 365 group, a security group or a mail-enabled security group.\n\nMore information available via [Microsoft documentation](https://learn.microsoft.com/graph/api/group-post-groups?view=graph-rest-1.0)."]
#[derive(Debug)]
pub struct Post<'body> {
    path_parameters: PathParameters,
    headers: HeaderMap,
    body: Group<'body>,
}
impl<'body> Post<'body> {
    pub fn new(path_parameters: PathParameters, body: Group<'body>) -> Self {
        Self {
            path_parameters,
            headers: HeaderMap::new(),
            body,
        }
    }
}
impl<'body> Operation for Post<'body> {
    const METHOD: Method = Method::POST;
    type Body = Group<'body>;
    type Response<'response> = Group<'response>;
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
#[doc = "Builds and executes requests for operations under `/groups`."]
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
    #[doc = "Navigate to the item identified by `group_id`."]
    pub fn by_group_id(
        &self,
        group_id: impl Into<String>,
    ) -> super::groups_group_id::RequestBuilder<A> {
        super::groups_group_id::RequestBuilder::new(self.base.child("group%2Did", group_id))
    }
    pub fn get_request(&self) -> Get {
        Get::new(self.base.path_parameters.clone())
    }
    pub fn post_request<'body>(&self, body: Group<'body>) -> Post<'body> {
        Post::new(self.base.path_parameters.clone(), body)
    }
}
impl<A: RequestAdapter> RequestBuilder<A> {
    #[doc = "List groups"]
    pub async fn get(
        &self,
        configure: impl FnOnce(&mut Get),
    ) -> Result<Paginated<GroupCollectionResponse<'static>>, Error> {
        let mut operation = self.get_request();
        configure(&mut operation);
        self.base.adapter.send(&operation).await
    }
    #[doc = r"Like `get`, then follows next links until every page has been fetched."]
    pub async fn get_all_pages(
        &self,
        configure: impl FnOnce(&mut Get),
    ) -> Result<Vec<GroupCollectionResponse<'static>>, Error> {
        let mut operation = self.get_request();
        configure(&mut operation);
        self.base.adapter.send_all_pages(&operation).await
    }
    #[doc = "Create group"]
    pub async fn post(
        &self,
        body: Group<'_>,
        configure: impl FnOnce(&mut Post<'_>),
    ) -> Result<Option<Group<'static>>, Error> {
        let mut operation = self.post_request(body);
        configure(&mut operation);
        self.base.adapter.send_optional(&operation).await
    }
}
