/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Provides operations to manage the collection of group entities.\n\nAuto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::types::group::*;
use crate::*;
use http::{HeaderMap, method::Method};
pub const URL_TEMPLATE: &str = "{+baseurl}/groups/{group%2Did}{?%24expand,%24select}";
#[doc = "Get group\n\nGet the properties and relationships of a group object. This operation returns by default only a subset of all the available properties.\n\nMore information available via [Microsoft documentation](https://learn.microsoft.com/graph/api/group-get?view=graph-rest-1.0)."]
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
    type Response<'response> = Group<'response>;
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
impl Expand for Get {}
impl Select for Get {}
#[doc = "Update group\n\nUpdate the properties of a group object.\n\nMore information available via [Microsoft documentation](https://learn.microsoft.com/graph/api/group-update?view=graph-rest-1.0)."]
#[derive(Debug)]
pub struct Patch<'body> {
    path_parameters: PathParameters,
    headers: HeaderMap,
    body: Group<'body>,
}
impl<'body> Patch<'body> {
    pub fn new(path_parameters: PathParameters, body: Group<'body>) -> Self {
        Self {
            path_parameters,
            headers: HeaderMap::new(),
            body,
        }
    }
}
impl<'body> Operation for Patch<'body> {
    const METHOD: Method = Method::PATCH;
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
#[doc = "Delete group\n\nDelete a group. When deleted, Microsoft 365 groups are moved to a temporary container and can be restored within 30 days.\n\nMore information available via [Microsoft documentation](https://learn.microsoft.com/graph/api/group-delete?view=graph-rest-1.0)."]
#[derive(Debug)]
pub struct Delete {
    path_parameters: PathParameters,
    headers: HeaderMap,
}
impl Delete {
    pub fn new(path_parameters: PathParameters) -> Self {
        Self {
            path_parameters,
            headers: HeaderMap::new(),
        }
    }
}
impl Operation for Delete {
    const METHOD: Method = Method::DELETE;
    type Body = ();
    type Response<'response> = ();
    fn build(&self) -> Result<RequestInformation, Error> {
        let mut request =
            RequestInformation::new(Self::METHOD, URL_TEMPLATE, self.path_parameters.clone());
        request.headers = self.headers.clone();
        set_default_accept(&mut request.headers, JSON_CONTENT_TYPE);
        Ok(request)
    }
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}
#[doc = "Builds and executes requests for operations under `/groups/{group-id}`."]
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
    pub fn patch_request<'body>(&self, body: Group<'body>) -> Patch<'body> {
        Patch::new(self.base.path_parameters.clone(), body)
    }
    pub fn delete_request(&self) -> Delete {
        Delete::new(self.base.path_parameters.clone())
    }
}
impl<A: RequestAdapter> RequestBuilder<A> {
    #[doc = "Get group"]
    pub async fn get(&self, configure: impl FnOnce(&mut Get)) -> Result<Group<'static>, Error> {
        let mut operation = self.get_request();
        configure(&mut operation);
        self.base.adapter.send(&operation).await
    }
    #[doc = "Update group"]
    pub async fn patch(
        &self,
        body: Group<'_>,
        configure: impl FnOnce(&mut Patch<'_>),
    ) -> Result<Option<Group<'static>>, Error> {
        let mut operation = self.patch_request(body);
        configure(&mut operation);
        self.base.adapter.send_optional(&operation).await
    }
    #[doc = "Delete group"]
    pub async fn delete(&self, configure: impl FnOnce(&mut Delete)) -> Result<(), Error> {
        let mut operation = self.delete_request();
        configure(&mut operation);
        self.base.adapter.send_no_content(&operation).await
    }
}
