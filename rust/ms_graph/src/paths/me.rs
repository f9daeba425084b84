/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Provides operations to manage the user singleton.\n\nAuto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use crate::types::user::*;
use crate::*;
use http::{HeaderMap, method::Method};
pub const URL_TEMPLATE: &str = "{+baseurl}/me{?%24expand,%24select}";
#[doc = "Get a user\n\nRetrieve the properties and relationships of user object. This operation returns by default only a subset of the more commonly used properties for each user. To get properties that are not returned by default, do a GET operation for the user and specify the properties in a `$select` OData query option.\n\nMore information available via [Microsoft documentation](https://learn.microsoft.com/graph/api/user-get?view=graph-rest-1.0)."]
#[derive(Debug)]
pub struct Get {
    path_parameters: PathParameters,
    headers: HeaderMap,
    query: QueryOptions<UserSelection>,
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
    type Response<'response> = User<'response>;
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
    type Properties = UserSelection;
    fn query_options(&mut self) -> &mut QueryOptions<Self::Properties> {
        &mut self.query
    }
}
impl Expand for Get {}
impl Select for Get {}
#[doc = "Update user\n\nUpdate the properties of a user object.\n\nMore information available via [Microsoft documentation](https://learn.microsoft.com/graph/api/user-update?view=graph-rest-1.0)."]
#[derive(Debug)]
pub struct Patch<'body> {
    path_parameters: PathParameters,
    headers: HeaderMap,
    body: User<'body>,
}
impl<'body> Patch<'body> {
    pub fn new(path_parameters: PathParameters, body: User<'body>) -> Self {
        Self {
            path_parameters,
            headers: HeaderMap::new(),
            body,
        }
    }
}
impl<'body> Operation for Patch<'body> {
    const METHOD: Method = Method::PATCH;
    type Body = User<'body>;
    type Response<'response> = User<'response>;
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
#[doc = "Builds and executes requests for operations under `/me`."]
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
    pub fn mail_folders(&self) -> super::me_mail_folders::RequestBuilder<A> {
        super::me_mail_folders::RequestBuilder::new(self.base.clone())
    }
    pub fn messages(&self) -> super::me_messages::RequestBuilder<A> {
        super::me_messages::RequestBuilder::new(self.base.clone())
    }
    pub fn send_mail(&self) -> super::me_send_mail::RequestBuilder<A> {
        super::me_send_mail::RequestBuilder::new(self.base.clone())
    }
    pub fn get_request(&self) -> Get {
        Get::new(self.base.path_parameters.clone())
    }
    pub fn patch_request<'body>(&self, body: User<'body>) -> Patch<'body> {
        Patch::new(self.base.path_parameters.clone(), body)
    }
}
impl<A: RequestAdapter> RequestBuilder<A> {
    #[doc = "Get a user"]
    pub async fn get(&self, configure: impl FnOnce(&mut Get)) -> Result<User<'static>, Error> {
        let mut operation = self.get_request();
        configure(&mut operation);
        self.base.adapter.send(&operation).await
    }
    #[doc = "Update user"]
    pub async fn patch(
        &self,
        body: User<'_>,
        configure: impl FnOnce(&mut Patch<'_>),
    ) -> Result<Option<User<'static>>, Error> {
        let mut operation = self.patch_request(body);
        configure(&mut operation);
        self.base.adapter.send_optional(&operation).await
    }
}
