/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use http::{HeaderValue, header};
use ms_graph::{GraphServiceClient, RequestAdapter, RequestInformation, Response};
use url::Url;

use crate::auth::AuthenticationProvider;
use crate::config::AdapterConfig;
use crate::error::{Error, Result};

/// A [`RequestAdapter`] sending requests with `reqwest`.
#[derive(Debug)]
pub struct GraphAdapter<P> {
    client: reqwest::Client,
    base_url: Url,
    auth: P,
}

impl<P> GraphAdapter<P> {
    /// An adapter for the global Graph deployment.
    pub fn new(auth: P) -> Result<Self> {
        Self::with_config(auth, &AdapterConfig::default())
    }

    pub fn with_config(auth: P, config: &AdapterConfig) -> Result<Self> {
        let base_url = config.service_root()?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(GraphAdapter {
            client: builder.build()?,
            base_url,
            auth,
        })
    }

    /// The root of the request builder tree, sending through this adapter.
    pub fn into_client(self) -> GraphServiceClient<Self> {
        GraphServiceClient::new(self)
    }
}

impl<P: AuthenticationProvider> GraphAdapter<P> {
    async fn send_request(&self, uri: &str, request: RequestInformation) -> Result<Response> {
        let url = Url::parse(uri)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::UnsupportedScheme(url.scheme().into()));
        }

        let mut headers = request.headers;
        if !headers.contains_key(header::AUTHORIZATION) {
            if let Some(value) = self.auth.authorization_header(&url).await? {
                let mut value = HeaderValue::try_from(value)?;
                value.set_sensitive(true);
                headers.insert(header::AUTHORIZATION, value);
            }
        }

        let mut request_builder = self.client.request(request.method, url).headers(headers);
        if let Some(content) = request.content {
            request_builder = request_builder.body(content);
        }

        let response = request_builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

impl<P: AuthenticationProvider> RequestAdapter for GraphAdapter<P> {
    fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    async fn execute(
        &self,
        request: RequestInformation,
    ) -> std::result::Result<Response, ms_graph::Error> {
        let uri = request.uri()?.to_string();
        self.send_request(&uri, request).await.map_err(|err| {
            log::error!("failed to send request: {err}");
            err.into()
        })
    }
}
