/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Credentials attached to outgoing requests.

use url::Url;

use crate::error::{Error, Result};

/// Hosts of the Graph deployments, which receive bearer tokens by default.
pub const GRAPH_HOSTS: &[&str] = &[
    "graph.microsoft.com",
    "graph.microsoft.us",
    "dod-graph.microsoft.us",
    "microsoftgraph.chinacloudapi.cn",
    "canary.graph.microsoft.com",
];

#[allow(async_fn_in_trait)]
pub trait AuthenticationProvider {
    /// The value of the `Authorization` header to send to `url`, if any.
    async fn authorization_header(&self, url: &Url) -> Result<Option<String>>;
}

/// Sends requests without credentials.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnonymousAuthenticationProvider;

impl AuthenticationProvider for AnonymousAuthenticationProvider {
    async fn authorization_header(&self, _url: &Url) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Source of OAuth2 access tokens, e.g. a wrapper around an identity library.
#[allow(async_fn_in_trait)]
pub trait AccessTokenProvider {
    async fn access_token(&self, url: &Url) -> Result<String>;
}

/// A token obtained out of band.
#[derive(Clone)]
pub struct StaticAccessToken(String);

impl StaticAccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

// The token must not end up in logs.
impl std::fmt::Debug for StaticAccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("StaticAccessToken").field(&"<redacted>").finish()
    }
}

impl AccessTokenProvider for StaticAccessToken {
    async fn access_token(&self, _url: &Url) -> Result<String> {
        if self.0.is_empty() {
            return Err(Error::Authentication("empty access token".to_string()));
        }
        Ok(self.0.clone())
    }
}

/// Sends `Authorization: Bearer <token>` to allowed hosts only.
#[derive(Debug)]
pub struct BearerTokenAuthenticationProvider<T> {
    token_provider: T,
    allowed_hosts: Vec<String>,
}

impl<T> BearerTokenAuthenticationProvider<T> {
    /// A provider sending tokens to the Graph hosts in [`GRAPH_HOSTS`].
    pub fn new(token_provider: T) -> Self {
        Self::with_allowed_hosts(token_provider, GRAPH_HOSTS.iter().copied())
    }

    /// A provider sending tokens to the given hosts. An empty list allows
    /// every host.
    pub fn with_allowed_hosts<I, S>(token_provider: T, allowed_hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            token_provider,
            allowed_hosts: allowed_hosts
                .into_iter()
                .map(|host| host.into().to_ascii_lowercase())
                .collect(),
        }
    }

    fn is_allowed(&self, host: &str) -> bool {
        self.allowed_hosts.is_empty()
            || self
                .allowed_hosts
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(host))
    }
}

fn is_loopback(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "[::1]")
}

impl<T: AccessTokenProvider> AuthenticationProvider for BearerTokenAuthenticationProvider<T> {
    async fn authorization_header(&self, url: &Url) -> Result<Option<String>> {
        let Some(host) = url.host_str() else {
            return Ok(None);
        };
        if !self.is_allowed(host) {
            log::warn!("not sending access token to host {host}");
            return Ok(None);
        }
        if url.scheme() != "https" && !is_loopback(host) {
            return Err(Error::UnsupportedScheme(url.scheme().into()));
        }

        let token = self.token_provider.access_token(url).await?;
        Ok(Some(format!("Bearer {token}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn anonymous_sends_nothing() {
        let header = AnonymousAuthenticationProvider
            .authorization_header(&url("https://graph.microsoft.com/v1.0/me"))
            .await
            .unwrap();
        assert_eq!(header, None);
    }

    #[tokio::test]
    async fn bearer_token_for_graph_hosts() {
        let provider = BearerTokenAuthenticationProvider::new(StaticAccessToken::new("t0k3n"));

        let header = provider
            .authorization_header(&url("https://graph.microsoft.com/v1.0/me"))
            .await
            .unwrap();
        assert_eq!(header.as_deref(), Some("Bearer t0k3n"));

        let header = provider
            .authorization_header(&url("https://example.com/v1.0/me"))
            .await
            .unwrap();
        assert_eq!(header, None);
    }

    #[tokio::test]
    async fn bearer_token_requires_https() {
        let provider = BearerTokenAuthenticationProvider::new(StaticAccessToken::new("t0k3n"));
        let result = provider
            .authorization_header(&url("http://graph.microsoft.com/v1.0/me"))
            .await;
        assert!(matches!(result, Err(Error::UnsupportedScheme(scheme)) if scheme == "http"));

        let provider = BearerTokenAuthenticationProvider::with_allowed_hosts(
            StaticAccessToken::new("t0k3n"),
            ["127.0.0.1"],
        );
        let header = provider
            .authorization_header(&url("http://127.0.0.1:8080/v1.0/me"))
            .await
            .unwrap();
        assert_eq!(header.as_deref(), Some("Bearer t0k3n"));
    }

    #[tokio::test]
    async fn empty_token_is_an_error() {
        let provider = BearerTokenAuthenticationProvider::with_allowed_hosts(
            StaticAccessToken::new(""),
            Vec::<String>::new(),
        );
        let result = provider
            .authorization_header(&url("https://example.com/"))
            .await;
        assert!(matches!(result, Err(Error::Authentication(_))));
    }

    #[test]
    fn token_is_redacted() {
        let debug = format!("{:?}", StaticAccessToken::new("t0k3n"));
        assert!(!debug.contains("t0k3n"));
    }
}
