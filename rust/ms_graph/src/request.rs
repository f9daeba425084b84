/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::collections::BTreeMap;

use http::{HeaderMap, HeaderValue, Method, header};
use serde::Serialize;

use crate::Error;
use crate::uri_template::{self, TemplateValue};

/// Values for the variables of a URL template, keyed by the variable name as
/// written in the template (e.g. `user%2Did`).
pub type PathParameters = BTreeMap<String, String>;

/// Template variable holding the service root, e.g.
/// `https://graph.microsoft.com/v1.0`.
pub const BASE_URL_PARAMETER: &str = "baseurl";

/// Path parameter which, when set, replaces the URL template entirely.
pub const RAW_URL_PARAMETER: &str = "request-raw-url";

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const TEXT_CONTENT_TYPE: &str = "text/plain";

/// Everything needed to send one request, independent of any transport.
#[derive(Clone, Debug)]
pub struct RequestInformation {
    pub method: Method,
    pub url_template: &'static str,
    pub path_parameters: PathParameters,
    pub query_parameters: BTreeMap<String, TemplateValue>,
    pub headers: HeaderMap,
    pub content: Option<Vec<u8>>,
}

impl RequestInformation {
    pub fn new(method: Method, url_template: &'static str, path_parameters: PathParameters) -> Self {
        Self {
            method,
            url_template,
            path_parameters,
            query_parameters: BTreeMap::new(),
            headers: HeaderMap::new(),
            content: None,
        }
    }

    /// A request to a URL received from the service (e.g. a next link), which
    /// must be used as is.
    pub fn from_raw_url(method: Method, url: impl Into<String>) -> Self {
        let path_parameters = PathParameters::from([(RAW_URL_PARAMETER.to_string(), url.into())]);
        Self::new(method, "", path_parameters)
    }

    /// Expand the URL template with the path and query parameters.
    pub fn uri(&self) -> Result<http::Uri, Error> {
        if let Some(raw_url) = self.path_parameters.get(RAW_URL_PARAMETER) {
            return Ok(raw_url.parse()?);
        }

        let mut variables: BTreeMap<String, TemplateValue> = self
            .path_parameters
            .iter()
            .map(|(name, value)| (name.clone(), TemplateValue::from(value.as_str())))
            .collect();
        variables.extend(self.query_parameters.clone());

        let expanded = uri_template::expand(self.url_template, &variables)?;
        Ok(expanded.parse()?)
    }

    /// Bind a query parameter. `name` is the template variable name, i.e. the
    /// percent-encoded form such as `%24select`.
    pub fn add_query_parameter(&mut self, name: &str, value: impl Into<TemplateValue>) {
        self.query_parameters.insert(name.to_string(), value.into());
    }

    /// Ask for `media_type`, replacing any previous choice.
    pub fn accept(&mut self, media_type: &'static str) {
        self.headers
            .insert(header::ACCEPT, HeaderValue::from_static(media_type));
    }

    /// Serialize `body` as the JSON content of the request.
    pub fn set_json_content<T: Serialize>(&mut self, body: &T) -> Result<(), Error> {
        self.content = Some(serde_json::to_vec(body)?);
        self.headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_from_template() {
        let path_parameters = PathParameters::from([
            (
                BASE_URL_PARAMETER.to_string(),
                "https://graph.microsoft.com/v1.0".to_string(),
            ),
            ("team%2Did".to_string(), "42".to_string()),
        ]);
        let mut request = RequestInformation::new(
            Method::GET,
            "{+baseurl}/teams/{team%2Did}/channels{?%24filter,%24top}",
            path_parameters,
        );
        request.add_query_parameter("%24top", "10");

        assert_eq!(
            request.uri().unwrap(),
            "https://graph.microsoft.com/v1.0/teams/42/channels?%24top=10"
        );
    }

    #[test]
    fn raw_url_bypasses_template() {
        let request = RequestInformation::from_raw_url(
            Method::GET,
            "https://graph.microsoft.com/v1.0/me/mailFolders?%24skip=10",
        );
        assert_eq!(
            request.uri().unwrap(),
            "https://graph.microsoft.com/v1.0/me/mailFolders?%24skip=10"
        );
    }

    #[test]
    fn json_content_sets_content_type() {
        let mut request =
            RequestInformation::new(Method::POST, "{+baseurl}/me/sendMail", PathParameters::new());
        request
            .set_json_content(&serde_json::json!({"SaveToSentItems": false}))
            .unwrap();

        assert_eq!(
            request.headers.get(header::CONTENT_TYPE).unwrap(),
            JSON_CONTENT_TYPE
        );
        assert_eq!(
            request.content.as_deref(),
            Some(br#"{"SaveToSentItems":false}"#.as_slice())
        );
    }

    #[test]
    fn malformed_template_is_an_error() {
        let request =
            RequestInformation::new(Method::GET, "{+baseurl}/me{?%24select", PathParameters::new());
        assert!(matches!(request.uri(), Err(Error::Template(_))));
    }

    #[test]
    fn explicit_accept_wins_over_default() {
        let mut request =
            RequestInformation::new(Method::GET, "{+baseurl}/users/$count", PathParameters::new());
        request.accept(TEXT_CONTENT_TYPE);
        crate::set_default_accept(&mut request.headers, JSON_CONTENT_TYPE);
        assert_eq!(request.headers.get(header::ACCEPT).unwrap(), TEXT_CONTENT_TYPE);

        request.accept(JSON_CONTENT_TYPE);
        assert_eq!(request.headers.get(header::ACCEPT).unwrap(), JSON_CONTENT_TYPE);
    }
}
