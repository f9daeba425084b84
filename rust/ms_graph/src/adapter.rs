/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! The seam between operations and the HTTP stack.
//!
//! A [`RequestAdapter`] only has to know how to perform one exchange
//! ([`RequestAdapter::execute`]). Filling in the service root, mapping error
//! statuses and deserializing the response are shared by every adapter and
//! provided by the trait.

use std::str::FromStr;

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::request::{BASE_URL_PARAMETER, RequestInformation};
use crate::types::o_data_errors::o_data_error::ODataError;
use crate::{Error, Operation, Paginated};

/// Builds the error returned for a given status and raw response body.
pub type ErrorFactory = fn(StatusCode, &[u8]) -> Error;

/// Error statuses mapped to the factory producing the error for them. Keys are
/// either an exact status (`"404"`), a status class (`"4XX"`), or `"XXX"`
/// for any error status.
pub type ErrorMapping = &'static [(&'static str, ErrorFactory)];

/// The mapping used by every Graph operation: any client or server error is
/// expected to carry an [`ODataError`].
pub const ODATA_ERROR_MAPPING: ErrorMapping = &[
    ("4XX", odata_error as ErrorFactory),
    ("5XX", odata_error as ErrorFactory),
];

/// A raw response, before any interpretation of its body.
#[derive(Clone, Debug)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

#[allow(async_fn_in_trait)]
pub trait RequestAdapter {
    /// The service root, e.g. `https://graph.microsoft.com/v1.0`.
    fn base_url(&self) -> &str;

    /// Perform the request. Only transport failures are errors here; error
    /// statuses are returned like any other response.
    async fn execute(&self, request: RequestInformation) -> Result<Response, Error>;

    /// Send `operation` and deserialize the JSON response.
    async fn send<Op: Operation>(&self, operation: &Op) -> Result<Op::Response<'static>, Error> {
        let response = dispatch(self, operation).await?;
        if response.body.is_empty() {
            return Err(Error::UnexpectedResponse(format!(
                "empty response body with status {}",
                response.status
            )));
        }
        Ok(serde_json::from_slice(&response.body)?)
    }

    /// Send `operation` and deserialize the JSON response, if there is one.
    /// Writes may be answered with `204 No Content` or `202 Accepted` and no
    /// body, e.g. when the caller asked for `Prefer: return=minimal`.
    async fn send_optional<Op: Operation>(
        &self,
        operation: &Op,
    ) -> Result<Option<Op::Response<'static>>, Error> {
        let response = dispatch(self, operation).await?;
        if response.status == StatusCode::NO_CONTENT
            || response.body.iter().all(u8::is_ascii_whitespace)
        {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&response.body)?))
    }

    /// Send `operation`, ignoring any response body.
    async fn send_no_content<Op: Operation>(&self, operation: &Op) -> Result<(), Error> {
        dispatch(self, operation).await?;
        Ok(())
    }

    /// Send `operation` and parse the `text/plain` response, as returned by
    /// e.g. `$count` segments.
    async fn send_primitive<Op>(&self, operation: &Op) -> Result<Op::Response<'static>, Error>
    where
        Op: Operation,
        Op::Response<'static>: FromStr,
    {
        let response = dispatch(self, operation).await?;
        let text = std::str::from_utf8(&response.body)
            .map_err(|err| Error::UnexpectedResponse(err.to_string()))?
            .trim();
        text.parse()
            .map_err(|_| Error::UnexpectedResponse(text.to_string()))
    }

    /// Send a paginated `operation`, then follow next links until the
    /// service reports no more pages.
    async fn send_all_pages<Op, T>(&self, operation: &Op) -> Result<Vec<T>, Error>
    where
        Op: Operation<Response<'static> = Paginated<T>>,
        T: DeserializeOwned,
    {
        let mut pages = Vec::new();
        let mut page = self.send(operation).await?;
        loop {
            let next_page = page.next_page();
            pages.push(page.response);
            match next_page {
                Some(next_page) => page = self.send(&next_page).await?,
                None => break,
            }
        }
        Ok(pages)
    }
}

async fn dispatch<A, Op>(adapter: &A, operation: &Op) -> Result<Response, Error>
where
    A: RequestAdapter + ?Sized,
    Op: Operation,
{
    let mut request = operation.build()?;
    request
        .path_parameters
        .entry(BASE_URL_PARAMETER.to_string())
        .or_insert_with(|| adapter.base_url().trim_end_matches('/').to_string());

    log::debug!("{} {}", request.method, request.uri()?);
    let response = adapter.execute(request).await?;

    let status = response.status;
    if status.is_client_error() || status.is_server_error() {
        log::warn!("request failed with status {status}");
        return Err(map_error(Op::ERROR_MAPPING, status, &response.body));
    }

    Ok(response)
}

/// Find the error for `status`, trying the exact code, then its class, then
/// the catch-all. Statuses with no entry produce [`Error::Status`].
pub fn map_error(mapping: ErrorMapping, status: StatusCode, body: &[u8]) -> Error {
    let code = status.as_str();
    let class = format!("{}XX", &code[..1]);

    [code, class.as_str(), "XXX"]
        .into_iter()
        .find_map(|key| {
            mapping
                .iter()
                .find(|(candidate, _)| *candidate == key)
                .map(|(_, factory)| factory)
        })
        .map_or_else(|| status_error(status, body), |factory| factory(status, body))
}

/// Parse the body as an [`ODataError`]. Bodies that are not one are reported
/// as a plain status error.
pub fn odata_error(status: StatusCode, body: &[u8]) -> Error {
    match serde_json::from_slice::<ODataError<'static>>(body) {
        Ok(error) if error.error().is_ok() => Error::OData {
            status,
            error: Box::new(error),
        },
        _ => status_error(status, body),
    }
}

fn status_error(status: StatusCode, body: &[u8]) -> Error {
    Error::Status {
        status,
        body: String::from_utf8_lossy(body).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::{me, me_mail_folders, users_count, users_user_id};
    use crate::types::user::User;
    use crate::request::PathParameters;
    use std::sync::Mutex;

    const ODATA_BODY: &str = r#"{"error": {"code": "Request_ResourceNotFound", "message": "Resource 'x' does not exist."}}"#;

    /// Replays canned responses and records the URIs it was asked for.
    struct FakeAdapter {
        responses: Mutex<Vec<(StatusCode, &'static str)>>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeAdapter {
        fn new(mut responses: Vec<(StatusCode, &'static str)>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl RequestAdapter for FakeAdapter {
        fn base_url(&self) -> &str {
            "https://graph.microsoft.com/v1.0/"
        }

        async fn execute(&self, request: RequestInformation) -> Result<Response, Error> {
            self.requests.lock().unwrap().push(request.uri()?.to_string());
            let (status, body) = self.responses.lock().unwrap().pop().unwrap();
            Ok(Response {
                status,
                headers: HeaderMap::new(),
                body: body.as_bytes().to_vec(),
            })
        }
    }

    fn not_found(_: StatusCode, _: &[u8]) -> Error {
        Error::NotFound
    }

    fn class(_: StatusCode, _: &[u8]) -> Error {
        Error::UnexpectedResponse("class".to_string())
    }

    fn any(_: StatusCode, _: &[u8]) -> Error {
        Error::UnexpectedResponse("any".to_string())
    }

    #[test]
    fn mapping_prefers_exact_then_class_then_any() {
        const MAPPING: ErrorMapping = &[
            ("XXX", any as ErrorFactory),
            ("4XX", class as ErrorFactory),
            ("404", not_found as ErrorFactory),
        ];

        assert!(matches!(
            map_error(MAPPING, StatusCode::NOT_FOUND, b""),
            Error::NotFound
        ));
        assert!(matches!(
            map_error(MAPPING, StatusCode::FORBIDDEN, b""),
            Error::UnexpectedResponse(which) if which == "class"
        ));
        assert!(matches!(
            map_error(MAPPING, StatusCode::BAD_GATEWAY, b""),
            Error::UnexpectedResponse(which) if which == "any"
        ));
        assert!(matches!(
            map_error(&[], StatusCode::BAD_GATEWAY, b"oops"),
            Error::Status { status, body } if status == StatusCode::BAD_GATEWAY && body == "oops"
        ));
    }

    #[test]
    fn odata_mapping() {
        match map_error(ODATA_ERROR_MAPPING, StatusCode::NOT_FOUND, ODATA_BODY.as_bytes()) {
            Error::OData { status, error } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                let main = error.error().unwrap();
                assert_eq!(main.code().unwrap(), "Request_ResourceNotFound");
            }
            other => panic!("unexpected error {other:?}"),
        }

        assert!(matches!(
            map_error(ODATA_ERROR_MAPPING, StatusCode::SERVICE_UNAVAILABLE, b"<html>"),
            Error::Status { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[tokio::test]
    async fn send_fills_base_url_and_deserializes() {
        let adapter = FakeAdapter::new(vec![(StatusCode::OK, r#"{"id": "1", "displayName": "Adele Vance"}"#)]);
        let user = adapter.send(&me::Get::new(PathParameters::new())).await.unwrap();

        assert_eq!(user.display_name().unwrap(), Some("Adele Vance"));
        assert_eq!(adapter.requests(), vec!["https://graph.microsoft.com/v1.0/me"]);
    }

    #[tokio::test]
    async fn send_rejects_empty_body() {
        let adapter = FakeAdapter::new(vec![(StatusCode::OK, "")]);
        let result = adapter.send(&me::Get::new(PathParameters::new())).await;
        assert!(matches!(result, Err(Error::UnexpectedResponse(_))));
    }

    #[tokio::test]
    async fn send_optional_accepts_empty_success() {
        let patch = || users_user_id::Patch::new(PathParameters::new(), User::default());

        let adapter = FakeAdapter::new(vec![(StatusCode::NO_CONTENT, "")]);
        assert!(adapter.send_optional(&patch()).await.unwrap().is_none());

        let adapter = FakeAdapter::new(vec![(StatusCode::ACCEPTED, "")]);
        assert!(adapter.send_optional(&patch()).await.unwrap().is_none());

        let adapter = FakeAdapter::new(vec![(StatusCode::OK, r#"{"id": "42", "jobTitle": "Designer"}"#)]);
        let user = adapter.send_optional(&patch()).await.unwrap().unwrap();
        assert_eq!(user.job_title().unwrap(), Some("Designer"));

        let adapter = FakeAdapter::new(vec![(StatusCode::BAD_REQUEST, ODATA_BODY)]);
        assert!(matches!(
            adapter.send_optional(&patch()).await,
            Err(Error::OData { status, .. }) if status == StatusCode::BAD_REQUEST
        ));
    }

    #[tokio::test]
    async fn send_maps_error_status() {
        let adapter = FakeAdapter::new(vec![(StatusCode::NOT_FOUND, ODATA_BODY)]);
        let result = adapter.send(&me::Get::new(PathParameters::new())).await;
        assert!(matches!(result, Err(Error::OData { status, .. }) if status == StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn send_primitive_parses_text() {
        let adapter = FakeAdapter::new(vec![(StatusCode::OK, "42\n")]);
        let count = adapter
            .send_primitive(&users_count::Get::new(PathParameters::new()))
            .await
            .unwrap();
        assert_eq!(count, 42);

        let adapter = FakeAdapter::new(vec![(StatusCode::OK, "many")]);
        let result = adapter
            .send_primitive(&users_count::Get::new(PathParameters::new()))
            .await;
        assert!(matches!(result, Err(Error::UnexpectedResponse(text)) if text == "many"));
    }

    #[tokio::test]
    async fn send_all_pages_follows_next_links() {
        let adapter = FakeAdapter::new(vec![
            (
                StatusCode::OK,
                r#"{"value": [{"id": "1"}], "@odata.nextLink": "https://graph.microsoft.com/v1.0/me/mailFolders?%24skiptoken=2"}"#,
            ),
            (StatusCode::OK, r#"{"value": [{"id": "2"}, {"id": "3"}]}"#),
        ]);

        let pages = adapter
            .send_all_pages(&me_mail_folders::Get::new(PathParameters::new()))
            .await
            .unwrap();

        let ids: Vec<String> = pages
            .iter()
            .flat_map(|page| page.value().unwrap())
            .map(|folder| folder.entity().id().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(
            adapter.requests(),
            vec![
                "https://graph.microsoft.com/v1.0/me/mailFolders",
                "https://graph.microsoft.com/v1.0/me/mailFolders?%24skiptoken=2",
            ]
        );
    }

    #[tokio::test]
    async fn explicit_base_url_wins() {
        let adapter = FakeAdapter::new(vec![(StatusCode::NO_CONTENT, "")]);
        let path_parameters = PathParameters::from([(
            BASE_URL_PARAMETER.to_string(),
            "https://graph.microsoft.us/v1.0".to_string(),
        )]);
        adapter
            .send_no_content(&me::Get::new(path_parameters))
            .await
            .unwrap();
        assert_eq!(adapter.requests(), vec!["https://graph.microsoft.us/v1.0/me"]);
    }
}
