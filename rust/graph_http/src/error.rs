/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use thiserror::Error;

/// An error that happened while preparing, authenticating or sending a
/// request.
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be sent, or its response could not be read.
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// A configured or expanded URL could not be parsed.
    #[error("invalid url")]
    Url(#[from] url::ParseError),

    /// The URL features a protocol scheme that is not supported, i.e. one
    /// which is neither HTTP nor HTTPS, or plain HTTP where a bearer token
    /// would be sent to a remote host.
    #[error("url scheme is not supported: {0}")]
    UnsupportedScheme(String),

    /// No access token could be obtained for the request.
    #[error("failed to authenticate: {0}")]
    Authentication(String),

    /// A header value built from a token or configuration is not valid.
    #[error("invalid header value")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),
}

impl From<Error> for ms_graph::Error {
    fn from(value: Error) -> Self {
        ms_graph::Error::Transport(Box::new(value))
    }
}

/// A result which error type is always an [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;
