/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! A [`ms_graph::RequestAdapter`] sending requests over HTTP with `reqwest`.
//!
//! ## Sending requests
//!
//! ```rust,no_run
//! use graph_http::{BearerTokenAuthenticationProvider, GraphAdapter, StaticAccessToken};
//! use ms_graph::Top;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let auth = BearerTokenAuthenticationProvider::new(StaticAccessToken::new("eyJ0eXAi..."));
//! let client = GraphAdapter::new(auth)?.into_client();
//!
//! let folders = client.me().mail_folders().get(|get| get.top(10)).await?;
//! for folder in folders.response.value()? {
//!     println!("{:?}", folder.display_name()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Deployments other than the global one are selected through
//! [`AdapterConfig`]:
//!
//! ```rust
//! use graph_http::{AdapterConfig, AnonymousAuthenticationProvider, GraphAdapter, NationalCloud};
//!
//! # fn run() -> graph_http::Result<()> {
//! let config = AdapterConfig::for_cloud(NationalCloud::UsGovL4);
//! let adapter = GraphAdapter::with_config(AnonymousAuthenticationProvider, &config)?;
//! # Ok(())
//! # }
//! ```

mod auth;
mod client;
mod config;
mod error;

pub use auth::{
    AccessTokenProvider, AnonymousAuthenticationProvider, AuthenticationProvider,
    BearerTokenAuthenticationProvider, GRAPH_HOSTS, StaticAccessToken,
};
pub use client::GraphAdapter;
pub use config::{AdapterConfig, DEFAULT_USER_AGENT, NationalCloud};
pub use error::{Error, Result};
