/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::{Error, Result};

/// The national cloud deployments of Microsoft Graph.
///
/// See [Microsoft documentation](https://learn.microsoft.com/en-us/graph/deployments).
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub enum NationalCloud {
    #[default]
    Global,
    /// Microsoft Graph for US Government L4.
    UsGovL4,
    /// Microsoft Graph for US Government L5 (DOD).
    UsGovL5,
    /// Microsoft Graph China operated by 21Vianet.
    China,
}

impl NationalCloud {
    /// The `v1.0` service root of this deployment.
    pub fn base_url(self) -> &'static str {
        match self {
            NationalCloud::Global => "https://graph.microsoft.com/v1.0",
            NationalCloud::UsGovL4 => "https://graph.microsoft.us/v1.0",
            NationalCloud::UsGovL5 => "https://dod-graph.microsoft.us/v1.0",
            NationalCloud::China => "https://microsoftgraph.chinacloudapi.cn/v1.0",
        }
    }
}

pub const DEFAULT_USER_AGENT: &str = concat!("graph_http/", env!("CARGO_PKG_VERSION"));

/// Settings for a [`crate::GraphAdapter`]. Every field has a default, so any
/// subset can be read from a configuration file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AdapterConfig {
    /// The service root requests are sent to.
    pub base_url: String,

    /// When set, overrides `base_url` with the root of that deployment.
    pub national_cloud: Option<NationalCloud>,

    pub timeout_secs: Option<u64>,

    pub user_agent: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            base_url: NationalCloud::Global.base_url().to_string(),
            national_cloud: None,
            timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl AdapterConfig {
    pub fn for_cloud(cloud: NationalCloud) -> Self {
        Self {
            national_cloud: Some(cloud),
            ..Self::default()
        }
    }

    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            national_cloud: None,
            ..self
        }
    }

    /// The service root to use, validated as an HTTP(S) URL.
    pub fn service_root(&self) -> Result<Url> {
        let raw = match self.national_cloud {
            Some(cloud) => cloud.base_url(),
            None => self.base_url.as_str(),
        };

        let url = Url::parse(raw.trim_end_matches('/'))?;
        // url.scheme() is always lower-cased.
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::UnsupportedScheme(url.scheme().into()));
        }

        Ok(url)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_global_cloud() {
        let config = AdapterConfig::default();
        assert_eq!(
            config.service_root().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0"
        );
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn national_cloud_overrides_base_url() {
        let config: AdapterConfig = serde_json::from_str(
            r#"{"base_url": "https://example.com/v1.0", "national_cloud": "China", "timeout_secs": 30}"#,
        )
        .unwrap();
        assert_eq!(
            config.service_root().unwrap().as_str(),
            "https://microsoftgraph.chinacloudapi.cn/v1.0"
        );
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn rejects_unsupported_scheme() {
        let config = AdapterConfig::default().with_base_url("ftp://graph.microsoft.com/v1.0");
        assert!(matches!(
            config.service_root(),
            Err(Error::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));

        let config = AdapterConfig::default().with_base_url("not a url");
        assert!(matches!(config.service_root(), Err(Error::Url(_))));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = AdapterConfig::for_cloud(NationalCloud::UsGovL5)
            .with_base_url("https://graph.microsoft.us/v1.0/");
        assert_eq!(
            config.service_root().unwrap().as_str(),
            "https://graph.microsoft.us/v1.0"
        );
    }
}
