/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::sync::Arc;

use crate::request::{PathParameters, RAW_URL_PARAMETER};

/// State shared by every generated request builder: the path parameters
/// collected while navigating down the resource tree, and the adapter
/// requests are eventually sent through.
#[derive(Debug)]
pub struct BaseRequestBuilder<A> {
    pub path_parameters: PathParameters,
    pub adapter: Arc<A>,
}

// Derived `Clone` would require `A: Clone`.
impl<A> Clone for BaseRequestBuilder<A> {
    fn clone(&self) -> Self {
        Self {
            path_parameters: self.path_parameters.clone(),
            adapter: Arc::clone(&self.adapter),
        }
    }
}

impl<A> BaseRequestBuilder<A> {
    pub fn new(adapter: Arc<A>, path_parameters: PathParameters) -> Self {
        Self {
            path_parameters,
            adapter,
        }
    }

    /// A builder for a child resource, with `key` bound to `value` on top of
    /// the parameters collected so far.
    pub fn child(&self, key: &str, value: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.path_parameters.insert(key.to_string(), value.into());
        child
    }

    /// A builder whose requests go to `raw_url` exactly, ignoring the URL
    /// template. Used to resume from links returned by the service.
    pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
        self.child(RAW_URL_PARAMETER, raw_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_extends_without_touching_parent() {
        let root = BaseRequestBuilder::new(Arc::new(()), PathParameters::new());
        let team = root.child("team%2Did", "42");
        let channel = team.child("channel%2Did", "19:abc@thread.tacv2");

        assert!(root.path_parameters.is_empty());
        assert_eq!(team.path_parameters.len(), 1);
        assert_eq!(channel.path_parameters["team%2Did"], "42");
        assert_eq!(channel.path_parameters["channel%2Did"], "19:abc@thread.tacv2");
        assert!(Arc::ptr_eq(&root.adapter, &channel.adapter));
    }

    #[test]
    fn with_url_sets_raw_url() {
        let root = BaseRequestBuilder::new(Arc::new(()), PathParameters::new());
        let resumed = root.with_url("https://graph.microsoft.com/v1.0/users?%24skiptoken=x");
        assert_eq!(
            resumed.path_parameters[RAW_URL_PARAMETER],
            "https://graph.microsoft.com/v1.0/users?%24skiptoken=x"
        );
    }
}
