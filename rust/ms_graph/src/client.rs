/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::sync::Arc;

use crate::builder::BaseRequestBuilder;
use crate::paths::{directory_objects, groups, me, teams, users};
use crate::request::PathParameters;

/// The root of the request builder tree. Every builder reached from here
/// shares the same adapter.
///
/// ```ignore
/// let client = GraphServiceClient::new(adapter);
/// let folders = client.me().mail_folders().get(|get| get.top(10)).await?;
/// ```
#[derive(Debug)]
pub struct GraphServiceClient<A> {
    base: BaseRequestBuilder<A>,
}

impl<A> Clone for GraphServiceClient<A> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
        }
    }
}

impl<A> GraphServiceClient<A> {
    pub fn new(adapter: A) -> Self {
        Self::from_shared(Arc::new(adapter))
    }

    pub fn from_shared(adapter: Arc<A>) -> Self {
        Self {
            base: BaseRequestBuilder::new(adapter, PathParameters::new()),
        }
    }

    pub fn adapter(&self) -> &Arc<A> {
        &self.base.adapter
    }

    pub fn me(&self) -> me::RequestBuilder<A> {
        me::RequestBuilder::new(self.base.clone())
    }

    pub fn users(&self) -> users::RequestBuilder<A> {
        users::RequestBuilder::new(self.base.clone())
    }

    pub fn teams(&self) -> teams::RequestBuilder<A> {
        teams::RequestBuilder::new(self.base.clone())
    }

    pub fn directory_objects(&self) -> directory_objects::RequestBuilder<A> {
        directory_objects::RequestBuilder::new(self.base.clone())
    }

    pub fn groups(&self) -> groups::RequestBuilder<A> {
        groups::RequestBuilder::new(self.base.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operation;

    #[test]
    fn navigation_collects_path_parameters() {
        let client = GraphServiceClient::new(());
        let channel = client.teams().by_team_id("42").channels().by_channel_id("7");

        let request = channel.get_request().build().unwrap();
        assert_eq!(request.uri().unwrap(), "/teams/42/channels/7");
        assert!(Arc::ptr_eq(client.adapter(), &channel.base().adapter));
    }

    #[test]
    fn user_ids_are_encoded() {
        let client = GraphServiceClient::new(());
        let request = client
            .users()
            .by_user_id("adele@contoso.com")
            .mail_folders()
            .get_request()
            .build()
            .unwrap();
        assert_eq!(
            request.uri().unwrap(),
            "/users/adele%40contoso.com/mailFolders"
        );
    }

    #[test]
    fn groups_are_reachable() {
        let client = GraphServiceClient::new(());
        let request = client.groups().by_group_id("02bd9fd6").get_request().build().unwrap();
        assert_eq!(request.uri().unwrap(), "/groups/02bd9fd6");

        let request = client.groups().get_request().build().unwrap();
        assert_eq!(request.uri().unwrap(), "/groups");
    }
}
