/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use graph_http::{
    AdapterConfig, AnonymousAuthenticationProvider, AuthenticationProvider,
    BearerTokenAuthenticationProvider, GraphAdapter, StaticAccessToken,
};
use http::{HeaderValue, StatusCode};
use ms_graph::types::group::Group;
use ms_graph::types::message::Message;
use ms_graph::types::send_mail_request_body::SendMailRequestBody;
use ms_graph::types::user::{User, UserSelection};
use ms_graph::{Error, GraphServiceClient, Operation, Search, Select, Top};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path, query_param, query_param_is_missing},
};

fn config_for(server: &MockServer) -> AdapterConfig {
    AdapterConfig::default().with_base_url(format!("{}/v1.0", server.uri()))
}

fn client_for<P: AuthenticationProvider>(
    server: &MockServer,
    auth: P,
) -> GraphServiceClient<GraphAdapter<P>> {
    GraphAdapter::with_config(auth, &config_for(server))
        .unwrap()
        .into_client()
}

fn bearer() -> BearerTokenAuthenticationProvider<StaticAccessToken> {
    BearerTokenAuthenticationProvider::with_allowed_hosts(
        StaticAccessToken::new("test-token"),
        ["127.0.0.1"],
    )
}

#[tokio::test]
async fn get_me_with_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/me"))
        .and(query_param("$select", "displayName,mail"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#users(displayName,mail)/$entity",
            "displayName": "Adele Vance",
            "mail": "AdeleV@contoso.com",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, bearer());
    let me = client
        .me()
        .get(|get| get.select([UserSelection::DisplayName, UserSelection::Mail]))
        .await
        .unwrap();

    assert_eq!(me.display_name().unwrap(), Some("Adele Vance"));
    assert_eq!(me.mail().unwrap(), Some("AdeleV@contoso.com"));
}

#[tokio::test]
async fn anonymous_requests_have_no_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/teams/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "42",
            "displayName": "Contoso Team",
            "isArchived": false,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, AnonymousAuthenticationProvider);
    let team = client.teams().by_team_id("42").get(|_| {}).await.unwrap();
    assert_eq!(team.is_archived().unwrap(), Some(false));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn odata_errors_are_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/users/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "Request_ResourceNotFound",
                "message": "Resource 'nobody' does not exist or one of its queried reference-property objects are not present.",
                "innerError": {
                    "date": "2024-05-21T12:00:00",
                    "request-id": "3f0bb3b2-a2ae-4b42-9c4f-6f0c5ad06d3c",
                    "client-request-id": "3f0bb3b2-a2ae-4b42-9c4f-6f0c5ad06d3c"
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, bearer());
    let result = client.users().by_user_id("nobody").get(|_| {}).await;

    match result {
        Err(Error::OData { status, error }) => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            let main = error.error().unwrap();
            assert_eq!(main.code().unwrap(), "Request_ResourceNotFound");
            let inner = main.inner_error().unwrap();
            assert_eq!(
                inner.request_id().unwrap(),
                Some("3f0bb3b2-a2ae-4b42-9c4f-6f0c5ad06d3c")
            );
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn non_odata_error_bodies_keep_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/me"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = client_for(&server, bearer());
    let result = client.me().get(|_| {}).await;
    assert!(matches!(
        result,
        Err(Error::Status { status, body })
            if status == StatusCode::SERVICE_UNAVAILABLE && body == "Service Unavailable"
    ));
}

#[tokio::test]
async fn count_with_consistency_level() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/users/$count"))
        .and(query_param("$search", "\"displayName:wa\""))
        .and(header("consistencylevel", "eventual"))
        .and(header("accept", "text/plain"))
        .respond_with(ResponseTemplate::new(200).set_body_string("17"))
        .mount(&server)
        .await;

    let client = client_for(&server, bearer());
    let count = client
        .users()
        .count()
        .get(|get| {
            get.search("\"displayName:wa\"");
            get.headers_mut()
                .insert("consistencylevel", HeaderValue::from_static("eventual"));
        })
        .await
        .unwrap();
    assert_eq!(count, 17);
}

#[tokio::test]
async fn all_pages_follow_next_links() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/users"))
        .and(query_param("$top", "2"))
        .and(query_param_is_missing("$skiptoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"id": "1"}, {"id": "2"}],
            "@odata.nextLink": format!("{}/v1.0/users?%24top=2&%24skiptoken=X2", server.uri()),
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/users"))
        .and(query_param("$skiptoken", "X2"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"id": "3"}],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, bearer());
    let pages = client.users().get_all_pages(|get| get.top(2)).await.unwrap();

    let ids: Vec<String> = pages
        .iter()
        .flat_map(|page| page.value().unwrap())
        .map(|user| user.directory_object().entity().id().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn send_mail_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1.0/me/sendMail"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "Message": {"subject": "Meet for lunch?"},
            "SaveToSentItems": true,
        })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let mut message = Message::default();
    message.set_subject(Some("Meet for lunch?"));
    let mut body = SendMailRequestBody::default();
    body.set_message(message).set_save_to_sent_items(Some(true));

    let client = client_for(&server, bearer());
    client.me().send_mail().post(body, |_| {}).await.unwrap();
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/me/messages/AAMkAGI2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, bearer());
    client
        .me()
        .messages()
        .by_message_id("AAMkAGI2")
        .delete(|_| {})
        .await
        .unwrap();
}

#[tokio::test]
async fn patch_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1.0/users/42"))
        .and(body_partial_json(json!({"jobTitle": "Designer"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut user = User::default();
    user.set_job_title(Some("Designer"));

    let client = client_for(&server, bearer());
    let updated = client
        .users()
        .by_user_id("42")
        .patch(user, |_| {})
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[tokio::test]
async fn writes_return_the_entity_when_asked() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1.0/groups/02bd9fd6"))
        .and(header("prefer", "return=representation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "02bd9fd6",
            "description": "Sales and marketing",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/groups"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, bearer());
    let mut group = Group::default();
    group.set_description(Some("Sales and marketing"));
    let updated = client
        .groups()
        .by_group_id("02bd9fd6")
        .patch(group, |patch| {
            patch
                .headers_mut()
                .insert("prefer", HeaderValue::from_static("return=representation"));
        })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.description().unwrap(), Some("Sales and marketing"));

    let mut group = Group::default();
    group
        .set_display_name(Some("Sales"))
        .set_mail_enabled(Some(false))
        .set_mail_nickname(Some("sales"))
        .set_security_enabled(Some(true));
    let created = client.groups().post(group, |_| {}).await.unwrap();
    assert!(created.is_none());
}

#[tokio::test]
async fn delta_round() {
    let server = MockServer::start().await;
    let delta_link = format!(
        "{}/v1.0/me/mailFolders/delta()?%24deltatoken=LztZwWjo5IivWBhyxw5rAKHUB",
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/v1.0/me/mailFolders/delta()"))
        .and(query_param_is_missing("$deltatoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{"id": "AQMkADYAAAIBXQAAAA==", "displayName": "Archive"}],
            "@odata.deltaLink": delta_link,
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/me/mailFolders/delta()"))
        .and(query_param("$deltatoken", "LztZwWjo5IivWBhyxw5rAKHUB"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [],
            "@odata.deltaLink": delta_link,
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, bearer());
    let delta = client.me().mail_folders().delta();

    let first = delta.get(|_| {}).await.unwrap();
    assert_eq!(first.value.len(), 1);
    assert_eq!(first.value[0].display_name().unwrap(), Some("Archive"));

    let link = first.delta_link().unwrap();
    let second = delta.get_delta(link, |_| {}).await.unwrap();
    assert!(second.value.is_empty());
    assert_eq!(second.delta_link(), Some(delta_link.as_str()));
}

#[tokio::test]
async fn transport_failures_are_reported() {
    // Nothing listens on port 1.
    let config = AdapterConfig::default().with_base_url("http://127.0.0.1:1/v1.0");
    let client = GraphAdapter::with_config(AnonymousAuthenticationProvider, &config)
        .unwrap()
        .into_client();
    let result = client.me().get(|_| {}).await;
    assert!(matches!(result, Err(Error::Transport(_))));
}

#[test]
fn operations_do_not_need_an_adapter() {
    let client = GraphServiceClient::new(());
    let request = client.me().get_request().build().unwrap();
    assert_eq!(request.uri().unwrap(), "/me");
}
