/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use http::{HeaderValue, Method, header};
use ms_graph::paths::{
    directory_objects_directory_object_id, groups, groups_group_id, me, me_mail_folders,
    me_mail_folders_delta, me_send_mail, teams_team_id_channels, users, users_count,
    users_user_id_mail_folders_mail_folder_id,
};
use ms_graph::types::channel_membership_type::ChannelMembershipType;
use ms_graph::types::directory_object::{DirectoryObject, DirectoryObjectKind};
use ms_graph::types::email_address::EmailAddress;
use ms_graph::types::group::GroupSelection;
use ms_graph::types::importance::Importance;
use ms_graph::types::item_body::ItemBody;
use ms_graph::types::message::{Message, MessageSelection};
use ms_graph::types::recipient::Recipient;
use ms_graph::types::send_mail_request_body::SendMailRequestBody;
use ms_graph::types::user::{User, UserSelection};
use ms_graph::*;
use serde_json::{Value, json};

#[test]
fn url_templates() {
    assert_eq!(me::URL_TEMPLATE, "{+baseurl}/me{?%24expand,%24select}");
    assert_eq!(
        me_mail_folders::URL_TEMPLATE,
        "{+baseurl}/me/mailFolders{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
    );
    assert_eq!(
        me_mail_folders_delta::URL_TEMPLATE,
        "{+baseurl}/me/mailFolders/delta(){?%24count,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
    );
    assert_eq!(
        users_user_id_mail_folders_mail_folder_id::URL_TEMPLATE,
        "{+baseurl}/users/{user%2Did}/mailFolders/{mailFolder%2Did}{?%24expand,%24select}"
    );
    assert_eq!(
        users_count::URL_TEMPLATE,
        "{+baseurl}/users/$count{?%24filter,%24search}"
    );
    assert_eq!(me_send_mail::URL_TEMPLATE, "{+baseurl}/me/sendMail");
    assert_eq!(
        groups::URL_TEMPLATE,
        "{+baseurl}/groups{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
    );
    assert_eq!(
        groups_group_id::URL_TEMPLATE,
        "{+baseurl}/groups/{group%2Did}{?%24expand,%24select}"
    );
    assert_eq!(
        teams_team_id_channels::URL_TEMPLATE,
        "{+baseurl}/teams/{team%2Did}/channels{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
    );
}

#[test]
fn list_query_options() {
    let client = GraphServiceClient::new(());
    let mut get = client
        .me()
        .mail_folders()
        .by_mail_folder_id("AAMkAGI2")
        .messages()
        .get_request();
    get.top(5);
    get.skip(10);
    get.filter("isRead eq false");
    get.order_by(["receivedDateTime desc"]);
    get.select([MessageSelection::Subject, MessageSelection::From]);

    let request = get.build().unwrap();
    assert_eq!(request.method, Method::GET);
    assert_eq!(
        request.uri().unwrap(),
        "/me/mailFolders/AAMkAGI2/messages?%24filter=isRead%20eq%20false\
         &%24orderby=receivedDateTime%20desc&%24select=subject,from&%24skip=10&%24top=5"
    );
    assert_eq!(request.headers[header::ACCEPT], JSON_CONTENT_TYPE);
}

#[test]
fn caller_headers_are_kept() {
    let client = GraphServiceClient::new(());
    let mut get = client.users().count().get_request();
    get.search("\"displayName:wa\"");
    get.headers_mut()
        .insert("consistencylevel", HeaderValue::from_static("eventual"));
    get.headers_mut()
        .insert(header::ACCEPT, HeaderValue::from_static("text/plain; charset=utf-8"));

    let request = get.build().unwrap();
    assert_eq!(
        request.uri().unwrap(),
        "/users/$count?%24search=%22displayName%3Awa%22"
    );
    assert_eq!(request.headers["consistencylevel"], "eventual");
    assert_eq!(request.headers[header::ACCEPT], "text/plain; charset=utf-8");
}

#[test]
fn count_accepts_text() {
    let request = users_count::Get::new(PathParameters::new()).build().unwrap();
    assert_eq!(request.headers[header::ACCEPT], TEXT_CONTENT_TYPE);
}

#[test]
fn resume_from_raw_url() {
    let client = GraphServiceClient::new(());
    let link = "https://graph.microsoft.com/v1.0/users?%24skiptoken=RFNwdAIAAQAAAD";
    let request = client.users().with_url(link).get_request().build().unwrap();
    assert_eq!(request.uri().unwrap(), link);
}

#[test]
fn delta_links_are_validated() {
    let link = "https://graph.microsoft.com/v1.0/me/mailFolders/delta()?%24deltatoken=abc";
    let request = me_mail_folders_delta::GetDelta::try_from(link)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(request.uri().unwrap(), link);

    assert!(matches!(
        me_mail_folders_delta::GetDelta::try_from("not a link"),
        Err(Error::Uri(_))
    ));
    for relative in ["foo", "/me/mailFolders/delta()?%24deltatoken=abc"] {
        assert!(matches!(
            me_mail_folders_delta::GetDelta::try_from(relative),
            Err(Error::RelativeLink(link)) if link == relative
        ));
    }
}

#[test]
fn send_mail_body() {
    let mut address = EmailAddress::default();
    address.set_address(Some("adele@contoso.com"));
    let mut recipient = Recipient::default();
    recipient.set_email_address(Some(address));

    let mut body = ItemBody::default();
    body.set_content_type(Some(ms_graph::types::body_type::BodyType::Text))
        .set_content(Some("The new cafeteria is open."));

    let mut message = Message::default();
    message
        .set_subject(Some("Meet for lunch?"))
        .set_body(Some(body))
        .set_to_recipients(vec![recipient])
        .set_importance(Some(Importance::High));

    let mut send_mail = SendMailRequestBody::default();
    send_mail
        .set_message(message)
        .set_save_to_sent_items(Some(false));

    let client = GraphServiceClient::new(());
    let request = client.me().send_mail().post_request(send_mail).build().unwrap();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.uri().unwrap(), "/me/sendMail");
    assert_eq!(request.headers[header::CONTENT_TYPE], JSON_CONTENT_TYPE);

    let sent: Value = serde_json::from_slice(request.content.as_deref().unwrap()).unwrap();
    assert_eq!(
        sent,
        json!({
            "Message": {
                "subject": "Meet for lunch?",
                "body": {"contentType": "text", "content": "The new cafeteria is open."},
                "toRecipients": [{"emailAddress": {"address": "adele@contoso.com"}}],
                "importance": "high",
            },
            "SaveToSentItems": false,
        })
    );
}

#[test]
fn unknown_properties_survive_round_trip() {
    let mut message: Message = serde_json::from_value(json!({
        "@odata.etag": "W/\"CQAAABYAAAC\"",
        "@odata.type": "#microsoft.graph.message",
        "id": "AAMkAGI2",
        "subject": "Status",
        "flag": {"flagStatus": "notFlagged"},
    }))
    .unwrap();

    assert_eq!(message.odata_type(), Some(<Message as Model>::ODATA_TYPE.unwrap()));
    let additional = message.additional_data();
    assert_eq!(additional.len(), 2);
    assert!(additional.contains_key("@odata.etag"));
    assert_eq!(additional["flag"], json!({"flagStatus": "notFlagged"}));

    message.set_is_read(Some(true));
    let value = Value::from(message);
    assert_eq!(value["flag"]["flagStatus"], "notFlagged");
    assert_eq!(value["@odata.etag"], "W/\"CQAAABYAAAC\"");
    assert_eq!(value["isRead"], true);
    assert_eq!(value["subject"], "Status");
}

#[test]
fn inherited_properties() {
    let message: Message = serde_json::from_value(json!({
        "id": "AAMkAGI2",
        "changeKey": "CQAAABYAAAC",
        "categories": ["Blue category"],
        "from": {"emailAddress": {"name": "Megan Bowen", "address": "MeganB@contoso.com"}},
    }))
    .unwrap();

    assert_eq!(message.outlook_item().entity().id().unwrap(), "AAMkAGI2");
    assert_eq!(message.outlook_item().change_key().unwrap(), Some("CQAAABYAAAC"));
    assert_eq!(
        message.outlook_item().categories().unwrap(),
        vec!["Blue category"]
    );

    let from = message.from().unwrap().unwrap();
    let address = from.email_address().unwrap().unwrap();
    assert_eq!(address.name().unwrap(), Some("Megan Bowen"));
    assert_eq!(MessageSelection::From.to_string(), "from");
    assert_eq!(UserSelection::Id.to_string(), "id");
}

#[test]
fn discriminator_selects_derived_type() {
    let kind: DirectoryObjectKind = serde_json::from_value(json!({
        "@odata.type": "#microsoft.graph.user",
        "id": "87d349ed",
        "displayName": "Adele Vance",
    }))
    .unwrap();
    match kind {
        DirectoryObjectKind::User(user) => {
            assert_eq!(user.display_name().unwrap(), Some("Adele Vance"));
            assert_eq!(user.directory_object().entity().id().unwrap(), "87d349ed");
        }
        other => panic!("expected a user, got {other:?}"),
    }

    let kind: DirectoryObjectKind = serde_json::from_value(json!({
        "@odata.type": "#microsoft.graph.group",
        "id": "02bd9fd6",
        "groupTypes": ["Unified"],
    }))
    .unwrap();
    match kind {
        DirectoryObjectKind::Group(group) => {
            assert_eq!(group.group_types().unwrap(), vec!["Unified"]);
        }
        other => panic!("expected a group, got {other:?}"),
    }
}

#[test]
fn unknown_discriminator_falls_back_to_base() {
    let object: <directory_objects_directory_object_id::Get as Operation>::Response<'static> =
        serde_json::from_value(json!({
            "@odata.type": "#microsoft.graph.servicePrincipal",
            "id": "1f5a6d5b",
            "appId": "00000003-0000-0000-c000-000000000000",
        }))
        .unwrap();

    match object.kind() {
        DirectoryObjectKind::DirectoryObject(base) => {
            assert_eq!(base.entity().id().unwrap(), "1f5a6d5b");
            assert!(base.additional_data().contains_key("appId"));
        }
        other => panic!("expected the base type, got {other:?}"),
    }

    let untyped: DirectoryObject = serde_json::from_value(json!({"id": "1"})).unwrap();
    assert!(matches!(
        untyped.into_kind(),
        DirectoryObjectKind::DirectoryObject(_)
    ));
}

#[test]
fn enums_parse_wire_names() {
    let channel: ms_graph::types::channel::Channel = serde_json::from_value(json!({
        "id": "19:4a95f7d8db4c4e7fae857bcebe0623e6@thread.tacv2",
        "displayName": "General",
        "membershipType": "unknownFutureValue",
    }))
    .unwrap();
    assert_eq!(channel.display_name().unwrap(), "General");
    assert_eq!(
        channel.membership_type().unwrap(),
        Some(ChannelMembershipType::UnknownFutureValue)
    );

    let mistyped: ms_graph::types::channel::Channel =
        serde_json::from_value(json!({"membershipType": "secret"})).unwrap();
    assert!(matches!(
        mistyped.membership_type(),
        Err(Error::UnexpectedResponse(_))
    ));
}

#[test]
fn patch_sends_only_set_properties() {
    let mut user = User::default();
    user.set_job_title(Some("Product Manager"))
        .set_business_phones(&["+1 425 555 0109"]);

    let client = GraphServiceClient::new(());
    let request = client
        .users()
        .by_user_id("87d349ed")
        .patch_request(user)
        .build()
        .unwrap();
    assert_eq!(request.method, Method::PATCH);
    assert_eq!(request.uri().unwrap(), "/users/87d349ed");

    let sent: Value = serde_json::from_slice(request.content.as_deref().unwrap()).unwrap();
    assert_eq!(
        sent,
        json!({"jobTitle": "Product Manager", "businessPhones": ["+1 425 555 0109"]})
    );
}

#[test]
fn delete_has_no_body() {
    let client = GraphServiceClient::new(());
    let request = client
        .teams()
        .by_team_id("42")
        .channels()
        .by_channel_id("19:abc@thread.tacv2")
        .delete_request()
        .build()
        .unwrap();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(request.uri().unwrap(), "/teams/42/channels/19%3Aabc%40thread.tacv2");
    assert!(request.content.is_none());
}

#[test]
fn collection_query_on_users() {
    let mut get = users::Get::new(PathParameters::new());
    get.count(true);
    get.select([UserSelection::DisplayName, UserSelection::Mail]);
    let request = get.build().unwrap();
    assert_eq!(
        request.uri().unwrap(),
        "/users?%24count=true&%24select=displayName,mail"
    );
}

#[test]
fn group_collection_query() {
    let client = GraphServiceClient::new(());
    let mut get = client.groups().get_request();
    get.filter("groupTypes/any(c:c eq 'Unified')");
    get.select([GroupSelection::DisplayName, GroupSelection::MailNickname]);
    let request = get.build().unwrap();
    assert_eq!(
        request.uri().unwrap(),
        "/groups?%24filter=groupTypes%2Fany%28c%3Ac%20eq%20%27Unified%27%29\
         &%24select=displayName,mailNickname"
    );

    let page: <groups::Get as Operation>::Response<'static> = serde_json::from_value(json!({
        "value": [{"id": "02bd9fd6", "groupTypes": ["Unified"]}],
    }))
    .unwrap();
    let groups = page.response.value().unwrap();
    assert_eq!(groups[0].directory_object().entity().id().unwrap(), "02bd9fd6");
    assert!(page.next_page().is_none());
}
