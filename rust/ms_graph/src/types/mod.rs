/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

pub mod body_type;
pub mod channel;
pub mod channel_collection_response;
pub mod channel_membership_type;
pub mod directory_object;
pub mod directory_object_collection_response;
pub mod email_address;
pub mod entity;
pub mod group;
pub mod group_collection_response;
pub mod importance;
pub mod item_body;
pub mod mail_folder;
pub mod mail_folder_collection_response;
pub mod mailbox_settings;
pub mod message;
pub mod message_collection_response;
pub mod o_data_errors;
pub mod outlook_item;
pub mod recipient;
pub mod send_mail_request_body;
pub mod team;
pub mod team_collection_response;
pub mod user;
pub mod user_collection_response;
