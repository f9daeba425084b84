/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

pub mod directory_objects;
pub mod directory_objects_directory_object_id;
pub mod groups;
pub mod groups_group_id;
pub mod me;
pub mod me_mail_folders;
pub mod me_mail_folders_delta;
pub mod me_mail_folders_mail_folder_id;
pub mod me_mail_folders_mail_folder_id_messages;
pub mod me_messages;
pub mod me_messages_message_id;
pub mod me_send_mail;
pub mod teams;
pub mod teams_team_id;
pub mod teams_team_id_channels;
pub mod teams_team_id_channels_channel_id;
pub mod users;
pub mod users_count;
pub mod users_user_id;
pub mod users_user_id_mail_folders;
pub mod users_user_id_mail_folders_mail_folder_id;
