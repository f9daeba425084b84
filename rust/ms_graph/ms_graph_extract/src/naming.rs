/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Helper functions for converting strings to properly formatted names.

use crate::oxidize::is_rust_keyword;

const GRAPH_PREFIX: &str = "microsoft.graph.";

/// Strip the "microsoft.graph." prefix from a potentially fully qualified
/// OpenAPI name (e.g. "microsoft.graph.user").
pub fn base_name(full: &str) -> String {
    full.replace(GRAPH_PREFIX, "")
}

/// The modules, in snake_case, holding the schema with the given OpenAPI
/// name.
///
/// For example, "microsoft.graph.ODataErrors.MainError" lives in
/// `o_data_errors`. Schemas at the top level of the hierarchy have an empty
/// namespace.
pub fn namespace(full: &str) -> Vec<String> {
    let base = base_name(full);
    assert!(!base.is_empty(), "invalid type name: {full}");

    let mut segments = base.split('.').collect::<Vec<_>>();
    segments.pop();
    segments.into_iter().map(snakeify).collect()
}

/// Given a potentially fully qualified OpenAPI name ("microsoft.graph.user"),
/// produce the simple name for use here ("user").
pub fn simple_name(full: &str) -> &str {
    let out = full.rsplit('.').next().unwrap_or(full);
    assert!(!out.is_empty(), "attempted to generate empty name: {full}");
    assert!(
        !is_rust_keyword(out),
        "attempted to use a rust keyword as a name: {full}"
    );
    out
}

/// Sanitize a string into a PascalCase Rust identifier.
pub fn pascalize(s: &str) -> String {
    let mut out = String::new();
    let mut upper_next = true;
    for ch in s.chars() {
        if ch.is_alphanumeric() {
            if upper_next {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            upper_next = false;
        } else {
            upper_next = true;
        }
    }
    assert!(
        !out.is_empty(),
        "attempted to pascalize into the empty string: {s}"
    );
    assert!(
        !is_rust_keyword(&out),
        "attempted to pascalize into a rust keyword: {s}"
    );
    out
}

/// Sanitize a string into a snake_case Rust identifier.
///
/// Whole paths are accepted too: "/me/mailFolders/{mailFolder-id}" becomes
/// "me_mail_folders_mail_folder_id".
pub fn snakeify(s: &str) -> String {
    let mut out = String::new();
    let mut prev_is_underscore = false;
    for ch in s.chars() {
        if ch.is_alphanumeric() {
            if ch.is_ascii_uppercase() {
                if !out.is_empty() && !prev_is_underscore {
                    out.push('_');
                }
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
            prev_is_underscore = false;
        } else if !prev_is_underscore && !out.is_empty() {
            out.push('_');
            prev_is_underscore = true;
        }
    }
    if out.ends_with('_') {
        out.pop();
    }
    assert!(
        !out.is_empty(),
        "attempted to snakify into the empty string: {s}"
    );
    assert!(
        !is_rust_keyword(&out),
        "attempted to snakify into a rust keyword: {s}"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespaced_names() {
        assert!(namespace("microsoft.graph.user").is_empty());
        assert_eq!(
            namespace("microsoft.graph.ODataErrors.MainError"),
            vec!["o_data_errors"]
        );
        assert_eq!(simple_name("microsoft.graph.ODataErrors.MainError"), "MainError");
    }

    #[test]
    fn identifiers() {
        assert_eq!(pascalize("unknownFutureValue"), "UnknownFutureValue");
        assert_eq!(pascalize("request-id"), "RequestId");
        assert_eq!(snakeify("ODataError"), "o_data_error");
        assert_eq!(snakeify("SaveToSentItems"), "save_to_sent_items");
        assert_eq!(snakeify("/users/$count"), "users_count");
        assert_eq!(snakeify("/me/mailFolders/delta()"), "me_mail_folders_delta");
        assert_eq!(
            snakeify("/me/mailFolders/{mailFolder-id}/messages"),
            "me_mail_folders_mail_folder_id_messages"
        );
    }
}
