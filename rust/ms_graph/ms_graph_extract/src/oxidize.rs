/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Modules for turning our representation of the Graph API into Rust code
//! (specifically, a [`proc_macro2::TokenStream`]).

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::collections::BTreeSet;

use crate::naming;

pub mod paths;
pub mod types;

/// `use` declarations for the modules defining `types`.
fn imports<'a>(types: impl IntoIterator<Item = &'a CustomRustType>) -> TokenStream {
    let modules = types
        .into_iter()
        .map(CustomRustType::module_segments)
        .collect::<BTreeSet<_>>();

    let imports = modules.iter().map(|segments| {
        let segments = segments.iter().map(|s| format_ident!("{s}"));
        quote!(use crate::types::#(#segments)::*::*;)
    });

    quote!(#(#imports)*)
}

/// Does some (very) basic clean up of descriptions to make them better
/// formatted as doc comments.
// This is dumb and buggy, and will eventually need proper regex, but is good
// enough for now to prevent major doc bugs/warnings.
fn markup_doc_comment(mut doc_comment: String) -> String {
    fn escape(s: &str) -> String {
        format!("`{s}`")
    }

    fn escape_in_place(s: &mut String, start_idx: usize, end_idx: usize) {
        s.reserve(2);
        // Make sure the end ` gets inserted first, so the index doesn't change
        s.insert(end_idx, '`');
        s.insert(start_idx, '`');
    }

    /// Escape members of a string of the form "Foo, Bar, and Baz" into
    /// "`Foo`, `Bar`, and `Baz`."
    fn escape_list(list: &str) -> String {
        let list = list.split(", ");
        let list = list
            .map(|item| {
                if item.starts_with("and ") {
                    match item.split_ascii_whitespace().nth(1) {
                        Some(word) => item.replace(word, &escape(word)),
                        None => item.to_string(),
                    }
                } else {
                    escape(item.trim_ascii())
                }
            })
            .collect::<Vec<_>>();
        list.join(", ")
    }

    // find all instances of " [Ff]or example: ", which are always followed by
    // something that can or should be escaped as code.
    let example_str = "for example: ";
    let mut search_idx = 0;
    loop {
        let lowered_comment = doc_comment.to_ascii_lowercase();
        let Some(match_idx) = lowered_comment[search_idx..].find(example_str) else {
            break;
        };
        let example_start = search_idx + match_idx + example_str.len();

        if let Some(example_len) = doc_comment[example_start..].find(". ") {
            let example_end = example_start + example_len;
            escape_in_place(&mut doc_comment, example_start, example_end);
            search_idx = example_end + 2;
        } else {
            search_idx = example_start;
        }
    }

    // match against known lists of escaped words and escape them
    let list_wrappers = [("$filter (", ")"), ("Allowed values: ", ". ")];
    for (left, right) in list_wrappers {
        if let Some(match_idx) = doc_comment.find(left) {
            let start_idx = match_idx + left.len();
            if let Some(match_len) = doc_comment[start_idx..].find(right) {
                let before_list = doc_comment[start_idx..start_idx + match_len].to_string();
                let after_list = escape_list(&before_list);
                doc_comment = doc_comment.replace(&before_list, &after_list);
            }
        }
    }

    // escape all keywords known to always benefit from escaping
    for word in [
        "$expand", "$filter", "$orderby", "$OrderBy", "$search", "$select", "$top",
    ] {
        let replacement = escape(word);
        doc_comment = doc_comment.replace(word, &replacement);
    }

    doc_comment
}

/// Our representation of a Rust type.
#[derive(Clone, Debug)]
pub enum RustType {
    Bool,
    I32,
    I64,
    F64,
    String,
    Custom(CustomRustType),
}

impl RustType {
    /// The type handed out by getters, borrowing from the property bag.
    fn borrowed_token(&self) -> TokenStream {
        match self {
            Self::Bool => quote!(bool),
            Self::I32 => quote!(i32),
            Self::I64 => quote!(i64),
            Self::F64 => quote!(f64),
            Self::String => quote!(&str),
            Self::Custom(custom) => custom.type_token(quote!('_)),
        }
    }

    /// The conversion from a `&Value` to `Option<Self>` used by getters.
    fn cast(&self) -> TokenStream {
        match self {
            Self::Bool => quote!(Value::as_bool),
            Self::I32 => quote!(store::as_i32),
            Self::I64 => quote!(Value::as_i64),
            Self::F64 => quote!(Value::as_f64),
            Self::String => quote!(Value::as_str),
            Self::Custom(custom) if custom.is_enum() => quote!(store::parse),
            Self::Custom(custom) => {
                let ident = custom.ident();
                quote!(|v| v.as_object().map(#ident::new))
            }
        }
    }

    fn is_model(&self) -> bool {
        matches!(self, Self::Custom(custom) if !custom.is_enum())
    }
}

/// A custom Rust type that doesn't fit in any of the [`RustType`] variants.
///
/// This struct holds both the PascalCase and original versions of the type's
/// name. Ideally we'd generate the PascalCase version upon request (e.g. when
/// `as_pascal_case` is called), but this causes ownership issues further down
/// the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomRustType {
    pascal_case: String,
    original_name: String,
    namespace: Vec<String>,
    is_enum: bool,
}

impl CustomRustType {
    /// The type named `base` with the `microsoft.graph.` prefix removed,
    /// e.g. "user" or "ODataErrors.MainError".
    pub fn from_base_name(base: &str) -> Self {
        let original_name = naming::simple_name(base).to_string();
        CustomRustType {
            pascal_case: naming::pascalize(&original_name),
            namespace: naming::namespace(base),
            is_enum: crate::SUPPORTED_ENUMS.contains(&base),
            original_name,
        }
    }

    /// Returns the type's name in PascalCase.
    pub fn as_pascal_case(&self) -> &String {
        &self.pascal_case
    }

    /// Returns the type's name in snake_case.
    pub fn as_snake_case(&self) -> String {
        naming::snakeify(&self.original_name)
    }

    /// Returns the type's name as it was written in the OpenAPI document.
    pub fn original_name(&self) -> &String {
        &self.original_name
    }

    pub fn is_enum(&self) -> bool {
        self.is_enum
    }

    fn ident(&self) -> proc_macro2::Ident {
        format_ident!("{}", self.pascal_case)
    }

    /// The type with the given lifetime, which enums don't take.
    fn type_token(&self, lifetime: TokenStream) -> TokenStream {
        let ident = self.ident();
        if self.is_enum {
            quote!(#ident)
        } else {
            quote!(#ident<#lifetime>)
        }
    }

    /// The module path below `crate::types` defining the type.
    fn module_segments(&self) -> Vec<String> {
        let mut segments = self.namespace.clone();
        segments.push(self.as_snake_case());
        segments
    }
}

/// Returns true if the given string is a reserved Rust keyword.
pub fn is_rust_keyword(s: &str) -> bool {
    // https://doc.rust-lang.org/reference/keywords.html
    let keywords = [
        // strong
        "as",
        "break",
        "const",
        "continue",
        "crate",
        "else",
        "enum",
        "extern",
        "false",
        "fn",
        "for",
        "if",
        "impl",
        "in",
        "let",
        "loop",
        "match",
        "mod",
        "move",
        "mut",
        "pub",
        "ref",
        "return",
        "self",
        "Self",
        "static",
        "struct",
        "super",
        "trait",
        "true",
        "type",
        "unsafe",
        "use",
        "where",
        "while",
        // strong 2018
        "async",
        "await",
        "dyn",
        // reserved
        "abstract",
        "become",
        "box",
        "do",
        "final",
        "gen",
        "macro",
        "override",
        "priv",
        "try",
        "typeof",
        "unsized",
        "virtual",
        "yield",
        // weak
        "'static",
        "macro_rules",
        "raw",
        "safe",
        "union",
    ];

    keywords.contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that lists of escaped values don't escape the word "and" at the end
    /// of the list.
    #[test]
    fn markup_list_with_and() {
        let input = r"Sets the age group of the user. Allowed values: null, Minor, NotAdult, and Adult. Returned only on $select. Supports $filter (eq, ne, not, and in).".to_string();
        let expected = "Sets the age group of the user. Allowed values: `null`, `Minor`, `NotAdult`, and `Adult`. Returned only on `$select`. Supports `$filter` (`eq`, `ne`, `not`, and `in`).";

        assert_eq!(markup_doc_comment(input), expected);
    }

    /// Test that "for example:" followed by an example escapes the example.
    #[test]
    fn markup_doc_with_examples() {
        let input = r"The country or region where the user is located; for example: US or UK. Maximum length is 128 characters. The SMTP address, for example: serviceadmins@contoso.com. Returned by default.".to_string();
        let expected = "The country or region where the user is located; for example: `US or UK`. Maximum length is 128 characters. The SMTP address, for example: `serviceadmins@contoso.com`. Returned by default.";

        assert_eq!(markup_doc_comment(input), expected);
    }

    #[test]
    fn namespaced_imports() {
        let main_error = CustomRustType::from_base_name("ODataErrors.MainError");
        let user = CustomRustType::from_base_name("user");
        let tokens = imports([&user, &main_error, &user]).to_string();
        assert_eq!(
            tokens,
            quote!(
                use crate::types::o_data_errors::main_error::*;
                use crate::types::user::*;
            )
            .to_string()
        );
    }
}
