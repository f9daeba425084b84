/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Expansion of [RFC 6570](https://www.rfc-editor.org/rfc/rfc6570) URL
//! templates.
//!
//! Only the expression types that appear in Graph URL templates are
//! supported: simple string expansion (`{var}`), reserved expansion
//! (`{+var}`), form-style query expansion (`{?a,b}`) and form-style query
//! continuation (`{&a,b}`). Variable names are matched literally, so a
//! template variable such as `user%2Did` must be looked up under that exact
//! key.

use std::collections::BTreeMap;

use thiserror::Error;

/// Characters allowed unencoded by reserved expansion, on top of the
/// unreserved set. `%` is included so existing percent triplets survive.
const RESERVED: &str = ":/?#[]@!$&'()*+,;=%";

/// The value bound to a template variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateValue {
    Scalar(String),
    List(Vec<String>),
}

impl From<&str> for TemplateValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for TemplateValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<String>> for TemplateValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unterminated expression starting at byte {0}")]
    Unterminated(usize),

    #[error("empty expression at byte {0}")]
    Empty(usize),

    #[error("unsupported expression operator `{0}`")]
    UnsupportedOperator(char),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Operator {
    Simple,
    Reserved,
    Query,
    Continuation,
}

/// Expand `template` using the given variables. Variables with no binding,
/// and lists with no items, are treated as undefined and omitted.
pub fn expand(
    template: &str,
    variables: &BTreeMap<String, TemplateValue>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let len = rest[start..]
            .find('}')
            .ok_or(TemplateError::Unterminated(offset + start))?;
        let expression = &rest[start + 1..start + len];
        expand_expression(expression, variables, offset + start, &mut out)?;

        let consumed = start + len + 1;
        offset += consumed;
        rest = &rest[consumed..];
    }
    out.push_str(rest);

    Ok(out)
}

fn expand_expression(
    expression: &str,
    variables: &BTreeMap<String, TemplateValue>,
    position: usize,
    out: &mut String,
) -> Result<(), TemplateError> {
    let (operator, names) = match expression.chars().next() {
        None => return Err(TemplateError::Empty(position)),
        Some('+') => (Operator::Reserved, &expression[1..]),
        Some('?') => (Operator::Query, &expression[1..]),
        Some('&') => (Operator::Continuation, &expression[1..]),
        Some(op @ ('#' | '.' | '/' | ';' | '=' | ',' | '!' | '@' | '|')) => {
            return Err(TemplateError::UnsupportedOperator(op));
        }
        Some(_) => (Operator::Simple, expression),
    };

    let mut first = true;
    for varspec in names.split(',') {
        let (name, explode) = match varspec.strip_suffix('*') {
            Some(name) => (name, true),
            None => (varspec, false),
        };
        let Some(value) = variables.get(name) else {
            continue;
        };
        let items: Vec<&str> = match value {
            TemplateValue::Scalar(value) => vec![value.as_str()],
            TemplateValue::List(values) if values.is_empty() => continue,
            TemplateValue::List(values) => values.iter().map(String::as_str).collect(),
        };

        match operator {
            Operator::Simple | Operator::Reserved => {
                if !first {
                    out.push(',');
                }
                let rendered = items
                    .iter()
                    .map(|item| encode(item, operator))
                    .collect::<Vec<_>>()
                    .join(",");
                out.push_str(&rendered);
            }
            Operator::Query | Operator::Continuation => {
                let pairs = if explode {
                    items
                        .iter()
                        .map(|item| format!("{name}={}", encode(item, operator)))
                        .collect::<Vec<_>>()
                } else {
                    let joined = items
                        .iter()
                        .map(|item| encode(item, operator))
                        .collect::<Vec<_>>()
                        .join(",");
                    vec![format!("{name}={joined}")]
                };
                for pair in pairs {
                    let lead = if first && operator == Operator::Query {
                        '?'
                    } else {
                        '&'
                    };
                    out.push(lead);
                    out.push_str(&pair);
                    first = false;
                }
            }
        }
        first = false;
    }

    Ok(())
}

fn encode(value: &str, operator: Operator) -> String {
    match operator {
        Operator::Reserved => encode_reserved(value),
        _ => encode_unreserved(value),
    }
}

/// Percent-encode everything outside the unreserved set.
fn encode_unreserved(value: &str) -> String {
    // `byte_serialize` is form encoding, which writes spaces as `+` and
    // escapes literal `+`, so any `+` left in its output was a space. It also
    // keeps `*` and escapes `~`, the reverse of RFC 3986.
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
        .replace('*', "%2A")
        .replace("%7E", "~")
}

fn encode_reserved(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() || "-._~".contains(ch) || RESERVED.contains(ch) {
            out.push(ch);
        } else {
            let mut buf = [0; 4];
            out.push_str(&encode_unreserved(ch.encode_utf8(&mut buf)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, TemplateValue)]) -> BTreeMap<String, TemplateValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn expand_path_variables() {
        let variables = vars(&[
            ("baseurl", "https://graph.microsoft.com/v1.0".into()),
            ("user%2Did", "adele@contoso.com".into()),
        ]);
        let expanded = expand("{+baseurl}/users/{user%2Did}", &variables).unwrap();
        assert_eq!(
            expanded,
            "https://graph.microsoft.com/v1.0/users/adele%40contoso.com"
        );
    }

    #[test]
    fn simple_expansion_encodes_reserved_characters() {
        let variables = vars(&[("id", "a b/c?d".into())]);
        assert_eq!(expand("/x/{id}", &variables).unwrap(), "/x/a%20b%2Fc%3Fd");
    }

    #[test]
    fn simple_expansion_keeps_only_unreserved() {
        let variables = vars(&[("id", "a~b*c-d_e.f+g".into())]);
        assert_eq!(
            expand("/x/{id}", &variables).unwrap(),
            "/x/a~b%2Ac-d_e.f%2Bg"
        );

        let variables = vars(&[("%24search", "\"displayName:ad*\"".into())]);
        assert_eq!(
            expand("/users{?%24search}", &variables).unwrap(),
            "/users?%24search=%22displayName%3Aad%2A%22"
        );
    }

    #[test]
    fn query_expansion_skips_undefined() {
        let variables = vars(&[
            ("%24top", "5".into()),
            (
                "%24select",
                vec!["id".to_string(), "displayName".to_string()].into(),
            ),
        ]);
        let expanded = expand(
            "/users{?%24count,%24select,%24top}",
            &variables,
        )
        .unwrap();
        assert_eq!(expanded, "/users?%24select=id,displayName&%24top=5");
    }

    #[test]
    fn query_expansion_with_nothing_bound() {
        let expanded = expand("/me{?%24expand,%24select}", &BTreeMap::new()).unwrap();
        assert_eq!(expanded, "/me");
    }

    #[test]
    fn empty_list_is_undefined() {
        let variables = vars(&[("%24select", TemplateValue::List(vec![]))]);
        assert_eq!(expand("/me{?%24select}", &variables).unwrap(), "/me");
    }

    #[test]
    fn query_continuation_and_explode() {
        let variables = vars(&[
            ("a", "1".into()),
            ("b", vec!["x".to_string(), "y".to_string()].into()),
        ]);
        assert_eq!(
            expand("/p?fixed=0{&a,b*}", &variables).unwrap(),
            "/p?fixed=0&a=1&b=x&b=y"
        );
    }

    #[test]
    fn query_values_are_encoded() {
        let variables = vars(&[("%24filter", "startsWith(displayName,'A')".into())]);
        assert_eq!(
            expand("/users{?%24filter}", &variables).unwrap(),
            "/users?%24filter=startsWith%28displayName%2C%27A%27%29"
        );
    }

    #[test]
    fn malformed_templates() {
        assert_eq!(
            expand("/users/{user%2Did", &BTreeMap::new()),
            Err(TemplateError::Unterminated(7))
        );
        assert_eq!(
            expand("/users/{}", &BTreeMap::new()),
            Err(TemplateError::Empty(7))
        );
        assert_eq!(
            expand("/users{/id}", &BTreeMap::new()),
            Err(TemplateError::UnsupportedOperator('/'))
        );
    }
}
