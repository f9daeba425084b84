/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use strum::Display;

use crate::SUPPORTED_TYPES;
use crate::naming::base_name;
use crate::openapi::LoadedYaml;
use crate::openapi::path::{OaBody, OaOperation, OaParameter, OaPath};
use crate::openapi::schema::OaSchema;
use crate::oxidize::{CustomRustType, RustType};

use super::schema::{extract_from_schema, map_openapi_schema_to_rust, ref_file_name};

const DELTA_RESPONSE: &str = "BaseDeltaFunctionResponse";

/// Our representation of a Graph API path.
///
/// This follows a typical OpenAPI structure where a "path" is a collection
/// of operations using the same HTTP path.
#[derive(Debug, Clone)]
pub struct Path {
    pub name: String,
    pub description: Option<String>,
    pub operations: Vec<Operation>,
}

/// A structured Graph API operation (i.e., HTTP request).
#[derive(Debug, Clone)]
pub struct Operation {
    pub method: Method,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub external_docs: Option<String>,
    /// Names of the OData query options accepted, e.g. `$select`.
    pub query: Vec<String>,
    pub body: Option<CustomRustType>,
    pub success: Success,
}

/// An HTTP method.
// It's a bit unusual to derive Ord for this, but we use it to get a (somewhat
// arbitrary) stable order when defining implementations.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

#[derive(Debug, Clone)]
pub struct ParseError(String);

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let Self(s) = self;
        s.fmt(f)
    }
}

impl TryFrom<&str> for Method {
    type Error = ParseError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "get" => Ok(Self::Get),
            "patch" => Ok(Self::Patch),
            "post" => Ok(Self::Post),
            "put" => Ok(Self::Put),
            "delete" => Ok(Self::Delete),
            s => Err(ParseError(format!("unknown method: {s}"))),
        }
    }
}

/// What a successful response to an operation contains.
#[derive(Debug, Clone)]
pub enum Success {
    /// Successful response contains no body
    NoContent,

    /// A single model.
    Entity(CustomRustType),

    /// One page of a collection, possibly with a next link.
    Paginated {
        collection: CustomRustType,
        item: CustomRustType,
    },

    /// One round of a delta query over items of the given type.
    Delta(CustomRustType),

    /// A `text/plain` scalar, e.g. the result of `$count`.
    Primitive(RustType),
}

impl Success {
    /// The model whose properties `$select` can name.
    pub fn selectable_type(&self) -> Option<&CustomRustType> {
        match self {
            Success::Entity(ty) => Some(ty),
            Success::Paginated { item, .. } | Success::Delta(item) => Some(item),
            Success::NoContent | Success::Primitive(_) => None,
        }
    }
}

/// A child of a path in the resource tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// A fixed segment, e.g. `messages` below `/me`.
    Named { segment: String, path: String },

    /// An item of a collection, e.g. `{user-id}` below `/users`.
    Item { parameter: String, path: String },
}

/// The children of `parent` among `paths`, named segments first.
pub fn navigation(parent: &str, paths: &[&str]) -> Vec<Navigation> {
    let mut named = vec![];
    let mut items = vec![];
    for path in paths {
        let Some(segment) = path
            .strip_prefix(parent)
            .and_then(|rest| rest.strip_prefix('/'))
        else {
            continue;
        };
        if segment.is_empty() || segment.contains('/') {
            continue;
        }
        if let Some(parameter) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            items.push(Navigation::Item {
                parameter: parameter.to_string(),
                path: path.to_string(),
            });
        } else {
            named.push((segment, path));
        }
    }
    named.sort();
    named
        .into_iter()
        .map(|(segment, path)| Navigation::Named {
            segment: segment.to_string(),
            path: path.to_string(),
        })
        .chain(items)
        .collect()
}

/// For the given OpenAPI path, extract its Graph API description and supported
/// requests.
pub fn extract_from_oa_path(name: String, oa_path: &OaPath, loaded: &LoadedYaml) -> Path {
    let OaPath {
        description,
        operations,
    } = oa_path;
    let description = description.clone();

    let mut operations = operations
        .iter()
        .filter_map(|(method, request)| {
            let method = match Method::try_from(method.as_str()) {
                Ok(method) => method,
                Err(e) => {
                    eprintln!("skipping operation on {name}: {e}");
                    return None;
                }
            };
            Some(extract_operation(method, request, loaded))
        })
        .collect::<Vec<_>>();
    operations.sort_by(|a, b| a.method.cmp(&b.method));

    Path {
        name,
        description,
        operations,
    }
}

fn extract_operation(method: Method, request: &OaOperation, loaded: &LoadedYaml) -> Operation {
    let mut query = request
        .parameters
        .iter()
        .flatten()
        .map(|p| resolve_parameter(p, loaded))
        .filter(|p| p.r#in.as_deref() == Some("query"))
        .filter_map(|p| p.name.clone())
        .collect::<Vec<_>>();
    query.sort();
    query.dedup();

    let body = request.body.as_ref().map(body_type);
    let success = success(request, loaded);

    Operation {
        method,
        summary: request.summary.clone(),
        description: request.description.clone(),
        external_docs: request.external_docs.clone(),
        query,
        body,
        success,
    }
}

fn resolve_parameter<'a>(parameter: &'a OaParameter, loaded: &'a LoadedYaml) -> &'a OaParameter {
    match &parameter.reference {
        Some(reference) => loaded
            .parameters
            .get(ref_file_name(reference))
            .unwrap_or_else(|| panic!("unknown parameter: {reference}")),
        None => parameter,
    }
}

/// The model sent as a request body. Request bodies declared under
/// `components/requestBodies` are generated under their own name.
fn body_type(body: &OaBody) -> CustomRustType {
    let OaSchema::Ref { reference } = &body.schema else {
        panic!("inline request bodies are not supported: {body:?}");
    };
    let base = base_name(ref_file_name(reference));
    assert!(
        SUPPORTED_TYPES.contains(&base.as_str()),
        "unsupported request body: {reference}"
    );
    CustomRustType::from_base_name(&base)
}

/// Follow a `$ref` to `components/responses`.
fn resolve_response<'a>(body: &'a OaBody, loaded: &'a LoadedYaml) -> &'a OaBody {
    match &body.schema {
        OaSchema::Ref { reference } if reference.contains("/responses/") => loaded
            .responses
            .get(ref_file_name(reference))
            .unwrap_or_else(|| panic!("unknown response: {reference}")),
        _ => body,
    }
}

fn success(request: &OaOperation, loaded: &LoadedYaml) -> Success {
    let body = request
        .responses
        .iter()
        .filter(|(status, _)| status.starts_with('2') && status.as_str() != "204")
        .find_map(|(_, body)| body.as_ref());
    let Some(body) = body else {
        assert!(
            request.responses.contains_key("204"),
            "success response: {:?}",
            request.responses
        );
        return Success::NoContent;
    };
    let body = resolve_response(body, loaded);

    if body.application_type.as_deref() == Some("text/plain") {
        let schema = match &body.schema {
            OaSchema::Ref { reference } => loaded
                .schemas
                .get(ref_file_name(reference))
                .unwrap_or_else(|| panic!("unknown schema: {reference}")),
            schema => schema,
        };
        let Some((false, _, rust_type)) = map_openapi_schema_to_rust(schema) else {
            panic!("unsupported text response: {schema:?}");
        };
        return Success::Primitive(rust_type);
    }

    if is_delta(&body.schema) {
        return Success::Delta(value_type(&body.schema));
    }

    let OaSchema::Ref { reference } = &body.schema else {
        panic!("unsupported response: {body:?}");
    };
    let base = base_name(ref_file_name(reference));
    assert!(
        SUPPORTED_TYPES.contains(&base.as_str()),
        "unsupported response type: {reference}"
    );
    let ty = CustomRustType::from_base_name(&base);
    if request.pageable {
        let collection = loaded
            .schemas
            .get(ref_file_name(reference))
            .unwrap_or_else(|| panic!("unknown schema: {reference}"));
        Success::Paginated {
            collection: ty,
            item: value_type(collection),
        }
    } else {
        Success::Entity(ty)
    }
}

fn is_delta(schema: &OaSchema) -> bool {
    let OaSchema::Obj {
        all_of: Some(all_of),
        ..
    } = schema
    else {
        return false;
    };
    all_of.iter().any(
        |s| matches!(s, OaSchema::Ref { reference } if ref_file_name(reference) == DELTA_RESPONSE),
    )
}

/// The item type of the `value` array of a collection or delta response.
fn value_type(schema: &OaSchema) -> CustomRustType {
    let (_, properties) = extract_from_schema(schema);
    properties
        .into_iter()
        .find_map(|p| match p.rust_type {
            RustType::Custom(ty) if p.name == "value" && p.is_collection => Some(ty),
            _ => None,
        })
        .unwrap_or_else(|| panic!("collection without a supported `value`: {schema:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: [&str; 6] = [
        "/users",
        "/users/$count",
        "/users/{user-id}",
        "/users/{user-id}/mailFolders",
        "/me",
        "/me/sendMail",
    ];

    #[test]
    fn children_of_collection() {
        assert_eq!(
            navigation("/users", &PATHS),
            vec![
                Navigation::Named {
                    segment: "$count".to_string(),
                    path: "/users/$count".to_string()
                },
                Navigation::Item {
                    parameter: "user-id".to_string(),
                    path: "/users/{user-id}".to_string()
                },
            ]
        );
        assert_eq!(navigation("/users/{user-id}/mailFolders", &PATHS), vec![]);
    }

    #[test]
    fn parses_methods() {
        assert_eq!(Method::try_from("patch").unwrap(), Method::Patch);
        assert!(Method::try_from("trace").is_err());
        assert!(Method::Get < Method::Post && Method::Patch < Method::Delete);
    }
}
