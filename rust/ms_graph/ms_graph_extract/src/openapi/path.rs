/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::collections::HashMap;
use yaml_rust2::{Yaml, yaml::Hash as YamlHash};

use super::{OaSchema, get_map_in, get_node_in, get_seq_in, get_str_in, parse_schema};

const METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// An OpenAPI path.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OaPath {
    pub description: Option<String>,
    pub operations: HashMap<String, OaOperation>,
}

/// An OpenAPI Operation (request).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OaOperation {
    pub summary: Option<String>,
    pub description: Option<String>,

    // this field is technically structured, but we only store the url, since the only additional
    // info is always the useless description "Find more info here"
    pub external_docs: Option<String>,
    pub parameters: Option<Vec<OaParameter>>,
    pub body: Option<OaBody>,
    pub responses: HashMap<String, Option<OaBody>>,

    /// Whether `x-ms-pageable` is set, i.e. the response may carry a next
    /// link.
    pub pageable: bool,
}

/// An OpenAPI HTTP request parameter, or a reference to one declared under
/// `components/parameters`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct OaParameter {
    pub reference: Option<String>,
    pub name: Option<String>,
    pub r#in: Option<String>,
    pub description: Option<String>,
    pub style: Option<String>,
    pub schema: Option<OaSchema>,
}

/// An OpenAPI HTTP request or response body.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OaBody {
    pub application_type: Option<String>,
    pub description: Option<String>,
    pub schema: OaSchema,
}

/// Parse the given yaml node as an OpenAPI path.
pub(super) fn parse_path(node: &Yaml) -> OaPath {
    let map = node
        .as_hash()
        .expect("all paths should be compound YAML objects");

    let description = get_str_in(map, "description");
    let operations = map
        .iter()
        .filter_map(|(key, node)| {
            let key = key.as_str().expect("keys are `str`s");
            // Skips `description`, `parameters`, `x-ms-docs-grouped-path`, etc.
            if !METHODS.contains(&key) {
                return None;
            }
            let map = node
                .as_hash()
                .unwrap_or_else(|| panic!("expected operation, got: {node:?}"));
            let operation = OaOperation {
                summary: get_str_in(map, "summary"),
                description: get_str_in(map, "description"),
                external_docs: get_external_docs(map),
                parameters: get_parameters(map),
                body: get_map_in(map, "requestBody").and_then(get_body),
                responses: get_responses(map),
                pageable: get_node_in(map, "x-ms-pageable").is_some(),
            };
            Some((key.to_string(), operation))
        })
        .collect();

    OaPath {
        description,
        operations,
    }
}

/// Parse the given yaml node as a request or response body.
pub(super) fn parse_body(node: &Yaml) -> OaBody {
    let map = node
        .as_hash()
        .expect("all bodies should be compound YAML objects");
    get_body(map).unwrap_or_else(|| OaBody {
        application_type: None,
        description: get_str_in(map, "description"),
        schema: OaSchema::default(),
    })
}

/// Parse the given yaml node as a parameter.
pub(super) fn parse_parameter(node: &Yaml) -> OaParameter {
    let map = node
        .as_hash()
        .expect("parameters should be compound YAML objects");
    if let Some(reference) = get_str_in(map, "$ref") {
        return OaParameter {
            reference: Some(reference),
            ..Default::default()
        };
    }
    OaParameter {
        reference: None,
        name: get_str_in(map, "name"),
        r#in: get_str_in(map, "in"),
        description: get_str_in(map, "description"),
        style: get_str_in(map, "style"),
        schema: get_node_in(map, "schema").map(parse_schema),
    }
}

fn get_external_docs(map: &YamlHash) -> Option<String> {
    let map = get_map_in(map, "externalDocs")?;
    Some(get_str_in(map, "url").expect("external docs should have url"))
}

fn get_body(map: &YamlHash) -> Option<OaBody> {
    if let Some(reference) = get_str_in(map, "$ref") {
        return Some(OaBody {
            application_type: None,
            description: None,
            schema: OaSchema::Ref { reference },
        });
    }
    let content = get_map_in(map, "content")?;
    let (application_type, application) = content
        .iter()
        .next()
        .expect("content should have an application type");
    let application_type = application_type.as_str().map(str::to_string);
    let application = application
        .as_hash()
        .expect("application should be a compound YAML type");
    let schema = get_node_in(application, "schema").expect("content should have a schema");
    let schema = parse_schema(schema);

    let description = get_str_in(map, "description");

    Some(OaBody {
        application_type,
        description,
        schema,
    })
}

fn get_responses(map: &YamlHash) -> HashMap<String, Option<OaBody>> {
    let responses = get_map_in(map, "responses").expect("requests should have responses");
    responses
        .iter()
        .map(|(k, v)| {
            // Status codes may be parsed as integers, e.g. `204`.
            let status = match k {
                Yaml::Integer(code) => code.to_string(),
                k => k
                    .as_str()
                    .expect("response keys should be strings or status codes")
                    .to_string(),
            };
            let map = v
                .as_hash()
                .expect("response values should be compound YAML objects");
            (status, get_body(map))
        })
        .collect()
}

fn get_parameters(map: &YamlHash) -> Option<Vec<OaParameter>> {
    let parameters = get_seq_in(map, "parameters")?;
    Some(parameters.iter().map(parse_parameter).collect())
}
