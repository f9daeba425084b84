/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! Modules for simple representations of generic OpenAPI data from the yaml
//! source, primarily for initial parsing.

use std::collections::HashMap;
use yaml_rust2::{Yaml, YamlLoader, yaml::Hash as YamlHash};

pub mod path;
pub mod schema;

use path::{OaBody, OaParameter, OaPath, parse_body, parse_parameter, parse_path};
use schema::{OaSchema, parse_schema};

/// A parsed OpenAPI yaml file, not yet interpreted.
///
/// Components are keyed by their name as written in the file, e.g.
/// `microsoft.graph.user` for schemas and `top` for parameters.
pub struct LoadedYaml {
    pub schemas: HashMap<String, OaSchema>,
    pub parameters: HashMap<String, OaParameter>,
    pub request_bodies: HashMap<String, OaBody>,
    pub responses: HashMap<String, OaBody>,
    pub paths: HashMap<String, OaPath>,
}

/// Parse the given yaml text as an OpenAPI specification.
pub fn load_yaml(yaml_str: &str) -> Result<LoadedYaml, Box<dyn std::error::Error>> {
    let docs = YamlLoader::load_from_str(yaml_str)?;
    println!("yaml loaded");
    let doc = docs.into_iter().next().ok_or("Empty YAML document")?;

    let components = get_map_key(&doc, "components").ok_or("Missing 'components'")?;
    let schemas = get_map_key(components, "schemas").ok_or("Missing 'components.schemas'")?;
    let paths = get_map_key(&doc, "paths").ok_or("Missing 'paths'")?;
    println!("loaded roots");

    let schemas = collect_components(schemas, parse_schema);
    let parameters = get_map_key(components, "parameters")
        .map(|node| collect_components(node, parse_parameter))
        .unwrap_or_default();
    let request_bodies = get_map_key(components, "requestBodies")
        .map(|node| collect_components(node, parse_body))
        .unwrap_or_default();
    let responses = get_map_key(components, "responses")
        .map(|node| collect_components(node, parse_body))
        .unwrap_or_default();
    let paths = collect_components(paths, parse_path);

    Ok(LoadedYaml {
        schemas,
        parameters,
        request_bodies,
        responses,
        paths,
    })
}

/// Parse every entry of a YAML map with `parse`.
fn collect_components<T>(node: &Yaml, parse: impl Fn(&Yaml) -> T) -> HashMap<String, T> {
    node.as_hash()
        .expect("components should be compound YAML objects")
        .into_iter()
        .filter_map(|(k, v)| k.as_str().map(|name| (name.to_string(), parse(v))))
        .collect()
}

fn get_map_key<'a>(y: &'a Yaml, key: &str) -> Option<&'a Yaml> {
    if let Some(h) = y.as_hash() {
        h.get(&Yaml::from_str(key))
    } else {
        None
    }
}

fn get_str_in(h: &YamlHash, key: &str) -> Option<String> {
    h.get(&Yaml::from_str(key))?.as_str().map(str::to_string)
}

fn get_bool_in(h: &YamlHash, key: &str) -> Option<bool> {
    match h.get(&Yaml::from_str(key)) {
        Some(Yaml::Boolean(b)) => Some(*b),
        _ => None,
    }
}

fn get_map_in<'a>(h: &'a YamlHash, key: &str) -> Option<&'a YamlHash> {
    match h.get(&Yaml::from_str(key)) {
        Some(Yaml::Hash(m)) => Some(m),
        _ => None,
    }
}

fn get_node_in<'a>(h: &'a YamlHash, key: &str) -> Option<&'a Yaml> {
    h.get(&Yaml::from_str(key))
}

fn get_seq_in<'a>(h: &'a YamlHash, key: &str) -> Option<&'a Vec<Yaml>> {
    match h.get(&Yaml::from_str(key)) {
        Some(Yaml::Array(a)) => Some(a),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
openapi: 3.0.4
paths:
  /users/$count:
    description: Provides operations to count the resources in the collection.
    get:
      summary: Get the number of the resource
      parameters:
        - $ref: '#/components/parameters/search'
      responses:
        2XX:
          $ref: '#/components/responses/ODataCountResponse'
components:
  schemas:
    microsoft.graph.bodyType:
      title: bodyType
      enum:
        - text
        - html
      type: string
    ODataCountResponse:
      type: integer
      format: int32
  parameters:
    search:
      name: $search
      in: query
      description: Search items by search phrases
      style: form
      explode: false
      schema:
        type: string
  responses:
    ODataCountResponse:
      description: The count of the resource
      content:
        text/plain:
          schema:
            $ref: '#/components/schemas/ODataCountResponse'
"##;

    #[test]
    fn loads_components_and_paths() {
        let loaded = load_yaml(SAMPLE).unwrap();

        let body_type = &loaded.schemas["microsoft.graph.bodyType"];
        assert_eq!(
            body_type.enum_values(),
            Some(&["text".to_string(), "html".to_string()][..])
        );

        assert_eq!(loaded.parameters["search"].name.as_deref(), Some("$search"));
        assert_eq!(
            loaded.responses["ODataCountResponse"]
                .application_type
                .as_deref(),
            Some("text/plain")
        );

        let count = &loaded.paths["/users/$count"];
        let get = &count.operations["get"];
        assert_eq!(get.summary.as_deref(), Some("Get the number of the resource"));
        let parameters = get.parameters.as_ref().unwrap();
        assert_eq!(
            parameters[0].reference.as_deref(),
            Some("#/components/parameters/search")
        );
        assert!(get.responses.contains_key("2XX"));
    }
}
