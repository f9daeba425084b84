/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::collections::HashMap;
use yaml_rust2::Yaml;
use yaml_rust2::yaml::Hash;

use super::{get_bool_in, get_map_in, get_node_in, get_seq_in, get_str_in};

/// A recursive OpenAPI schema object, or reference to another schema object.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum OaSchema {
    // e.g., `$ref: "#/components/schemas/microsoft.graph.user"`
    Ref {
        reference: String,
    },
    Obj {
        typ: Option<String>,
        format: Option<String>,
        nullable: Option<bool>,
        properties: Option<HashMap<String, OaSchema>>,
        items: Option<Box<OaSchema>>,
        all_of: Option<Vec<OaSchema>>,
        one_of: Option<Vec<OaSchema>>,
        any_of: Option<Vec<OaSchema>>,
        enum_values: Option<Vec<String>>,
        /// Discriminator values mapped to the reference of the schema they
        /// select.
        discriminator: Option<Vec<(String, String)>>,
        description: Option<String>,
        navigation_property: bool,
    },
}

impl Default for OaSchema {
    fn default() -> Self {
        OaSchema::Obj {
            typ: None,
            format: None,
            nullable: None,
            properties: None,
            items: None,
            all_of: None,
            one_of: None,
            any_of: None,
            enum_values: None,
            discriminator: None,
            description: None,
            navigation_property: false,
        }
    }
}

impl OaSchema {
    /// Whether the schema allows `null`, either directly or through an
    /// `anyOf` alternative such as `{type: object, nullable: true}`.
    pub fn nullable(&self) -> Option<bool> {
        match self {
            OaSchema::Ref { .. } => None,
            OaSchema::Obj {
                nullable: Some(nullable),
                ..
            } => Some(*nullable),
            OaSchema::Obj {
                any_of: Some(any_of),
                ..
            } => any_of
                .iter()
                .any(|s| s.nullable() == Some(true))
                .then_some(true),
            OaSchema::Obj { .. } => None,
        }
    }

    pub fn enum_values(&self) -> Option<&[String]> {
        match self {
            OaSchema::Obj {
                enum_values: Some(values),
                ..
            } => Some(values),
            _ => None,
        }
    }
}

/// Recursively parses the given yaml node as a schema object or reference.
pub(crate) fn parse_schema(node: &Yaml) -> OaSchema {
    let map = node
        .as_hash()
        .expect("all schemas should be compound YAML objects");

    parse_schema_from_map(map)
}

/// Recursively parses the schema represented by the given [`Hash`].
fn parse_schema_from_map(map: &Hash) -> OaSchema {
    if let Some(reference) = get_str_in(map, "$ref") {
        return OaSchema::Ref { reference };
    }

    let typ = get_str_in(map, "type");
    let format = get_str_in(map, "format");
    let nullable = get_bool_in(map, "nullable");
    let description = get_str_in(map, "description");

    let properties = get_map_in(map, "properties").map(|props| {
        props
            .into_iter()
            .filter_map(|(k, v)| k.as_str().map(|name| (name.to_string(), parse_schema(v))))
            .collect()
    });

    let items = get_node_in(map, "items").map(|n| Box::new(parse_schema(n)));
    let all_of = get_seq_in(map, "allOf").map(|seq| seq.iter().map(parse_schema).collect());
    let one_of = get_seq_in(map, "oneOf").map(|seq| seq.iter().map(parse_schema).collect());
    let any_of = get_seq_in(map, "anyOf").map(|seq| seq.iter().map(parse_schema).collect());

    let enum_values = get_seq_in(map, "enum").map(|seq| {
        seq.iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect()
    });

    let discriminator = get_map_in(map, "discriminator")
        .and_then(|d| get_map_in(d, "mapping"))
        .map(|mapping| {
            mapping
                .iter()
                .filter_map(|(k, v)| Some((k.as_str()?.to_string(), v.as_str()?.to_string())))
                .collect()
        });

    let navigation_property = get_bool_in(map, "x-ms-navigationProperty").unwrap_or(false);

    OaSchema::Obj {
        typ,
        format,
        nullable,
        properties,
        items,
        all_of,
        one_of,
        any_of,
        enum_values,
        discriminator,
        description,
        navigation_property,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaml_rust2::YamlLoader;

    fn schema(yaml: &str) -> OaSchema {
        let docs = YamlLoader::load_from_str(yaml).unwrap();
        parse_schema(&docs[0])
    }

    #[test]
    fn nullable_through_any_of() {
        let body = schema(
            r##"
anyOf:
  - $ref: '#/components/schemas/microsoft.graph.itemBody'
  - type: object
    nullable: true
description: The body of the message.
"##,
        );
        assert_eq!(body.nullable(), Some(true));

        let id = schema("type: string\n");
        assert_eq!(id.nullable(), None);
    }

    #[test]
    fn discriminator_mapping() {
        let directory_object = schema(
            r##"
title: directoryObject
type: object
discriminator:
  propertyName: '@odata.type'
  mapping:
    '#microsoft.graph.user': '#/components/schemas/microsoft.graph.user'
"##,
        );
        let OaSchema::Obj { discriminator, .. } = directory_object else {
            panic!("expected an object schema");
        };
        assert_eq!(
            discriminator.unwrap(),
            vec![(
                "#microsoft.graph.user".to_string(),
                "#/components/schemas/microsoft.graph.user".to_string()
            )]
        );
    }
}
