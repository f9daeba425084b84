/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::collections::HashMap;

use crate::SUPPORTED_TYPES;
use crate::naming::base_name;
use crate::openapi::schema::OaSchema;
use crate::oxidize::{CustomRustType, RustType};

/// Our representation of a Graph API property.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub nullable: bool,
    pub is_collection: bool,
    pub rust_type: RustType,
    pub description: Option<String>,

    /// Whether this property is an OpenAPI reference (not a Rust reference)
    pub is_ref: bool,
}

/// For the given schema object, extract its Graph API description and properties.
pub fn extract_from_schema(schema: &OaSchema) -> (Option<String>, Vec<Property>) {
    let mut out = Vec::new();
    collect_schema_properties(schema, &mut out);
    (top_level_description(schema), out)
}

/// Properties declared by the ancestors of `schema`, following `allOf`
/// references whether or not the ancestor is generated itself.
pub fn inherited_properties(
    schemas: &HashMap<String, OaSchema>,
    schema: &OaSchema,
) -> Vec<Property> {
    let mut out = Vec::new();
    let OaSchema::Obj {
        all_of: Some(all_of),
        ..
    } = schema
    else {
        return out;
    };
    for parent in all_of {
        let OaSchema::Ref { reference } = parent else {
            continue;
        };
        let Some(parent) = schemas.get(ref_file_name(reference)) else {
            println!("missing parent schema {reference}");
            continue;
        };
        let (_, properties) = extract_from_schema(parent);
        out.extend(properties.into_iter().filter(|p| !p.is_ref));
        out.extend(inherited_properties(schemas, parent));
    }
    out
}

/// The `@odata.type` value of the schema, if it declares the discriminator
/// property.
pub fn odata_type(full_name: &str, schema: &OaSchema) -> Option<String> {
    fn declares_discriminator(schema: &OaSchema) -> bool {
        match schema {
            OaSchema::Obj {
                properties: Some(properties),
                ..
            } if properties.contains_key("@odata.type") => true,
            OaSchema::Obj {
                all_of: Some(all_of),
                ..
            } => all_of.iter().any(declares_discriminator),
            _ => false,
        }
    }
    declares_discriminator(schema).then(|| format!("#{full_name}"))
}

/// The values of a string enumeration schema.
pub fn enum_values(schema: &OaSchema) -> Option<&[String]> {
    schema.enum_values()
}

/// The supported types the discriminator of `schema` can select, with the
/// `@odata.type` value selecting each, sorted by type name.
pub fn discriminator_mapping(schema: &OaSchema) -> Vec<(String, CustomRustType)> {
    let mut out = Vec::new();
    let mut pending = vec![schema];
    while let Some(schema) = pending.pop() {
        let OaSchema::Obj {
            discriminator,
            all_of,
            ..
        } = schema
        else {
            continue;
        };
        for (value, reference) in discriminator.iter().flatten() {
            if let Some((_, ty)) = custom_from_ref(reference) {
                out.push((value.clone(), ty));
            }
        }
        pending.extend(all_of.iter().flatten());
    }
    out.sort_by(|(_, a), (_, b)| a.as_pascal_case().cmp(b.as_pascal_case()));
    out
}

fn top_level_description(schema: &OaSchema) -> Option<String> {
    match schema {
        OaSchema::Obj {
            description: Some(description),
            ..
        } => Some(description.clone()),
        OaSchema::Obj {
            all_of: Some(all_of),
            ..
        } => {
            for element in all_of {
                if let OaSchema::Obj {
                    description: Some(description),
                    ..
                } = element
                {
                    return Some(description.clone());
                }
            }
            None
        }
        _ => None,
    }
}

fn collect_schema_properties(schema: &OaSchema, out: &mut Vec<Property>) {
    match schema {
        OaSchema::Obj {
            navigation_property: true,
            ..
        } => {
            // navigation properties aren't real properties, they basically just inform about a subpath
        }
        OaSchema::Obj {
            all_of: Some(list), ..
        } => {
            for s in list {
                match s {
                    OaSchema::Ref { reference } => {
                        if let Some((name, ty)) = custom_from_ref(reference) {
                            out.push(Property {
                                name,
                                nullable: false,
                                is_collection: false,
                                is_ref: true,
                                rust_type: RustType::Custom(ty),
                                description: None,
                            });
                        }
                    }
                    OaSchema::Obj { .. } => {
                        collect_schema_properties(s, out);
                    }
                }
            }
        }
        OaSchema::Obj {
            properties: Some(props),
            ..
        } => {
            for (name, prop_schema) in props {
                if let OaSchema::Obj {
                    navigation_property: true,
                    ..
                } = prop_schema
                {
                    continue;
                }
                if name.starts_with("@odata.") {
                    continue;
                }
                if let Some((is_collection, description, rust_type)) =
                    map_openapi_schema_to_rust(prop_schema)
                {
                    let nullable = prop_schema.nullable().unwrap_or(false);
                    out.push(Property {
                        name: name.clone(),
                        nullable,
                        is_collection,
                        // Only `allOf` references are inheritance.
                        is_ref: false,
                        rust_type,
                        description,
                    });
                } else {
                    println!("Skipping unsupported type: {name}");
                }
            }
        }
        OaSchema::Obj {
            enum_values: Some(_),
            ..
        } => {
            // enumerations have no properties
        }
        OaSchema::Obj { typ: Some(_), .. } => {
            // a bare primitive, e.g. the integer returned by `$count`
        }
        OaSchema::Ref { .. } => {}
        _ => panic!("unknown schema structure: {schema:?}"),
    }
}

/// The supported type named by `reference`, with the simple name of the
/// property accessing it when inherited.
fn custom_from_ref(reference: &str) -> Option<(String, CustomRustType)> {
    let base = base_name(ref_file_name(reference));
    if SUPPORTED_TYPES.contains(&base.as_str()) {
        let ty = CustomRustType::from_base_name(&base);
        Some((ty.original_name().clone(), ty))
    } else {
        None
    }
}

/// Given a reference in the shape `#/components/schemas/microsoft.graph.user`,
/// get the name of the component being referred to. Note that the middle
/// part is not always "schemas", e.g. `#/components/requestBodies/sendMailRequestBody`.
pub(crate) fn ref_file_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

pub(crate) fn map_openapi_schema_to_rust(
    schema: &OaSchema,
) -> Option<(bool, Option<String>, RustType)> {
    match schema {
        OaSchema::Ref { .. } => {
            let simple = match_supported_custom_from_schema(schema);
            if simple.is_none() {
                println!("skipping unsupported schema: {schema:?}");
            }
            Some((false, None, RustType::Custom(simple?)))
        }
        OaSchema::Obj {
            typ,
            format,
            items,
            description,
            ..
        } => {
            let description = description.clone();
            if let Some(t) = typ.as_deref() {
                match t {
                    "array" => {
                        let item = items.as_deref()?;
                        if let OaSchema::Obj { typ: Some(s), .. } = item {
                            if s == "array" {
                                println!("skipping nested arrays: {schema:?}");
                                return None;
                            }
                        }
                        let (_, _, typ) = map_openapi_schema_to_rust(item)?;
                        Some((true, description, typ))
                    }
                    "string" => Some((
                        false,
                        description,
                        map_string_format_to_rust(format.as_deref())?,
                    )),
                    "boolean" => Some((false, description, RustType::Bool)),
                    "integer" => Some((
                        false,
                        description,
                        map_integer_format_to_rust(format.as_deref()),
                    )),
                    "number" => Some((
                        false,
                        description,
                        map_number_format_to_rust(format.as_deref()),
                    )),
                    "object" => match_supported_custom_from_schema(schema)
                        .map(|ty| (false, description, RustType::Custom(ty))),
                    _ => None,
                }
            } else {
                match_supported_custom_from_schema(schema)
                    .map(|ty| (false, description, RustType::Custom(ty)))
            }
        }
    }
}

// Try to discover a supported custom type by scanning refs inside composition.
fn match_supported_custom_from_schema(schema: &OaSchema) -> Option<CustomRustType> {
    match schema {
        OaSchema::Ref { reference } => custom_from_ref(reference).map(|(_, ty)| ty),
        OaSchema::Obj {
            all_of,
            one_of,
            any_of,
            ..
        } => {
            for items in [all_of, one_of, any_of].into_iter().flatten() {
                for s in items {
                    if let Some(found) = match_supported_custom_from_schema(s) {
                        return Some(found);
                    }
                }
            }
            None
        }
    }
}

fn map_string_format_to_rust(fmt: Option<&str>) -> Option<RustType> {
    match fmt {
        None => Some(RustType::String),
        Some("byte") | Some("binary") => {
            println!("skipping binary string");
            None
        }
        Some(t) => {
            println!("treating {t} as a string");
            Some(RustType::String)
        }
    }
}

fn map_integer_format_to_rust(fmt: Option<&str>) -> RustType {
    match fmt {
        Some("uint8") | Some("int8") | Some("int16") | Some("int32") => RustType::I32,
        Some("int64") => RustType::I64,
        // Default to i32 if unspecified
        None => RustType::I32,
        Some(fmt) => panic!("Unknown number format: {fmt}"),
    }
}

fn map_number_format_to_rust(fmt: Option<&str>) -> RustType {
    match fmt {
        Some("uint8") | Some("int8") | Some("int16") | Some("int32") => RustType::I32,
        Some("int64") => RustType::I64,
        Some("float") | Some("double") | Some("decimal") => RustType::F64,
        None => panic!("Number with unspecified format"),
        Some(fmt) => panic!("Unknown number format: {fmt}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaml_rust2::YamlLoader;

    fn schema(yaml: &str) -> OaSchema {
        let docs = YamlLoader::load_from_str(yaml).unwrap();
        crate::openapi::schema::parse_schema(&docs[0])
    }

    fn message() -> OaSchema {
        schema(
            r##"
allOf:
  - $ref: '#/components/schemas/microsoft.graph.outlookItem'
  - title: message
    type: object
    properties:
      body:
        anyOf:
          - $ref: '#/components/schemas/microsoft.graph.itemBody'
          - type: object
            nullable: true
        description: The body of the message.
      toRecipients:
        type: array
        items:
          $ref: '#/components/schemas/microsoft.graph.recipient'
        description: The To recipients for the message.
      isRead:
        type: boolean
        nullable: true
      uniqueBody:
        anyOf:
          - $ref: '#/components/schemas/microsoft.graph.uniqueBody'
          - type: object
            nullable: true
      attachments:
        type: array
        items:
          $ref: '#/components/schemas/microsoft.graph.attachment'
        x-ms-navigationProperty: true
      '@odata.type':
        type: string
        default: '#microsoft.graph.message'
"##,
        )
    }

    #[test]
    fn properties_of_derived_type() {
        let (_, mut properties) = extract_from_schema(&message());
        properties.sort_by(|a, b| a.name.cmp(&b.name));
        let names = properties.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["body", "isRead", "outlookItem", "toRecipients"]);

        let body = &properties[0];
        assert!(body.nullable && !body.is_collection && !body.is_ref);
        assert!(matches!(&body.rust_type, RustType::Custom(ty) if ty.as_pascal_case() == "ItemBody"));

        let parent = &properties[2];
        assert!(parent.is_ref);

        let to_recipients = &properties[3];
        assert!(to_recipients.is_collection && !to_recipients.nullable);
    }

    #[test]
    fn inherits_through_all_of() {
        let outlook_item = schema(
            r##"
allOf:
  - $ref: '#/components/schemas/microsoft.graph.entity'
  - title: outlookItem
    type: object
    properties:
      categories:
        type: array
        items:
          type: string
          nullable: true
"##,
        );
        let entity = schema(
            r##"
title: entity
type: object
properties:
  id:
    type: string
  '@odata.type':
    type: string
"##,
        );
        let schemas = HashMap::from([
            ("microsoft.graph.outlookItem".to_string(), outlook_item),
            ("microsoft.graph.entity".to_string(), entity),
        ]);

        let inherited = inherited_properties(&schemas, &message());
        let names = inherited.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["categories", "id"]);

        assert_eq!(
            odata_type("microsoft.graph.message", &message()).as_deref(),
            Some("#microsoft.graph.message")
        );
        assert_eq!(
            odata_type("microsoft.graph.outlookItem", &schemas["microsoft.graph.outlookItem"]),
            None
        );
    }
}
