/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};

use super::{CustomRustType, RustType, imports, is_rust_keyword, markup_doc_comment};
use crate::GENERATION_DISCLOSURE;
use crate::extract::schema::Property;
use crate::naming::{pascalize, snakeify};

/// A Graph API model, generated as a view over a JSON property bag.
#[derive(Debug, Clone)]
pub struct GraphType {
    name: CustomRustType,
    description: Option<String>,
    odata_type: Option<String>,
    properties: Vec<Property>,
    inherited: Vec<Property>,

    /// Derived types selectable through `@odata.type`, with the value
    /// selecting each.
    derived: Vec<(String, CustomRustType)>,
}

impl GraphType {
    /// `name` is the OpenAPI name without the `microsoft.graph.` prefix.
    pub fn new(
        name: &str,
        description: Option<String>,
        odata_type: Option<String>,
        properties: Vec<Property>,
        inherited: Vec<Property>,
        derived: Vec<(String, CustomRustType)>,
    ) -> Self {
        Self {
            name: CustomRustType::from_base_name(name),
            description,
            odata_type,
            properties,
            inherited,
            derived,
        }
    }

    /// Wire names of every property readable through this type, including
    /// inherited ones.
    fn wire_names(&self) -> Vec<&str> {
        let mut names = self
            .properties
            .iter()
            .chain(&self.inherited)
            .filter(|p| !p.is_ref)
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>();
        names.sort();
        names.dedup();
        names
    }

    fn selection(&self) -> TokenStream {
        let ident = format_ident!("{}Selection", self.name.as_pascal_case());
        let variants = self.wire_names().into_iter().map(|name| {
            let variant = format_ident!("{}", pascalize(name));
            quote! {
                #[strum(serialize = #name)]
                #variant
            }
        });
        quote! {
            #[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
            pub enum #ident {
                #(#variants),*
            }
        }
    }

    /// Getters and setters, plus accessors for parent types, ordered by
    /// method name.
    fn accessors(&self) -> Vec<TokenStream> {
        let mut accessors = self
            .properties
            .iter()
            .map(|property| {
                let name = snakeify(&property.name);
                assert!(
                    !is_rust_keyword(&name),
                    "property {} of {} is a Rust keyword",
                    property.name,
                    self.name.original_name()
                );
                let tokens = if property.is_ref {
                    parent_accessor(&name, &property.rust_type)
                } else {
                    property_accessors(&name, property)
                };
                (name, tokens)
            })
            .collect::<Vec<_>>();
        accessors.sort_by(|(a, _), (b, _)| a.cmp(b));
        accessors.into_iter().map(|(_, tokens)| tokens).collect()
    }

    fn kind(&self) -> TokenStream {
        if self.derived.is_empty() {
            return quote!();
        }
        let ident = format_ident!("{}", self.name.as_pascal_case());
        let kind = format_ident!("{}Kind", self.name.as_pascal_case());
        let enum_doc = format!(
            "A `{ident}` resolved to its most derived known type using `@odata.type`. Unknown or missing discriminators resolve to `{ident}` itself."
        );

        let variants = self.derived.iter().map(|(_, ty)| {
            let variant = format_ident!("{}", ty.as_pascal_case());
            quote!(#variant(#variant<'a>))
        });
        let arms = self.derived.iter().map(|(value, ty)| {
            let variant = format_ident!("{}", ty.as_pascal_case());
            quote!(Some(#value) => Self::#variant(#variant { properties }))
        });

        quote! {
            #[doc = #enum_doc]
            #[derive(Clone, Debug, PartialEq, Eq)]
            pub enum #kind<'a> {
                #(#variants,)*
                #ident(#ident<'a>),
            }

            impl<'a> #kind<'a> {
                pub fn from_properties(properties: Cow<'a, Map<String, Value>>) -> Self {
                    match properties.get(store::ODATA_TYPE_KEY).and_then(Value::as_str) {
                        #(#arms,)*
                        _ => Self::#ident(#ident { properties }),
                    }
                }
            }

            impl<'de> Deserialize<'de> for #kind<'_> {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let properties = Map::deserialize(deserializer)?;
                    Ok(Self::from_properties(Cow::Owned(properties)))
                }
            }
        }
    }

    fn kind_accessors(&self) -> TokenStream {
        if self.derived.is_empty() {
            return quote!();
        }
        let kind = format_ident!("{}Kind", self.name.as_pascal_case());
        quote! {
            #[doc = "The concrete type named by `@odata.type`, borrowing this object's properties."]
            pub fn kind(&self) -> #kind<'_> {
                #kind::from_properties(Cow::Borrowed(&*self.properties))
            }

            pub fn into_kind(self) -> #kind<'a> {
                #kind::from_properties(self.properties)
            }
        }
    }
}

impl ToTokens for GraphType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ident = format_ident!("{}", self.name.as_pascal_case());
        let module_doc = format!("Types related to {ident}. {GENERATION_DISCLOSURE}");
        let struct_doc = self
            .description
            .as_ref()
            .map(|d| {
                let d = markup_doc_comment(d.clone());
                quote!(#[doc = #d])
            })
            .unwrap_or_default();

        let used = self
            .properties
            .iter()
            .filter_map(|p| match &p.rust_type {
                RustType::Custom(ty) if ty != &self.name => Some(ty),
                _ => None,
            })
            .chain(self.derived.iter().map(|(_, ty)| ty));
        let imports = imports(used);

        let selection = self.selection();
        let accessors = self.accessors();
        let kind_accessors = self.kind_accessors();
        let kind = self.kind();

        let odata_type = match &self.odata_type {
            Some(odata_type) => quote!(Some(#odata_type)),
            None => quote!(None),
        };
        let wire_names = self.wire_names();

        tokens.extend(quote! {
            #![doc = #module_doc]
            use crate::Error;
            use crate::store::{self, Model};
            #imports
            use serde::{Deserialize, Serialize};
            use serde_json::{Map, Value};
            use std::borrow::Cow;
            use strum::Display;

            #selection

            #struct_doc
            #[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
            pub struct #ident<'a> {
                #[serde(flatten)]
                pub(crate) properties: Cow<'a, Map<String, Value>>,
            }

            impl<'a> #ident<'a> {
                ///Internal constructor.
                #[allow(dead_code)]
                pub(super) fn new(properties: &'a Map<String, Value>) -> Self {
                    #ident {
                        properties: Cow::Borrowed(properties),
                    }
                }

                #(#accessors)*

                #kind_accessors
            }

            impl From<#ident<'_>> for Value {
                fn from(val: #ident<'_>) -> Self {
                    Value::Object(val.properties.into_owned())
                }
            }

            impl Model for #ident<'_> {
                const ODATA_TYPE: Option<&'static str> = #odata_type;
                const PROPERTIES: &'static [&'static str] = &[#(#wire_names),*];
                fn properties(&self) -> &Map<String, Value> {
                    &self.properties
                }
            }

            #kind
        });
    }
}

/// A view of the same properties as the parent type.
fn parent_accessor(name: &str, rust_type: &RustType) -> TokenStream {
    let RustType::Custom(parent) = rust_type else {
        panic!("parent of a type must be a custom type: {rust_type:?}");
    };
    let method = format_ident!("{name}");
    let parent = format_ident!("{}", parent.as_pascal_case());
    let doc = format!("Accessor to inherited properties from `{parent}`.");
    quote! {
        #[doc = #doc]
        pub fn #method(&self) -> #parent<'_> {
            #parent {
                properties: Cow::Borrowed(&*self.properties),
            }
        }
    }
}

fn property_accessors(name: &str, property: &Property) -> TokenStream {
    let getter = format_ident!("{name}");
    let setter = format_ident!("set_{name}");
    let wire_name = &property.name;
    let doc = property
        .description
        .as_ref()
        .map(|d| {
            let d = markup_doc_comment(d.clone());
            quote!(#[doc = #d])
        })
        .unwrap_or_default();

    let item = property.rust_type.borrowed_token();
    let cast = property.rust_type.cast();
    let (helper, returned) = match (property.is_collection, property.nullable) {
        (false, false) => (quote!(required), item.clone()),
        (false, true) => (quote!(nullable), quote!(Option<#item>)),
        (true, false) => (quote!(collection), quote!(Vec<#item>)),
        (true, true) => (quote!(nullable_collection), quote!(Option<Vec<#item>>)),
    };

    // Collections of models are taken by value so they can be moved into the
    // property bag; strings are borrowed.
    let accepted = if property.is_collection && !property.rust_type.is_model() {
        quote!(&[#item])
    } else if property.is_collection {
        quote!(Vec<#item>)
    } else {
        item
    };
    let accepted = if property.nullable {
        quote!(Option<#accepted>)
    } else {
        accepted
    };

    quote! {
        #doc
        pub fn #getter(&self) -> Result<#returned, Error> {
            store::#helper(&self.properties, #wire_name, #cast)
        }

        pub fn #setter(&mut self, val: #accepted) -> &mut Self {
            store::set(&mut self.properties, #wire_name, val);
            self
        }
    }
}

/// A string enumeration.
#[derive(Debug, Clone)]
pub struct EnumType {
    name: CustomRustType,
    description: Option<String>,
    values: Vec<String>,
}

impl EnumType {
    pub fn new(name: &str, description: Option<String>, values: Vec<String>) -> Self {
        Self {
            name: CustomRustType::from_base_name(name),
            description,
            values,
        }
    }
}

impl ToTokens for EnumType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let ident = format_ident!("{}", self.name.as_pascal_case());
        let module_doc = format!("Types related to {ident}. {GENERATION_DISCLOSURE}");
        let enum_doc = self
            .description
            .as_ref()
            .map(|d| quote!(#[doc = #d]))
            .unwrap_or_default();
        let variants = self.values.iter().map(|value| {
            let variant = format_ident!("{}", pascalize(value));
            quote! {
                #[strum(serialize = #value)]
                #variant
            }
        });

        tokens.extend(quote! {
            #![doc = #module_doc]
            use serde_json::Value;
            use strum::{Display, EnumString};

            #enum_doc
            #[derive(Copy, Clone, Debug, Display, EnumString, PartialEq, Eq)]
            pub enum #ident {
                #(#variants),*
            }

            impl From<#ident> for Value {
                fn from(val: #ident) -> Self {
                    Value::String(val.to_string())
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(name: &str, rust_type: RustType, nullable: bool, is_collection: bool) -> Property {
        Property {
            name: name.to_string(),
            nullable,
            is_collection,
            rust_type,
            description: None,
            is_ref: false,
        }
    }

    #[test]
    fn accessor_shapes() {
        let recipient = RustType::Custom(CustomRustType::from_base_name("recipient"));
        let importance = RustType::Custom(CustomRustType::from_base_name("importance"));

        let tokens = property_accessors(
            "to_recipients",
            &property("toRecipients", recipient, false, true),
        )
        .to_string();
        assert!(tokens.contains(&quote!(Result<Vec<Recipient<'_> >, Error>).to_string()));
        assert!(tokens.contains(&quote!(val: Vec<Recipient<'_> >).to_string()));

        let tokens =
            property_accessors("importance", &property("importance", importance, true, false))
                .to_string();
        let getter = quote!(store::nullable(&self.properties, "importance", store::parse));
        assert!(tokens.contains(&getter.to_string()));
        assert!(tokens.contains(&quote!(val: Option<Importance>).to_string()));

        let tokens =
            property_accessors("categories", &property("categories", RustType::String, false, true))
                .to_string();
        assert!(tokens.contains(&quote!(val: &[&str]).to_string()));
    }

    #[test]
    fn inherited_properties_are_selectable() {
        let entity = Property {
            is_ref: true,
            ..property(
                "entity",
                RustType::Custom(CustomRustType::from_base_name("entity")),
                false,
                false,
            )
        };
        let graph_type = GraphType::new(
            "team",
            None,
            None,
            vec![property("displayName", RustType::String, true, false), entity],
            vec![property("id", RustType::String, false, false)],
            vec![],
        );
        assert_eq!(graph_type.wire_names(), vec!["displayName", "id"]);

        let tokens = quote!(#graph_type).to_string();
        assert!(tokens.contains(&quote!(pub fn entity(&self) -> Entity<'_>).to_string()));
        assert!(tokens.contains(&quote!(use crate::types::entity::*;).to_string()));
        assert!(!tokens.contains("TeamKind"));
    }

    #[test]
    fn discriminated_kinds() {
        let graph_type = GraphType::new(
            "directoryObject",
            None,
            Some("#microsoft.graph.directoryObject".to_string()),
            vec![],
            vec![],
            vec![(
                "#microsoft.graph.user".to_string(),
                CustomRustType::from_base_name("user"),
            )],
        );
        let tokens = quote!(#graph_type).to_string();
        assert!(tokens.contains("pub enum DirectoryObjectKind"));
        assert!(tokens.contains(
            &quote!(Some("#microsoft.graph.user") => Self::User(User { properties })).to_string()
        ));
    }
}
