/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};

use super::{CustomRustType, imports, markup_doc_comment};
use crate::GENERATION_DISCLOSURE;
use crate::extract::path::{Method, Navigation, Operation, Path, Success};
use crate::naming::snakeify;

/// The generated module for one Graph API path: its operations and the
/// request builder navigating to and executing them.
#[derive(Debug, Clone)]
pub struct PathModule {
    path: Path,
    children: Vec<Navigation>,
}

impl PathModule {
    pub fn new(path: Path, children: Vec<Navigation>) -> Self {
        Self { path, children }
    }

    /// The RFC 6570 template for the path, with every query option accepted
    /// by one of its operations.
    fn url_template(&self) -> String {
        let path = self
            .path
            .name
            .split('/')
            .map(|segment| {
                if segment.starts_with('{') {
                    segment.replace('-', "%2D")
                } else {
                    segment.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("/");

        let mut query = self
            .path
            .operations
            .iter()
            .flat_map(|op| &op.query)
            .map(|name| name.replace('$', "%24"))
            .collect::<Vec<_>>();
        query.sort();
        query.dedup();

        if query.is_empty() {
            format!("{{+baseurl}}{path}")
        } else {
            format!("{{+baseurl}}{path}{{?{}}}", query.join(","))
        }
    }

    fn children(&self) -> Vec<TokenStream> {
        self.children
            .iter()
            .map(|child| match child {
                Navigation::Named { segment, path } => {
                    let method = format_ident!("{}", snakeify(segment));
                    let module = format_ident!("{}", snakeify(path));
                    quote! {
                        pub fn #method(&self) -> super::#module::RequestBuilder<A> {
                            super::#module::RequestBuilder::new(self.base.clone())
                        }
                    }
                }
                Navigation::Item { parameter, path } => {
                    let name = snakeify(parameter);
                    let method = format_ident!("by_{name}");
                    let argument = format_ident!("{name}");
                    let module = format_ident!("{}", snakeify(path));
                    let key = parameter.replace('-', "%2D");
                    let doc = format!("Navigate to the item identified by `{name}`.");
                    quote! {
                        #[doc = #doc]
                        pub fn #method(&self, #argument: impl Into<String>) -> super::#module::RequestBuilder<A> {
                            super::#module::RequestBuilder::new(self.base.child(#key, #argument))
                        }
                    }
                }
            })
            .collect()
    }
}

impl ToTokens for PathModule {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let module_doc = match &self.path.description {
            Some(description) => format!("{description}\n\n{GENERATION_DISCLOSURE}"),
            None => GENERATION_DISCLOSURE.to_string(),
        };

        let used = self.path.operations.iter().flat_map(|op| {
            let (collection, item) = match &op.success {
                Success::Entity(ty) | Success::Delta(ty) => (None, Some(ty)),
                Success::Paginated { collection, item } => (Some(collection), Some(item)),
                Success::NoContent | Success::Primitive(_) => (None, None),
            };
            [op.body.as_ref(), collection, item].into_iter().flatten()
        });
        let imports = imports(used);
        let infallible = self
            .path
            .operations
            .iter()
            .any(|op| !op.query.is_empty() && op.success.selectable_type().is_none())
            .then(|| quote!(use std::convert::Infallible;));

        let url_template = self.url_template();
        let operations = self.path.operations.iter().map(operation);
        let request_builder = request_builder(&self.path, self.children());

        tokens.extend(quote! {
            #![doc = #module_doc]
            #imports
            use crate::*;
            use http::{HeaderMap, method::Method};
            #infallible

            pub const URL_TEMPLATE: &str = #url_template;

            #(#operations)*

            #request_builder
        });
    }
}

fn op_ident(method: Method) -> proc_macro2::Ident {
    format_ident!("{method}")
}

fn http_method(method: Method) -> proc_macro2::Ident {
    format_ident!("{}", method.to_string().to_ascii_uppercase())
}

fn body_ident(op: &Operation) -> Option<proc_macro2::Ident> {
    op.body
        .as_ref()
        .map(|ty| format_ident!("{}", ty.as_pascal_case()))
}

/// The operation's response type with the given lifetime.
fn response_type(success: &Success, lifetime: TokenStream) -> TokenStream {
    fn with_lifetime(ty: &CustomRustType, lifetime: &TokenStream) -> TokenStream {
        let ident = format_ident!("{}", ty.as_pascal_case());
        quote!(#ident<#lifetime>)
    }

    match success {
        Success::NoContent => quote!(()),
        Success::Entity(ty) => with_lifetime(ty, &lifetime),
        Success::Paginated { collection, .. } => {
            let collection = with_lifetime(collection, &lifetime);
            quote!(Paginated<#collection>)
        }
        Success::Delta(item) => {
            let item = with_lifetime(item, &lifetime);
            quote!(DeltaResponse<Vec<#item>>)
        }
        Success::Primitive(rust_type) => rust_type.borrowed_token(),
    }
}

fn accept(success: &Success) -> TokenStream {
    match success {
        Success::Primitive(_) => quote!(TEXT_CONTENT_TYPE),
        _ => quote!(JSON_CONTENT_TYPE),
    }
}

fn operation_doc(op: &Operation) -> Option<String> {
    let mut parts = [&op.summary, &op.description]
        .into_iter()
        .flatten()
        .map(|s| markup_doc_comment(s.clone()))
        .collect::<Vec<_>>();
    if let Some(url) = &op.external_docs {
        parts.push(format!(
            "More information available via [Microsoft documentation]({url})."
        ));
    }
    (!parts.is_empty()).then(|| parts.join("\n\n"))
}

/// The query capability marker implemented for each accepted option.
fn capability(query: &str) -> Option<proc_macro2::Ident> {
    let name = match query {
        "$count" => "Count",
        "$expand" => "Expand",
        "$filter" => "Filter",
        "$orderby" => "OrderBy",
        "$search" => "Search",
        "$select" => "Select",
        "$skip" => "Skip",
        "$top" => "Top",
        _ => return None,
    };
    Some(format_ident!("{name}"))
}

fn operation(op: &Operation) -> TokenStream {
    let ident = op_ident(op.method);
    let method = http_method(op.method);
    let doc = operation_doc(op).map(|doc| quote!(#[doc = #doc]));
    let response = response_type(&op.success, quote!('response));
    let accept = accept(&op.success);

    let selection = match op.success.selectable_type() {
        Some(ty) => {
            let ident = format_ident!("{}Selection", ty.as_pascal_case());
            quote!(#ident)
        }
        None => quote!(Infallible),
    };
    let has_query = !op.query.is_empty();
    let (query_field, query_init, apply_query) = if has_query {
        (
            quote!(query: QueryOptions<#selection>,),
            quote!(query: QueryOptions::default(),),
            quote!(self.query.apply(&mut request);),
        )
    } else {
        (quote!(), quote!(), quote!())
    };

    let (definition, body_impl) = match body_ident(op) {
        Some(body) => (
            quote! {
                #[derive(Debug)]
                pub struct #ident<'body> {
                    path_parameters: PathParameters,
                    headers: HeaderMap,
                    #query_field
                    body: #body<'body>,
                }

                impl<'body> #ident<'body> {
                    pub fn new(path_parameters: PathParameters, body: #body<'body>) -> Self {
                        Self {
                            path_parameters,
                            headers: HeaderMap::new(),
                            #query_init
                            body,
                        }
                    }
                }
            },
            Some(body),
        ),
        None => (
            quote! {
                #[derive(Debug)]
                pub struct #ident {
                    path_parameters: PathParameters,
                    headers: HeaderMap,
                    #query_field
                }

                impl #ident {
                    pub fn new(path_parameters: PathParameters) -> Self {
                        Self {
                            path_parameters,
                            headers: HeaderMap::new(),
                            #query_init
                        }
                    }
                }
            },
            None,
        ),
    };

    let (impl_generics, self_type, body_type, set_body) = match &body_impl {
        Some(body) => (
            quote!(<'body>),
            quote!(#ident<'body>),
            quote!(#body<'body>),
            quote!(request.set_json_content(&self.body)?;),
        ),
        None => (quote!(), quote!(#ident), quote!(()), quote!()),
    };

    let queryable = if has_query {
        let capabilities = op
            .query
            .iter()
            .filter_map(|q| capability(q))
            .map(|capability| quote!(impl #impl_generics #capability for #self_type {}));
        quote! {
            impl #impl_generics Queryable for #self_type {
                type Properties = #selection;
                fn query_options(&mut self) -> &mut QueryOptions<Self::Properties> {
                    &mut self.query
                }
            }

            #(#capabilities)*
        }
    } else {
        quote!()
    };

    let delta = match &op.success {
        Success::Delta(_) => delta_operation(&response, &accept),
        _ => quote!(),
    };

    quote! {
        #doc
        #definition

        impl #impl_generics Operation for #self_type {
            const METHOD: Method = Method::#method;
            type Body = #body_type;
            type Response<'response> = #response;

            fn build(&self) -> Result<RequestInformation, Error> {
                let mut request = RequestInformation::new(Self::METHOD, URL_TEMPLATE, self.path_parameters.clone());
                request.headers = self.headers.clone();
                set_default_accept(&mut request.headers, #accept);
                #apply_query
                #set_body
                Ok(request)
            }

            fn headers_mut(&mut self) -> &mut HeaderMap {
                &mut self.headers
            }
        }

        #queryable

        #delta
    }
}

/// Follow-up rounds of a delta query, which go to links handed out by the
/// service rather than to the path's template.
fn delta_operation(response: &TokenStream, accept: &TokenStream) -> TokenStream {
    quote! {
        ///Retrieve delta changes using a next or delta link from a previous
        /// delta response. The caller must ensure only links from this
        /// path are used.
        #[derive(Debug)]
        pub struct GetDelta {
            link: String,
            headers: HeaderMap,
        }

        impl TryFrom<&str> for GetDelta {
            type Error = Error;
            fn try_from(link: &str) -> Result<Self, Self::Error> {
                let uri = link.parse::<http::Uri>()?;
                if uri.scheme().is_none() || uri.host().is_none() {
                    return Err(Error::RelativeLink(link.to_string()));
                }
                Ok(Self {
                    link: link.to_string(),
                    headers: HeaderMap::new(),
                })
            }
        }

        impl Operation for GetDelta {
            const METHOD: Method = Method::GET;
            type Body = ();
            type Response<'response> = #response;

            fn build(&self) -> Result<RequestInformation, Error> {
                let mut request = RequestInformation::from_raw_url(Self::METHOD, self.link.as_str());
                request.headers = self.headers.clone();
                set_default_accept(&mut request.headers, #accept);
                Ok(request)
            }

            fn headers_mut(&mut self) -> &mut HeaderMap {
                &mut self.headers
            }
        }
    }
}

fn request_builder(path: &Path, children: Vec<TokenStream>) -> TokenStream {
    let doc = format!(
        "Builds and executes requests for operations under `{}`.",
        path.name
    );

    let request_fns = path.operations.iter().map(|op| {
        let ident = op_ident(op.method);
        let request_fn = format_ident!("{}_request", snakeify(&op.method.to_string()));
        match body_ident(op) {
            Some(body) => quote! {
                pub fn #request_fn<'body>(&self, body: #body<'body>) -> #ident<'body> {
                    #ident::new(self.base.path_parameters.clone(), body)
                }
            },
            None => quote! {
                pub fn #request_fn(&self) -> #ident {
                    #ident::new(self.base.path_parameters.clone())
                }
            },
        }
    });

    let send_fns = path.operations.iter().map(send_fns);

    quote! {
        #[doc = #doc]
        #[derive(Debug)]
        pub struct RequestBuilder<A> {
            base: BaseRequestBuilder<A>,
        }

        impl<A> RequestBuilder<A> {
            pub fn new(base: BaseRequestBuilder<A>) -> Self {
                Self { base }
            }

            pub fn base(&self) -> &BaseRequestBuilder<A> {
                &self.base
            }

            ///A builder whose requests go to `raw_url` as is, e.g. a link returned by the service.
            pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
                Self::new(self.base.with_url(raw_url))
            }

            #(#children)*

            #(#request_fns)*
        }

        impl<A: RequestAdapter> RequestBuilder<A> {
            #(#send_fns)*
        }
    }
}

/// The async methods sending an operation through the adapter.
fn send_fns(op: &Operation) -> TokenStream {
    let ident = op_ident(op.method);
    let method = format_ident!("{}", snakeify(&op.method.to_string()));
    let request_fn = format_ident!("{method}_request");
    let doc = op.summary.as_ref().map(|s| quote!(#[doc = #s]));
    let response = response_type(&op.success, quote!('static));
    let (send, returned) = match &op.success {
        Success::NoContent => (quote!(send_no_content), response.clone()),
        Success::Primitive(_) => (quote!(send_primitive), response.clone()),
        // Writes may succeed with an empty body.
        Success::Entity(_) if op.method != Method::Get => {
            (quote!(send_optional), quote!(Option<#response>))
        }
        _ => (quote!(send), response.clone()),
    };

    let (body_param, configured, make_operation) = match body_ident(op) {
        Some(body) => (
            quote!(body: #body<'_>,),
            quote!(#ident<'_>),
            quote!(self.#request_fn(body)),
        ),
        None => (quote!(), quote!(#ident), quote!(self.#request_fn())),
    };

    let all_pages = match &op.success {
        Success::Paginated { collection, .. } => {
            let collection = format_ident!("{}", collection.as_pascal_case());
            quote! {
                ///Like `get`, then follows next links until every page has been fetched.
                pub async fn get_all_pages(&self, configure: impl FnOnce(&mut #configured)) -> Result<Vec<#collection<'static>>, Error> {
                    let mut operation = #make_operation;
                    configure(&mut operation);
                    self.base.adapter.send_all_pages(&operation).await
                }
            }
        }
        _ => quote!(),
    };

    let delta = match &op.success {
        Success::Delta(_) => quote! {
            ///Resume a delta query from a link returned by a previous round.
            pub async fn get_delta(&self, link: &str, configure: impl FnOnce(&mut GetDelta)) -> Result<#response, Error> {
                let mut operation = GetDelta::try_from(link)?;
                configure(&mut operation);
                self.base.adapter.send(&operation).await
            }
        },
        _ => quote!(),
    };

    quote! {
        #doc
        pub async fn #method(&self, #body_param configure: impl FnOnce(&mut #configured)) -> Result<#returned, Error> {
            let mut operation = #make_operation;
            configure(&mut operation);
            self.base.adapter.#send(&operation).await
        }

        #all_pages

        #delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oxidize::RustType;

    fn get(query: &[&str], success: Success) -> Operation {
        Operation {
            method: Method::Get,
            summary: Some("List users".to_string()),
            description: None,
            external_docs: None,
            query: query.iter().map(|q| q.to_string()).collect(),
            body: None,
            success,
        }
    }

    fn path(name: &str, operations: Vec<Operation>) -> Path {
        Path {
            name: name.to_string(),
            description: None,
            operations,
        }
    }

    #[test]
    fn url_templates() {
        let user = CustomRustType::from_base_name("user");
        let module = PathModule::new(
            path(
                "/users/{user-id}",
                vec![get(&["$select", "$expand"], Success::Entity(user))],
            ),
            vec![],
        );
        assert_eq!(
            module.url_template(),
            "{+baseurl}/users/{user%2Did}{?%24expand,%24select}"
        );

        let module = PathModule::new(path("/me/sendMail", vec![]), vec![]);
        assert_eq!(module.url_template(), "{+baseurl}/me/sendMail");
    }

    #[test]
    fn count_is_text_without_selection() {
        let module = PathModule::new(
            path(
                "/users/$count",
                vec![get(&["$filter", "$search"], Success::Primitive(RustType::I32))],
            ),
            vec![],
        );
        let tokens = quote!(#module).to_string();
        assert!(tokens.contains(&quote!(use std::convert::Infallible;).to_string()));
        assert!(tokens.contains(&quote!(type Response<'response> = i32;).to_string()));
        assert!(tokens.contains(&quote!(set_default_accept(&mut request.headers, TEXT_CONTENT_TYPE);).to_string()));
        assert!(tokens.contains(&quote!(impl Filter for Get {}).to_string()));
        assert!(!tokens.contains(&quote!(impl Select for Get {}).to_string()));
        assert!(tokens.contains(&quote!(self.base.adapter.send_primitive(&operation).await).to_string()));
    }

    #[test]
    fn collection_navigation() {
        let collection = CustomRustType::from_base_name("userCollectionResponse");
        let item = CustomRustType::from_base_name("user");
        let module = PathModule::new(
            path(
                "/users",
                vec![get(&["$top"], Success::Paginated { collection, item })],
            ),
            vec![
                Navigation::Named {
                    segment: "$count".to_string(),
                    path: "/users/$count".to_string(),
                },
                Navigation::Item {
                    parameter: "user-id".to_string(),
                    path: "/users/{user-id}".to_string(),
                },
            ],
        );
        let tokens = quote!(#module).to_string();
        assert!(tokens.contains(&quote!(use crate::types::user::*;).to_string()));
        assert!(tokens.contains(&quote!(use crate::types::user_collection_response::*;).to_string()));
        assert!(tokens.contains(
            &quote!(pub fn count(&self) -> super::users_count::RequestBuilder<A>).to_string()
        ));
        assert!(tokens.contains(
            &quote!(super::users_user_id::RequestBuilder::new(self.base.child("user%2Did", user_id)))
                .to_string()
        ));
        assert!(tokens.contains("get_all_pages"));
        assert!(!tokens.contains("GetDelta"));
    }

    #[test]
    fn delta_rounds() {
        let item = CustomRustType::from_base_name("mailFolder");
        let module = PathModule::new(
            path("/me/mailFolders/delta()", vec![get(&[], Success::Delta(item))]),
            vec![],
        );
        let tokens = quote!(#module).to_string();
        assert!(tokens.contains(&quote!(pub struct GetDelta).to_string()));
        let folder = quote!(MailFolder<'response>);
        assert!(tokens.contains(
            &quote!(type Response<'response> = DeltaResponse<Vec<#folder>>;).to_string()
        ));
        assert!(tokens.contains(
            &quote!(if uri.scheme().is_none() || uri.host().is_none()).to_string()
        ));
        assert!(tokens.contains(&quote!(let mut operation = GetDelta::try_from(link)?;).to_string()));
        assert!(!tokens.contains("Queryable"));
    }

    #[test]
    fn writes_may_return_nothing() {
        let user = CustomRustType::from_base_name("user");
        let patch = Operation {
            method: Method::Patch,
            summary: Some("Update user".to_string()),
            body: Some(user.clone()),
            ..get(&[], Success::Entity(user.clone()))
        };
        let module = PathModule::new(
            path(
                "/users/{user-id}",
                vec![get(&["$select"], Success::Entity(user)), patch],
            ),
            vec![],
        );
        let tokens = quote!(#module).to_string();
        assert!(tokens.contains(&quote!(-> Result<User<'static>, Error>).to_string()));
        let returned = quote!(User<'static>);
        assert!(tokens.contains(&quote!(-> Result<Option<#returned>, Error>).to_string()));
        assert!(tokens.contains(&quote!(self.base.adapter.send_optional(&operation).await).to_string()));
    }
}
