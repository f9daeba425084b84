/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! OData system query options.
//!
//! Operations only implement the traits for the options their endpoint
//! accepts, so e.g. `$top` cannot be set on a single-item `GET`. See the
//! [Microsoft documentation](https://learn.microsoft.com/en-us/graph/query-parameters)
//! for the semantics of each option; they are passed to the service as is.

use std::fmt::Display;

use crate::request::RequestInformation;
use crate::{Operation, Selection};

pub const COUNT: &str = "$count";
pub const EXPAND: &str = "$expand";
pub const FILTER: &str = "$filter";
pub const ORDER_BY: &str = "$orderby";
pub const SEARCH: &str = "$search";
pub const SELECT: &str = "$select";
pub const SKIP: &str = "$skip";
pub const TOP: &str = "$top";

/// The name of the URL template variable carrying the given option, e.g.
/// `%24select` for `$select`.
pub fn template_name(option: &str) -> String {
    option.replace('$', "%24")
}

/// The query options set on an operation. Unset options are left out of the
/// request.
#[derive(Clone, Debug)]
pub struct QueryOptions<P: Clone> {
    pub(crate) count: Option<bool>,
    pub(crate) expand: Vec<String>,
    pub(crate) filter: Option<String>,
    pub(crate) order_by: Vec<String>,
    pub(crate) search: Option<String>,
    pub(crate) selection: Selection<P>,
    pub(crate) skip: Option<u32>,
    pub(crate) top: Option<u32>,
}

impl<P: Clone> Default for QueryOptions<P> {
    fn default() -> Self {
        Self {
            count: None,
            expand: Vec::new(),
            filter: None,
            order_by: Vec::new(),
            search: None,
            selection: Selection::default(),
            skip: None,
            top: None,
        }
    }
}

impl<P: Display + Clone> QueryOptions<P> {
    /// Bind every option that was set to its template variable.
    pub fn apply(&self, request: &mut RequestInformation) {
        if let Some(count) = self.count {
            request.add_query_parameter(&template_name(COUNT), count.to_string());
        }
        if !self.expand.is_empty() {
            request.add_query_parameter(&template_name(EXPAND), self.expand.clone());
        }
        if let Some(filter) = &self.filter {
            request.add_query_parameter(&template_name(FILTER), filter.as_str());
        }
        if !self.order_by.is_empty() {
            request.add_query_parameter(&template_name(ORDER_BY), self.order_by.clone());
        }
        if let Some(search) = &self.search {
            request.add_query_parameter(&template_name(SEARCH), search.as_str());
        }
        let (select, selection) = self.selection.pair();
        if !selection.is_empty() {
            request.add_query_parameter(&template_name(select), selection);
        }
        if let Some(skip) = self.skip {
            request.add_query_parameter(&template_name(SKIP), skip.to_string());
        }
        if let Some(top) = self.top {
            request.add_query_parameter(&template_name(TOP), top.to_string());
        }
    }
}

/// An operation accepting OData query options. The options themselves are
/// set through the capability traits in this module.
pub trait Queryable: Operation {
    /// Type (typically an enum) representing the properties valid for
    /// `$select` on this operation.
    type Properties: Display + Clone;

    #[doc(hidden)]
    fn query_options(&mut self) -> &mut QueryOptions<Self::Properties>;
}

/// Indicates the `Operation` accepts
/// [`$select`](https://learn.microsoft.com/en-us/graph/query-parameters?tabs=http#select).
pub trait Select: Queryable {
    /// Set the selected properties.
    fn select<I: IntoIterator<Item = Self::Properties>>(&mut self, properties: I) {
        self.query_options().selection.select(properties)
    }

    /// Add aditional selected properties.
    fn extend<I: IntoIterator<Item = Self::Properties>>(&mut self, properties: I) {
        self.query_options().selection.extend(properties)
    }
}

/// `$expand`: relationships to include inline in the response.
pub trait Expand: Queryable {
    fn expand<I, S>(&mut self, relationships: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query_options().expand = relationships.into_iter().map(Into::into).collect();
    }
}

/// `$filter`: an OData boolean expression restricting the results.
pub trait Filter: Queryable {
    fn filter(&mut self, expression: impl Into<String>) {
        self.query_options().filter = Some(expression.into());
    }
}

/// `$orderby`: sort clauses, e.g. `displayName desc`.
pub trait OrderBy: Queryable {
    fn order_by<I, S>(&mut self, clauses: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query_options().order_by = clauses.into_iter().map(Into::into).collect();
    }
}

/// `$search`. Directory objects additionally require the
/// `ConsistencyLevel: eventual` header.
pub trait Search: Queryable {
    fn search(&mut self, expression: impl Into<String>) {
        self.query_options().search = Some(expression.into());
    }
}

/// `$top`: page size.
pub trait Top: Queryable {
    fn top(&mut self, count: u32) {
        self.query_options().top = Some(count);
    }
}

/// `$skip`: number of items to skip.
pub trait Skip: Queryable {
    fn skip(&mut self, count: u32) {
        self.query_options().skip = Some(count);
    }
}

/// `$count`: include the total number of items as `@odata.count`.
pub trait Count: Queryable {
    fn count(&mut self, include: bool) {
        self.query_options().count = Some(include);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::PathParameters;
    use http::Method;
    use strum::Display;

    #[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
    enum Property {
        #[strum(serialize = "id")]
        Id,
        #[strum(serialize = "displayName")]
        DisplayName,
    }

    const TEMPLATE: &str = "{+baseurl}/users{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}";

    fn expanded(options: &QueryOptions<Property>) -> String {
        let mut request = RequestInformation::new(Method::GET, TEMPLATE, PathParameters::new());
        options.apply(&mut request);
        request.uri().unwrap().to_string()
    }

    #[test]
    fn unset_options_are_omitted() {
        assert_eq!(expanded(&QueryOptions::default()), "/users");
    }

    #[test]
    fn options_use_odata_names() {
        let mut options = QueryOptions::default();
        options.count = Some(true);
        options.expand = vec!["manager".to_string()];
        options.filter = Some("accountEnabled eq true".to_string());
        options.order_by = vec!["displayName desc".to_string()];
        options.search = Some("\"displayName:Adele\"".to_string());
        options.selection.select([Property::Id, Property::DisplayName]);
        options.skip = Some(20);
        options.top = Some(10);

        assert_eq!(
            expanded(&options),
            "/users?%24count=true&%24expand=manager&%24filter=accountEnabled%20eq%20true\
             &%24orderby=displayName%20desc&%24search=%22displayName%3AAdele%22\
             &%24select=id,displayName&%24skip=20&%24top=10"
        );
    }

    #[test]
    fn template_names() {
        for (option, name) in [
            (COUNT, "%24count"),
            (EXPAND, "%24expand"),
            (FILTER, "%24filter"),
            (ORDER_BY, "%24orderby"),
            (SEARCH, "%24search"),
            (SELECT, "%24select"),
            (SKIP, "%24skip"),
            (TOP, "%24top"),
        ] {
            assert_eq!(template_name(option), name);
        }
    }
}
