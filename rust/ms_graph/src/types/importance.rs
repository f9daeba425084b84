/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

// EDITS TO THIS FILE WILL BE OVERWRITTEN

#![doc = "Types related to Importance. Auto-generated from [Microsoft OpenAPI metadata](https://github.com/microsoftgraph/msgraph-metadata/blob/master/openapi/v1.0/openapi.yaml) via `ms_graph_extract openapi.yaml ms_graph/`."]
use serde_json::Value;
use strum::{Display, EnumString};
#[derive(Copy, Clone, Debug, Display, EnumString, PartialEq, Eq)]
pub enum Importance {
    #[strum(serialize = "low")]
    Low,
    #[strum(serialize = "normal")]
    Normal,
    #[strum(serialize = "high")]
    High,
}
impl From<Importance> for Value {
    fn from(val: Importance) -> Self {
        Value::String(val.to_string())
    }
}
