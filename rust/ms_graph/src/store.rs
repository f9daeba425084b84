/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! The property bag behind every model in [`crate::types`].
//!
//! Models keep the JSON object they were deserialized from (or built up by
//! their setters) and read from it on demand, so properties the model does
//! not declare survive a round trip untouched.

use std::borrow::Cow;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::Error;

/// Key of the discriminator naming the concrete type of an object.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

pub trait Model {
    /// The `@odata.type` value of this type, e.g. `#microsoft.graph.user`.
    /// Types that are never sent with a discriminator have none.
    const ODATA_TYPE: Option<&'static str>;

    /// Names of the declared properties, including inherited ones.
    const PROPERTIES: &'static [&'static str];

    fn properties(&self) -> &Map<String, Value>;

    fn odata_type(&self) -> Option<&str> {
        self.properties().get(ODATA_TYPE_KEY).and_then(Value::as_str)
    }

    /// Every property this type does not declare, e.g. `@odata.context` or
    /// properties added to the service after generation.
    fn additional_data(&self) -> Map<String, Value> {
        self.properties()
            .iter()
            .filter(|(key, _)| key.as_str() != ODATA_TYPE_KEY && !Self::PROPERTIES.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

fn unexpected(val: &Value) -> Error {
    Error::UnexpectedResponse(format!("{:?}", val))
}

/// Read a property that must be present and non-null.
pub fn required<'v, T>(
    properties: &'v Map<String, Value>,
    key: &str,
    cast: impl FnOnce(&'v Value) -> Option<T>,
) -> Result<T, Error> {
    let val = properties.get(key).ok_or(Error::NotFound)?;
    cast(val).ok_or_else(|| unexpected(val))
}

/// Read a property that must be present but may be `null`.
pub fn nullable<'v, T>(
    properties: &'v Map<String, Value>,
    key: &str,
    cast: impl FnOnce(&'v Value) -> Option<T>,
) -> Result<Option<T>, Error> {
    let val = properties.get(key).ok_or(Error::NotFound)?;
    if val.is_null() {
        return Ok(None);
    }
    cast(val).map(Some).ok_or_else(|| unexpected(val))
}

/// Read an array property, casting every item.
pub fn collection<'v, T>(
    properties: &'v Map<String, Value>,
    key: &str,
    cast: impl Fn(&'v Value) -> Option<T>,
) -> Result<Vec<T>, Error> {
    let val = properties.get(key).ok_or(Error::NotFound)?;
    items(val, cast)
}

pub fn nullable_collection<'v, T>(
    properties: &'v Map<String, Value>,
    key: &str,
    cast: impl Fn(&'v Value) -> Option<T>,
) -> Result<Option<Vec<T>>, Error> {
    let val = properties.get(key).ok_or(Error::NotFound)?;
    if val.is_null() {
        return Ok(None);
    }
    items(val, cast).map(Some)
}

fn items<'v, T>(val: &'v Value, cast: impl Fn(&'v Value) -> Option<T>) -> Result<Vec<T>, Error> {
    val.as_array()
        .ok_or_else(|| unexpected(val))?
        .iter()
        .map(|item| cast(item).ok_or_else(|| unexpected(item)))
        .collect()
}

/// Write a property, copying the bag first if it is borrowed.
pub fn set(properties: &mut Cow<'_, Map<String, Value>>, key: &str, value: impl Into<Value>) {
    properties.to_mut().insert(key.to_string(), value.into());
}

pub fn as_i32(val: &Value) -> Option<i32> {
    val.as_i64()?.try_into().ok()
}

/// Cast for string-valued enums.
pub fn parse<T: FromStr>(val: &Value) -> Option<T> {
    val.as_str()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag() -> Map<String, Value> {
        match json!({
            "displayName": "Archive",
            "parentFolderId": null,
            "childFolderCount": 3,
            "tooBig": 4_000_000_000u64,
            "importance": "high",
            "businessPhones": ["+1 425 555 0109"],
            "proxyAddresses": null,
            "mixed": ["a", 1],
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn reads() {
        let bag = bag();
        assert_eq!(required(&bag, "displayName", Value::as_str).unwrap(), "Archive");
        assert_eq!(nullable(&bag, "parentFolderId", Value::as_str).unwrap(), None);
        assert_eq!(nullable(&bag, "childFolderCount", as_i32).unwrap(), Some(3));
        assert_eq!(
            collection(&bag, "businessPhones", Value::as_str).unwrap(),
            vec!["+1 425 555 0109"]
        );
        assert_eq!(
            nullable_collection(&bag, "proxyAddresses", Value::as_str).unwrap(),
            None
        );
        assert_eq!(
            required(&bag, "importance", parse::<crate::types::importance::Importance>).unwrap(),
            crate::types::importance::Importance::High
        );
    }

    #[test]
    fn missing_and_mistyped() {
        let bag = bag();
        assert!(matches!(
            required(&bag, "surname", Value::as_str),
            Err(Error::NotFound)
        ));
        assert!(matches!(
            required(&bag, "childFolderCount", Value::as_str),
            Err(Error::UnexpectedResponse(_))
        ));
        assert!(matches!(
            required(&bag, "tooBig", as_i32),
            Err(Error::UnexpectedResponse(_))
        ));
        assert!(matches!(
            required(&bag, "parentFolderId", Value::as_str),
            Err(Error::UnexpectedResponse(_))
        ));
        assert!(matches!(
            collection(&bag, "mixed", Value::as_str),
            Err(Error::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn set_copies_borrowed_bag() {
        let original = bag();
        let mut properties = Cow::Borrowed(&original);
        set(&mut properties, "displayName", "Old mail");
        set(&mut properties, "parentFolderId", Some("AQMkADYAAAIBCAAAAA=="));
        set(&mut properties, "childFolderCount", None::<i32>);

        assert_eq!(original["displayName"], "Archive");
        assert_eq!(properties["displayName"], "Old mail");
        assert_eq!(properties["parentFolderId"], "AQMkADYAAAIBCAAAAA==");
        assert_eq!(properties["childFolderCount"], Value::Null);
    }
}
