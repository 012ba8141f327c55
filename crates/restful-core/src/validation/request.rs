//! Request context accessor
//!
//! A request, as far as validation is concerned, is three independent maps
//! from field name to raw JSON value: the parsed body, the query string and
//! the route parameters. Missing keys and explicit `null` both read as "no
//! value".
//!
//! Copyright (c) 2025 Restful Team
//! Licensed under the Apache-2.0 license

use super::types::FieldLocation;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The body, query and path parameters of one inbound request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub body: Map<String, Value>,
    #[serde(default)]
    pub query: Map<String, Value>,
    #[serde(default, rename = "params", alias = "path")]
    pub path: Map<String, Value>,
}

impl RequestContext {
    /// Create an empty request context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context from a parsed body; non-object bodies carry no fields
    pub fn from_body(body: Value) -> Self {
        let body = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            body,
            ..Self::default()
        }
    }

    pub fn with_body(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body.insert(key.into(), value.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_path(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.path.insert(key.into(), value.into());
        self
    }

    /// Merge a raw `a=1&b=two` query string into the query map
    ///
    /// Values are URL-form decoded and kept as strings. A repeated key keeps
    /// its last value.
    pub fn with_query_string(mut self, query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            self.query
                .insert(key.into_owned(), Value::String(value.into_owned()));
        }
        self
    }

    /// The map backing a location
    pub fn location(&self, location: FieldLocation) -> &Map<String, Value> {
        match location {
            FieldLocation::Body => &self.body,
            FieldLocation::Query => &self.query,
            FieldLocation::Path => &self.path,
        }
    }

    /// Value of `field` at `location`, if present and not null
    pub fn get(&self, location: FieldLocation, field: &str) -> Option<&Value> {
        self.location(location)
            .get(field)
            .filter(|value| !value.is_null())
    }

    /// First location holding `field`, searching body, then query, then path
    pub fn locate(&self, field: &str) -> Option<(FieldLocation, &Value)> {
        FieldLocation::LOOKUP_ORDER
            .iter()
            .find_map(|&location| self.get(location, field).map(|value| (location, value)))
    }
}
