//  Copyright (c) 2026 Metaform Systems, Inc
//
//  This program and the accompanying materials are made available under the
//  terms of the Apache License, Version 2.0 which is available at
//  https://www.apache.org/licenses/LICENSE-2.0
//
//  SPDX-License-Identifier: Apache-2.0
//
//  Contributors:
//       Metaform Systems, Inc. - initial API and implementation
//

use crate::error::RetrievalError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;

/// Key under which the KV v2 engine nests the secret fields.
pub const VERSIONED_DATA_KEY: &str = "data";

/// A read response before unwrapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SecretEnvelope {
    data: Option<Map<String, Value>>,
    warnings: Vec<String>,
}

impl SecretEnvelope {
    pub fn new(data: Option<Map<String, Value>>, warnings: Vec<String>) -> Self {
        Self { data, warnings }
    }

    /// Envelope whose outer mapping is `data`, without warnings.
    pub fn with_data(data: Map<String, Value>) -> Self {
        Self::new(Some(data), Vec::new())
    }

    /// Envelope of a KV v2 read: `fields` nested under the `data` key.
    pub fn versioned(fields: Map<String, Value>) -> Self {
        let mut outer = Map::new();
        outer.insert(VERSIONED_DATA_KEY.to_string(), Value::Object(fields));
        Self::with_data(outer)
    }

    pub fn data(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Unwraps the `data.data` object.
    ///
    /// Fails with [`RetrievalError::NoData`] when the outer mapping is absent, lacks the `data` key or
    /// holds anything other than an object under it. The inner fields are not inspected.
    pub fn into_normalized(self) -> Result<NormalizedSecret, RetrievalError> {
        match self.data.and_then(|mut outer| outer.remove(VERSIONED_DATA_KEY)) {
            Some(Value::Object(fields)) => Ok(NormalizedSecret(fields)),
            _ => Err(RetrievalError::NoData),
        }
    }
}

/// The flat field mapping of a versioned secret.
///
/// `Debug` prints field names only.
#[derive(Clone, Default, PartialEq)]
pub struct NormalizedSecret(Map<String, Value>);

impl NormalizedSecret {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Returns the field if it is a string.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    /// Deserializes the fields into `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, RetrievalError> {
        serde_json::from_value(Value::Object(self.0.clone())).map_err(|e| RetrievalError::Decode(e.to_string()))
    }
}

impl From<Map<String, Value>> for NormalizedSecret {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl From<NormalizedSecret> for Map<String, Value> {
    fn from(secret: NormalizedSecret) -> Self {
        secret.0
    }
}

impl PartialEq<Map<String, Value>> for NormalizedSecret {
    fn eq(&self, other: &Map<String, Value>) -> bool {
        &self.0 == other
    }
}

impl IntoIterator for NormalizedSecret {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Debug for NormalizedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizedSecret")
            .field("fields", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}
