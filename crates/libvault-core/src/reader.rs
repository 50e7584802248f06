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

#![allow(clippy::unwrap_used)]

use crate::error::TransportError;
use crate::secret::SecretEnvelope;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Read access to the secrets engine.
///
/// `Ok(None)` means the request succeeded but Vault returned nothing for `path`.
#[async_trait]
pub trait SecretReader: Send + Sync {
    async fn read(&self, path: &str) -> Result<Option<SecretEnvelope>, TransportError>;
}

/// In-memory reader for testing.
#[derive(Default)]
pub struct MemorySecretReader {
    envelopes: RwLock<HashMap<String, SecretEnvelope>>,
    reads: AtomicUsize,
}

impl MemorySecretReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the envelope returned for `path`.
    pub fn put(&self, path: impl Into<String>, envelope: SecretEnvelope) {
        self.envelopes.write().unwrap().insert(path.into(), envelope);
    }

    /// Stores `fields` the way the KV v2 engine returns them.
    pub fn put_versioned(&self, path: impl Into<String>, fields: Map<String, Value>) {
        self.put(path, SecretEnvelope::versioned(fields));
    }

    pub fn remove(&self, path: &str) {
        self.envelopes.write().unwrap().remove(path);
    }

    /// Number of reads served so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SecretReader for MemorySecretReader {
    async fn read(&self, path: &str) -> Result<Option<SecretEnvelope>, TransportError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.envelopes.read().unwrap().get(path).cloned())
    }
}
