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

use crate::diagnostics::DiagnosticSink;
use crate::error::RetrievalError;
use crate::reader::SecretReader;
use crate::secret::NormalizedSecret;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Authentication state of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// Gates secret reads behind a successful authentication.
///
/// The session owns its reader and is not synchronized: authentication takes `&mut self`, so sharing a
/// session across tasks requires external locking.
pub struct SecretSession<R> {
    reader: R,
    state: SessionState,
    sink: Arc<dyn DiagnosticSink>,
}

impl<R: SecretReader> SecretSession<R> {
    /// Creates an unauthenticated session over `reader`.
    pub fn new(reader: R, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            reader,
            state: SessionState::Unauthenticated,
            sink,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    /// Records a successful authentication. Calling it again keeps the session authenticated.
    pub fn mark_authenticated(&mut self) {
        self.state = SessionState::Authenticated;
        self.sink.debug("authenticated");
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn reader_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    pub fn sink(&self) -> &Arc<dyn DiagnosticSink> {
        &self.sink
    }

    /// Reads `path` and unwraps the versioned payload.
    ///
    /// The authentication check happens before any request is issued. Warnings attached to the
    /// response are forwarded to the sink and never fail the call.
    pub async fn retrieve(&self, path: &str) -> Result<NormalizedSecret, RetrievalError> {
        if !self.is_authenticated() {
            return Err(RetrievalError::NotAuthenticated);
        }

        let envelope = self
            .reader
            .read(path)
            .await
            .map_err(RetrievalError::TransportFailure)?
            .ok_or(RetrievalError::NoResponse)?;

        for warning in envelope.warnings() {
            self.sink.warn(warning);
        }

        envelope.into_normalized()
    }

    /// Like [`retrieve`](Self::retrieve), deserializing the fields into `T`.
    pub async fn retrieve_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, RetrievalError> {
        self.retrieve(path).await?.deserialize()
    }
}
