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

//! Transport-independent building blocks for Vault secret clients: the error taxonomy, the
//! response envelope and its normalization, the read capability and the authentication-gated
//! session that ties them together.

pub mod auth;
pub mod diagnostics;
pub mod error;
pub mod reader;
pub mod secret;
pub mod session;

#[cfg(test)]
mod tests;

pub use auth::{APPROLE_DEFAULT_MOUNT_PATH, AuthMethod, K8S_DEFAULT_MOUNT_PATH, K8S_DEFAULT_SERVICE_ACCOUNT_PATH, VaultToken};
pub use diagnostics::{DiagnosticSink, DiscardSink, LogSink, MemorySink, discard_sink};
pub use error::{AuthError, ConnectionError, RetrievalError, TransportError};
pub use reader::{MemorySecretReader, SecretReader};
pub use secret::{NormalizedSecret, SecretEnvelope};
pub use session::{SecretSession, SessionState};
