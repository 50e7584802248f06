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

use bon::Builder;
use libvault_core::diagnostics::{DiagnosticSink, discard_sink};
use std::sync::Arc;
use std::time::Duration;

pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for a Vault session.
#[derive(Builder, Clone)]
pub struct VaultConfig {
    /// The Vault server URL (e.g., "https://vault.example.com:8200")
    #[builder(into)]
    pub address: String,
    /// Namespace applied to every request (Vault Enterprise)
    #[builder(into)]
    pub namespace: Option<String>,
    /// Receiver of diagnostic messages (defaults to discarding them)
    #[builder(default = discard_sink())]
    pub sink: Arc<dyn DiagnosticSink>,
    /// HTTP request timeout for Vault operations (defaults to 10 seconds)
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
}

impl std::fmt::Debug for VaultConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultConfig")
            .field("address", &self.address)
            .field("namespace", &self.namespace)
            .field("sink", &"<sink>")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
