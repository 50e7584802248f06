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

//! HashiCorp Vault client: connects to a server, authenticates with a static token, AppRole or a
//! Kubernetes service account, and retrieves KV v2 secrets as flat field mappings.

pub mod auth;
mod client;
pub mod config;
pub mod transport;

#[cfg(test)]
mod tests;

pub use auth::{AppRoleLogin, AuthInfo, KubernetesLogin, VaultLogin};
pub use client::VaultClient;
pub use config::{VaultConfig, VaultConfigBuilder};
pub use transport::{HealthStatus, VaultTransport};
