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

use super::transport::VaultTransport;
use async_trait::async_trait;
use bon::Builder;
use libvault_core::auth::{
    APPROLE_DEFAULT_MOUNT_PATH, K8S_DEFAULT_MOUNT_PATH, K8S_DEFAULT_SERVICE_ACCOUNT_PATH, VaultToken, non_empty_or,
};
use libvault_core::error::{AuthError, TransportError};
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;
use tokio::fs;

/// Trait for abstracting Vault login backends that exchange credentials for a client token.
#[async_trait]
pub trait VaultLogin: Send + Sync {
    /// Short name of the backend, safe to log.
    fn method(&self) -> &'static str;

    /// Performs the login exchange.
    ///
    /// # Returns
    /// - `Ok(auth)` - The issued token and its lease information
    /// - `Err(AuthError::InvalidLogin)` - The login inputs were rejected before contacting Vault
    /// - `Err(AuthError::ExchangeFailed)` - The exchange failed at the transport or protocol level
    /// - `Err(AuthError::EmptyAuthInfo)` - Vault answered without a client token
    async fn login(&self, transport: &VaultTransport) -> Result<AuthInfo, AuthError>;
}

/// The `auth` object of a successful login.
#[derive(Clone, Deserialize)]
pub struct AuthInfo {
    #[serde(default)]
    client_token: String,
    #[serde(default)]
    pub accessor: String,
    #[serde(default)]
    pub policies: Option<Vec<String>>,
    #[serde(default)]
    pub lease_duration: u64,
    #[serde(default)]
    pub renewable: bool,
}

impl AuthInfo {
    pub fn client_token(&self) -> VaultToken {
        VaultToken::new(self.client_token.clone())
    }
}

impl std::fmt::Debug for AuthInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthInfo")
            .field("client_token", &"***")
            .field("accessor", &self.accessor)
            .field("policies", &self.policies)
            .field("lease_duration", &self.lease_duration)
            .field("renewable", &self.renewable)
            .finish()
    }
}

/// Login with the AppRole backend using a role id and secret id.
/// @see https://developer.hashicorp.com/vault/api-docs/auth/approle
#[derive(Builder, Clone, PartialEq)]
pub struct AppRoleLogin {
    #[builder(into)]
    role_id: String,
    #[builder(into)]
    secret_id: String,
    #[builder(into, default = APPROLE_DEFAULT_MOUNT_PATH)]
    mount_path: String,
}

impl AppRoleLogin {
    pub fn mount_path(&self) -> &str {
        &self.mount_path
    }
}

#[async_trait]
impl VaultLogin for AppRoleLogin {
    fn method(&self) -> &'static str {
        "approle"
    }

    async fn login(&self, transport: &VaultTransport) -> Result<AuthInfo, AuthError> {
        if self.role_id.is_empty() {
            return Err(AuthError::InvalidLogin("no role ID provided for login".to_string()));
        }
        if self.secret_id.is_empty() {
            return Err(AuthError::InvalidLogin("no secret ID provided for login".to_string()));
        }

        let body = json!({
            "role_id": self.role_id,
            "secret_id": self.secret_id,
        });

        exchange(transport, &self.mount_path, &body).await
    }
}

impl std::fmt::Debug for AppRoleLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppRoleLogin")
            .field("role_id", &self.role_id)
            .field("secret_id", &"***")
            .field("mount_path", &self.mount_path)
            .finish()
    }
}

/// Login with the Kubernetes backend using the pod's service account token.
/// @see https://developer.hashicorp.com/vault/api-docs/auth/kubernetes
///
/// The token file is read on every login, so rotated tokens are picked up.
#[derive(Builder, Clone, Debug, PartialEq)]
pub struct KubernetesLogin {
    #[builder(into)]
    role: String,
    #[builder(into, default = K8S_DEFAULT_SERVICE_ACCOUNT_PATH)]
    service_account_token_path: PathBuf,
    #[builder(into, default = K8S_DEFAULT_MOUNT_PATH)]
    mount_path: String,
}

impl KubernetesLogin {
    /// Creates a login where an empty token path or mount path means the default one.
    pub fn from_parts(role: &str, service_account_token_path: &str, mount_path: &str) -> Self {
        Self {
            role: role.to_string(),
            service_account_token_path: PathBuf::from(non_empty_or(
                service_account_token_path,
                K8S_DEFAULT_SERVICE_ACCOUNT_PATH,
            )),
            mount_path: non_empty_or(mount_path, K8S_DEFAULT_MOUNT_PATH).to_string(),
        }
    }

    pub fn service_account_token_path(&self) -> &PathBuf {
        &self.service_account_token_path
    }

    pub fn mount_path(&self) -> &str {
        &self.mount_path
    }

    async fn read_service_account_token(&self) -> Result<String, TransportError> {
        let jwt = fs::read_to_string(&self.service_account_token_path).await.map_err(|e| {
            TransportError::TokenFile(format!(
                "Unable to read service account token file {}: {}",
                self.service_account_token_path.display(),
                e
            ))
        })?;

        let jwt = jwt.trim();
        if jwt.is_empty() {
            return Err(TransportError::TokenFile(format!(
                "Service account token file {} is empty",
                self.service_account_token_path.display()
            )));
        }

        Ok(jwt.to_string())
    }
}

#[async_trait]
impl VaultLogin for KubernetesLogin {
    fn method(&self) -> &'static str {
        "kubernetes"
    }

    async fn login(&self, transport: &VaultTransport) -> Result<AuthInfo, AuthError> {
        if self.role.is_empty() {
            return Err(AuthError::InvalidLogin("no role name was provided".to_string()));
        }

        let jwt = self
            .read_service_account_token()
            .await
            .map_err(AuthError::ExchangeFailed)?;

        let body = json!({
            "role": self.role,
            "jwt": jwt,
        });

        exchange(transport, &self.mount_path, &body).await
    }
}

/// Sends the login request and requires a client token in the answer.
async fn exchange(
    transport: &VaultTransport,
    mount_path: &str,
    body: &serde_json::Value,
) -> Result<AuthInfo, AuthError> {
    let auth = transport
        .login(mount_path, body)
        .await
        .map_err(AuthError::ExchangeFailed)?;

    match auth {
        Some(info) if !info.client_token.is_empty() => Ok(info),
        _ => Err(AuthError::EmptyAuthInfo),
    }
}
