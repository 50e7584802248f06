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

use std::fmt;

/// Mount name of the Kubernetes auth backend when none is given.
pub const K8S_DEFAULT_MOUNT_PATH: &str = "kubernetes";

/// Location of the projected service account token inside a pod.
pub const K8S_DEFAULT_SERVICE_ACCOUNT_PATH: &str = "/var/run/secrets/kubernetes.io/serviceaccount/token";

/// Mount name of the AppRole auth backend when none is given.
pub const APPROLE_DEFAULT_MOUNT_PATH: &str = "approle";

/// A Vault client token.
///
/// The value is only reachable through [`VaultToken::expose`]; `Debug` and `Display` never print it.
#[derive(Clone, PartialEq, Eq)]
pub struct VaultToken(String);

impl VaultToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token for use in a request header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for VaultToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for VaultToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Debug for VaultToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("VaultToken(***)")
    }
}

impl fmt::Display for VaultToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// The supported ways of obtaining a Vault token.
///
/// Each variant only describes the inputs of a login; the resulting credential is held by the session.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMethod {
    /// Use an already issued token as is.
    Token(VaultToken),
    /// Exchange a role id and secret id with the AppRole backend.
    AppRole { role_id: String, secret_id: String },
    /// Exchange the pod's service account token with the Kubernetes backend.
    ///
    /// Empty `service_account_token_path` and `mount_path` fall back to [`K8S_DEFAULT_SERVICE_ACCOUNT_PATH`]
    /// and [`K8S_DEFAULT_MOUNT_PATH`].
    Kubernetes {
        role: String,
        service_account_token_path: String,
        mount_path: String,
    },
}

impl AuthMethod {
    pub fn token(token: impl Into<VaultToken>) -> Self {
        AuthMethod::Token(token.into())
    }

    pub fn app_role(role_id: impl Into<String>, secret_id: impl Into<String>) -> Self {
        AuthMethod::AppRole {
            role_id: role_id.into(),
            secret_id: secret_id.into(),
        }
    }

    /// Kubernetes login with the default token path and mount.
    pub fn kubernetes(role: impl Into<String>) -> Self {
        AuthMethod::Kubernetes {
            role: role.into(),
            service_account_token_path: String::new(),
            mount_path: String::new(),
        }
    }

    /// Short name of the strategy, safe to log.
    pub fn name(&self) -> &'static str {
        match self {
            AuthMethod::Token(_) => "token",
            AuthMethod::AppRole { .. } => "approle",
            AuthMethod::Kubernetes { .. } => "kubernetes",
        }
    }
}

impl fmt::Debug for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMethod::Token(token) => f.debug_tuple("Token").field(token).finish(),
            AuthMethod::AppRole { role_id, .. } => f
                .debug_struct("AppRole")
                .field("role_id", role_id)
                .field("secret_id", &"***")
                .finish(),
            AuthMethod::Kubernetes {
                role,
                service_account_token_path,
                mount_path,
            } => f
                .debug_struct("Kubernetes")
                .field("role", role)
                .field("service_account_token_path", service_account_token_path)
                .field("mount_path", mount_path)
                .finish(),
        }
    }
}

/// Returns `value`, or `default` when `value` is empty.
pub fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}
