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

use super::auth::{AppRoleLogin, AuthInfo, KubernetesLogin, VaultLogin};
use super::config::VaultConfig;
use super::transport::{HealthStatus, VaultTransport};
use libvault_core::auth::{AuthMethod, VaultToken};
use libvault_core::diagnostics::DiagnosticSink;
use libvault_core::error::{AuthError, ConnectionError, RetrievalError};
use libvault_core::secret::NormalizedSecret;
use libvault_core::session::{SecretSession, SessionState};
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;

/// A session against a HashiCorp Vault server.
///
/// Created unauthenticated by [`connect()`](Self::connect). One of the `authenticate_*` methods must succeed
/// before [`retrieve()`](Self::retrieve) is honoured.
pub struct VaultClient {
    session: SecretSession<VaultTransport>,
    health: HealthStatus,
}

impl VaultClient {
    /// Creates a session and checks that the server answers its health endpoint.
    ///
    /// The probe is sent once; retrying is up to the caller.
    pub async fn connect(config: VaultConfig) -> Result<Self, ConnectionError> {
        let transport = VaultTransport::new(&config)?;
        let health = transport.health_check().await.map_err(ConnectionError::Unreachable)?;

        let sink = config.sink.clone();
        if health.sealed {
            sink.warn(&format!("Vault server at {} is sealed", transport.address()));
        }
        sink.debug(&format!("connected to Vault {} at {}", health.version, transport.address()));

        Ok(Self {
            session: SecretSession::new(transport, sink),
            health,
        })
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &VaultTransport {
        self.session.reader()
    }

    /// Returns the health status reported when the session was created.
    pub fn health(&self) -> &HealthStatus {
        &self.health
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Scopes subsequent logins and reads under `namespace`; an empty value clears it.
    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.session.reader_mut().set_namespace(namespace);
    }

    /// Authenticates with the strategy described by `method`.
    pub async fn authenticate(&mut self, method: AuthMethod) -> Result<(), AuthError> {
        match method {
            AuthMethod::Token(token) => self.authenticate_with_token(token),
            AuthMethod::AppRole { role_id, secret_id } => self.authenticate_with_approle(&role_id, &secret_id).await,
            AuthMethod::Kubernetes {
                role,
                service_account_token_path,
                mount_path,
            } => {
                self.authenticate_with_kubernetes(&role, &service_account_token_path, &mount_path)
                    .await
            }
        }
    }

    /// Uses an already issued token.
    ///
    /// Vault is not contacted; an invalid token surfaces as a transport failure on the first retrieval.
    pub fn authenticate_with_token(&mut self, token: impl Into<VaultToken>) -> Result<(), AuthError> {
        let token = token.into();
        HeaderValue::from_str(token.expose())
            .map_err(|_| AuthError::InvalidLogin("token contains characters not allowed in a header".to_string()))?;

        self.session.reader_mut().set_token(token);
        self.session.mark_authenticated();
        Ok(())
    }

    /// Authenticates with the AppRole backend mounted at `approle`.
    pub async fn authenticate_with_approle(&mut self, role_id: &str, secret_id: &str) -> Result<(), AuthError> {
        let login = AppRoleLogin::builder().role_id(role_id).secret_id(secret_id).build();
        self.authenticate_with_login(&login).await.map(|_| ())
    }

    /// Authenticates with the Kubernetes backend.
    ///
    /// Empty `service_account_token_path` and `mount_path` fall back to the service account token of the pod
    /// and the `kubernetes` mount.
    pub async fn authenticate_with_kubernetes(
        &mut self,
        role: &str,
        service_account_token_path: &str,
        mount_path: &str,
    ) -> Result<(), AuthError> {
        let login = KubernetesLogin::from_parts(role, service_account_token_path, mount_path);
        self.authenticate_with_login(&login).await.map(|_| ())
    }

    /// Runs a login exchange and, on success, stores the issued token.
    ///
    /// On failure the previous token and state are kept.
    pub async fn authenticate_with_login(&mut self, login: &dyn VaultLogin) -> Result<AuthInfo, AuthError> {
        self.session
            .sink()
            .debug(&format!("logging in with the {} backend", login.method()));
        let auth = login.login(self.session.reader()).await?;

        self.session.reader_mut().set_token(auth.client_token());
        self.session.mark_authenticated();
        Ok(auth)
    }

    /// Retrieves the secret at `path` (e.g. `secret/data/my-app`) and unwraps its versioned payload.
    pub async fn retrieve(&self, path: &str) -> Result<NormalizedSecret, RetrievalError> {
        self.session.retrieve(path).await
    }

    /// Retrieves the secret at `path` and deserializes its fields into `T`.
    pub async fn retrieve_as<T: DeserializeOwned>(&self, path: &str) -> Result<T, RetrievalError> {
        self.session.retrieve_as(path).await
    }
}
