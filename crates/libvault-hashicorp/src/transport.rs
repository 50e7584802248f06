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

use super::auth::AuthInfo;
use super::config::VaultConfig;
use async_trait::async_trait;
use libvault_core::auth::VaultToken;
use libvault_core::error::{ConnectionError, TransportError};
use libvault_core::reader::SecretReader;
use libvault_core::secret::SecretEnvelope;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde_json::{Map, Value};

const TOKEN_HEADER: &str = "X-Vault-Token";
const NAMESPACE_HEADER: &str = "X-Vault-Namespace";
const REQUEST_HEADER: &str = "X-Vault-Request";

/// Status code substituted for the non-2xx codes `sys/health` uses to report sealed, standby or
/// uninitialized servers, so that any answering server passes the probe.
const HEALTH_OVERRIDE_CODE: &str = "299";

/// Thin HTTP binding of the Vault REST API.
///
/// Holds the address, the namespace and the current client token. It does not track whether the token
/// is valid; that is the session's concern.
pub struct VaultTransport {
    http_client: Client,
    base_url: String,
    token: Option<VaultToken>,
    namespace: Option<String>,
}

impl VaultTransport {
    /// Creates a transport for the configured address. No request is sent.
    pub fn new(config: &VaultConfig) -> Result<Self, ConnectionError> {
        let url = Url::parse(&config.address).map_err(|e| {
            ConnectionError::InvalidConfiguration(format!("Invalid Vault address {}: {}", config.address, e))
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConnectionError::InvalidConfiguration(format!(
                "Unsupported scheme in Vault address {}",
                config.address
            )));
        }

        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConnectionError::InvalidConfiguration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.address.trim_end_matches('/').to_string(),
            token: None,
            namespace: config.namespace.clone().filter(|n| !n.is_empty()),
        })
    }

    pub fn address(&self) -> &str {
        &self.base_url
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Scopes subsequent requests under `namespace`; an empty value clears it.
    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        let namespace = namespace.into();
        self.namespace = if namespace.is_empty() { None } else { Some(namespace) };
    }

    /// Replaces the token sent with subsequent requests.
    pub fn set_token(&mut self, token: VaultToken) {
        self.token = Some(token);
    }

    pub fn has_token(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// Probes `sys/health`.
    pub async fn health_check(&self) -> Result<HealthStatus, TransportError> {
        let response = self
            .request(Method::GET, "sys/health")
            .query(&[
                ("standbyok", "true"),
                ("uninitcode", HEALTH_OVERRIDE_CODE),
                ("sealedcode", HEALTH_OVERRIDE_CODE),
                ("standbycode", HEALTH_OVERRIDE_CODE),
                ("drsecondarycode", HEALTH_OVERRIDE_CODE),
                ("performancestandbycode", HEALTH_OVERRIDE_CODE),
            ])
            .send()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to reach Vault: {}", e)))?;

        if !response.status().is_success() {
            return Err(handle_error_response(response, "Health check failed").await);
        }

        response
            .json()
            .await
            .map_err(|e| TransportError::InvalidResponse(format!("Failed to parse health response: {}", e)))
    }

    /// Posts `body` to the login endpoint of the auth backend mounted at `mount_path`.
    ///
    /// Returns `Ok(None)` when Vault answers successfully without an `auth` object.
    pub async fn login(&self, mount_path: &str, body: &Value) -> Result<Option<AuthInfo>, TransportError> {
        let path = format!("auth/{}/login", mount_path.trim_matches('/'));
        let response = self
            .request(Method::POST, &path)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to send login request: {}", e)))?;

        if !response.status().is_success() {
            return Err(handle_error_response(response, "Login failed").await);
        }

        let body = read_body(response).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let login_response: LoginResponse = serde_json::from_str(&body)
            .map_err(|e| TransportError::InvalidResponse(format!("Failed to parse login response: {}", e)))?;

        Ok(login_response.auth)
    }

    /// Reads a logical path, following the Vault client conventions for empty answers.
    async fn read_envelope(&self, path: &str) -> Result<Option<SecretEnvelope>, TransportError> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(|e| TransportError::Network(format!("Failed to read secret: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if status == StatusCode::NOT_FOUND {
            // A 404 only carries a secret when Vault attached data or warnings to it
            let body = read_body(response).await?;
            if body.trim().is_empty() {
                return Ok(None);
            }
            let envelope = parse_envelope(&body)?;
            let has_content =
                !envelope.warnings().is_empty() || envelope.data().is_some_and(|data| !data.is_empty());
            return Ok(has_content.then_some(envelope));
        }

        if !status.is_success() {
            return Err(handle_error_response(response, "Failed to read secret").await);
        }

        let body = read_body(response).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        parse_envelope(&body).map(Some)
    }

    /// Builds a request against `/v1/{path}` carrying the token and namespace headers.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/v1/{}", self.base_url, path.trim_start_matches('/'));
        let mut builder = self.http_client.request(method, url).header(REQUEST_HEADER, "true");
        if let Some(token) = self.token.as_ref().filter(|t| !t.is_empty()) {
            builder = builder.header(TOKEN_HEADER, token.expose());
        }
        if let Some(namespace) = &self.namespace {
            builder = builder.header(NAMESPACE_HEADER, namespace);
        }
        builder
    }
}

#[async_trait]
impl SecretReader for VaultTransport {
    async fn read(&self, path: &str) -> Result<Option<SecretEnvelope>, TransportError> {
        self.read_envelope(path).await
    }
}

/// Answer of the `sys/health` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub initialized: bool,
    #[serde(default)]
    pub sealed: bool,
    #[serde(default)]
    pub standby: bool,
    #[serde(default)]
    pub performance_standby: bool,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub cluster_name: Option<String>,
    #[serde(default)]
    pub cluster_id: Option<String>,
}

/// Converts a non-success response into a [`TransportError`], keeping Vault's error messages.
pub(crate) async fn handle_error_response(response: reqwest::Response, context: &str) -> TransportError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed.errors.join("; "),
        _ => body,
    };

    TransportError::Status {
        status: status.as_u16(),
        message: format!("{}: {}", context, detail),
    }
}

async fn read_body(response: reqwest::Response) -> Result<String, TransportError> {
    response
        .text()
        .await
        .map_err(|e| TransportError::Network(format!("Failed to read response body: {}", e)))
}

fn parse_envelope(body: &str) -> Result<SecretEnvelope, TransportError> {
    let response: SecretResponse = serde_json::from_str(body)
        .map_err(|e| TransportError::InvalidResponse(format!("Failed to parse secret response: {}", e)))?;
    Ok(SecretEnvelope::new(response.data, response.warnings.unwrap_or_default()))
}

/// Vault logical read response
#[derive(Debug, Deserialize)]
struct SecretResponse {
    #[serde(default)]
    data: Option<Map<String, Value>>,
    #[serde(default)]
    warnings: Option<Vec<String>>,
}

/// Vault login response
#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    auth: Option<AuthInfo>,
}

/// Vault error response
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}
