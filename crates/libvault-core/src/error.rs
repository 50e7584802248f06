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

use thiserror::Error;

/// Failure talking to the Vault server, independent of which operation was running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Token file error: {0}")]
    TokenFile(String),
}

impl TransportError {
    /// Returns true for failures that may succeed when the same request is sent again.
    pub fn is_retriable(&self) -> bool {
        match self {
            TransportError::Network(_) => true,
            TransportError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns the HTTP status reported by Vault, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while establishing a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    #[error("Vault server is not available: {0}")]
    Unreachable(#[source] TransportError),

    #[error("Failed to create client: {0}")]
    InvalidConfiguration(String),
}

/// Errors raised by the authentication strategies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The login descriptor was rejected before contacting Vault.
    #[error("Invalid login: {0}")]
    InvalidLogin(String),

    #[error("Failed to authenticate: {0}")]
    ExchangeFailed(#[source] TransportError),

    /// The login call succeeded but did not carry a client token.
    #[error("Failed to authenticate: empty auth info")]
    EmptyAuthInfo,
}

/// Errors raised when retrieving a secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RetrievalError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Retrieve failed: {0}")]
    TransportFailure(#[source] TransportError),

    #[error("No response received from vault")]
    NoResponse,

    #[error("No data returned for secret")]
    NoData,

    #[error("Secret does not match the requested shape: {0}")]
    Decode(String),
}
