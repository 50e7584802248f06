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

use crate::auth::{AuthMethod, K8S_DEFAULT_MOUNT_PATH, K8S_DEFAULT_SERVICE_ACCOUNT_PATH, VaultToken, non_empty_or};

#[test]
fn test_vault_token_is_redacted() {
    let token = VaultToken::new("hvs.CAESIAabc123");

    assert_eq!(format!("{:?}", token), "VaultToken(***)");
    assert_eq!(token.to_string(), "***");
    assert_eq!(token.expose(), "hvs.CAESIAabc123");
}

#[test]
fn test_auth_method_debug_hides_credentials() {
    let token = format!("{:?}", AuthMethod::token("qwerty"));
    assert!(!token.contains("qwerty"));

    let app_role = format!("{:?}", AuthMethod::app_role("my-role-id", "my-secret-id"));
    assert!(app_role.contains("my-role-id"));
    assert!(!app_role.contains("my-secret-id"));
}

#[test]
fn test_auth_method_names() {
    assert_eq!(AuthMethod::token("t").name(), "token");
    assert_eq!(AuthMethod::app_role("r", "s").name(), "approle");
    assert_eq!(AuthMethod::kubernetes("reader").name(), "kubernetes");
}

#[test]
fn test_kubernetes_descriptor_uses_empty_defaults() {
    match AuthMethod::kubernetes("reader") {
        AuthMethod::Kubernetes {
            role,
            service_account_token_path,
            mount_path,
        } => {
            assert_eq!(role, "reader");
            assert_eq!(non_empty_or(&service_account_token_path, K8S_DEFAULT_SERVICE_ACCOUNT_PATH), K8S_DEFAULT_SERVICE_ACCOUNT_PATH);
            assert_eq!(non_empty_or(&mount_path, K8S_DEFAULT_MOUNT_PATH), "kubernetes");
        }
        other => panic!("Expected Kubernetes descriptor, got: {:?}", other),
    }
}

#[test]
fn test_non_empty_or() {
    assert_eq!(non_empty_or("", "fallback"), "fallback");
    assert_eq!(non_empty_or("value", "fallback"), "value");
}
