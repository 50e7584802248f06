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


use crate::config::VaultConfig;
use crate::transport::VaultTransport;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// An address nothing listens on.
pub(crate) const UNREACHABLE_ADDRESS: &str = "http://127.0.0.1:1";

/// Mounts a healthy, unsealed `sys/health` answer.
pub(crate) async fn mount_health(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/sys/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "initialized": true,
            "sealed": false,
            "standby": false,
            "performance_standby": false,
            "version": "1.17.2",
            "cluster_name": "vault-cluster-test",
            "cluster_id": "c0ffee"
        })))
        .mount(server)
        .await;
}

pub(crate) fn create_transport(address: &str) -> VaultTransport {
    VaultTransport::new(&VaultConfig::builder().address(address).build()).expect("Failed to create transport")
}
