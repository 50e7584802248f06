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


use reqwest::Client;
use serde_json::{Value, json};
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::hashicorp_vault::HashicorpVault;

pub const ROOT_TOKEN: &str = "myroot";
pub const TEST_TOKEN: &str = "qwerty";
pub const KV_MOUNT: &str = "some-domain";
pub const GROUP1_PATH: &str = "some-domain/data/some-service/group1";
pub const GROUP2_PATH: &str = "some-domain/data/some-service/group2";

pub const GROUP1_FIXTURE: &str = include_str!("../fixtures/group1.json");
pub const GROUP2_FIXTURE: &str = include_str!("../fixtures/group2.json");

pub fn fixture(raw: &str) -> serde_json::Map<String, Value> {
    serde_json::from_str(raw).expect("Fixture must be a JSON object")
}

/// Starts a Vault dev server with a KV v2 mount at `some-domain`, both fixtures written under
/// `some-service`, and the `qwerty` token created.
pub async fn setup_vault_container() -> (String, testcontainers::ContainerAsync<HashicorpVault>) {
    let container = HashicorpVault::default().start().await.unwrap();

    let host_port = container.get_host_port_ipv4(8200).await.unwrap();
    let vault_url = format!("http://127.0.0.1:{}", host_port);

    let client = Client::new();

    // Wait for Vault to be ready
    for _ in 0..30 {
        if client.get(format!("{}/v1/sys/health", vault_url)).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    post_as_root(
        &client,
        &format!("{}/v1/sys/mounts/{}", vault_url, KV_MOUNT),
        json!({"type": "kv", "options": {"version": "2"}}),
        "Failed to mount KV v2 engine",
    )
    .await;

    for (path, raw) in [(GROUP1_PATH, GROUP1_FIXTURE), (GROUP2_PATH, GROUP2_FIXTURE)] {
        post_as_root(
            &client,
            &format!("{}/v1/{}", vault_url, path),
            json!({"data": fixture(raw)}),
            "Failed to write fixture",
        )
        .await;
    }

    post_as_root(
        &client,
        &format!("{}/v1/auth/token/create", vault_url),
        json!({"id": TEST_TOKEN, "policies": ["root"]}),
        "Failed to create test token",
    )
    .await;

    (vault_url, container)
}

async fn post_as_root(client: &Client, url: &str, body: Value, context: &str) {
    let response = client
        .post(url)
        .header("X-Vault-Token", ROOT_TOKEN)
        .json(&body)
        .send()
        .await
        .expect(context);

    assert!(
        response.status().is_success(),
        "{}: {}",
        context,
        response.text().await.unwrap()
    );
}
