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

use crate::diagnostics::{DiagnosticSink, LogSink, MemorySink, discard_sink};
use log::Level;

#[test]
fn test_memory_sink_records_in_order() {
    let sink = MemorySink::new();

    sink.debug("connected");
    sink.warn("deprecated path");
    sink.emit(Level::Info, "info message");

    assert_eq!(
        sink.entries(),
        vec![
            (Level::Debug, "connected".to_string()),
            (Level::Warn, "deprecated path".to_string()),
            (Level::Info, "info message".to_string()),
        ]
    );
    assert_eq!(sink.messages_at(Level::Warn), vec!["deprecated path".to_string()]);
}

#[test]
fn test_discard_sink_accepts_messages() {
    let sink = discard_sink();

    sink.debug("ignored");
    sink.warn("ignored");
}

#[test]
fn test_log_sink_target() {
    assert_eq!(LogSink::default().target(), "libvault");
    assert_eq!(LogSink::new("my-service::vault").target(), "my-service::vault");

    // No logger is installed in tests, the call must still be accepted
    LogSink::default().warn("forwarded");
}
