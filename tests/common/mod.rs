// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(dead_code)]

use hprobe::analyzer::{Analyzer, MatchRule};
use hprobe::config::ScanConfig;
use hprobe::frequency::HeaderFrequency;
use hprobe::getstate::GetState;
use hprobe::http::Http;
use std::collections::HashMap;
use std::sync::Arc;
use wiremock::{MockServer, ResponseTemplate};

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn create_mock_response(status: u16, headers: HashMap<&str, &str>) -> ResponseTemplate {
    let mut response = ResponseTemplate::new(status);
    for (key, value) in headers {
        response = response.append_header(key, value);
    }
    response
}

/// A config with the feed delay disabled so tests run at full speed.
pub fn fast_config() -> ScanConfig {
    let mut config = ScanConfig::new();
    config.set_feed_delay_ms(0);
    config
}

/// An analyzer that hits on everything but stays quiet, so probe tests only
/// emit bare URL lines.
pub fn quiet_analyzer() -> Arc<Analyzer> {
    Arc::new(Analyzer::new(MatchRule::new("", "", false), true))
}

pub fn probe(state: Arc<GetState>, config: ScanConfig) -> Http {
    Http::new(state, config, quiet_analyzer(), None)
}

pub fn probe_with_frequency(
    state: Arc<GetState>,
    config: ScanConfig,
    frequency: Arc<HeaderFrequency>,
) -> Http {
    Http::new(state, config, quiet_analyzer(), Some(frequency))
}

pub fn ok_lines(urls: &[String]) -> Vec<std::io::Result<String>> {
    urls.iter().cloned().map(Ok).collect()
}
