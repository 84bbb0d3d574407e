// File: config.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#[derive(Debug, Clone)]
pub struct ScanConfig {
    method: String,
    custom_header: Option<(String, String)>,
    extract_header: String,
    pattern: String,
    reverse: bool,
    quiet: bool,
    feed_delay_ms: u64,
    workers: usize,
    timeout: u64,
    header_frequency: bool,
    top_rare: usize,
}

impl ScanConfig {
    pub fn new() -> Self {
        Self {
            method: "GET".to_string(),
            custom_header: None,
            extract_header: String::new(),
            pattern: String::new(),
            reverse: false,
            quiet: false,
            feed_delay_ms: 50,
            workers: 20,
            timeout: 5,
            header_frequency: false,
            top_rare: 10,
        }
    }

    pub fn set_method(&mut self, method: String) {
        self.method = method;
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// The custom header is attached only when both name and value are
    /// present and non-empty; anything else leaves it unset.
    pub fn set_custom_header(&mut self, name: Option<String>, value: Option<String>) {
        self.custom_header = match (name, value) {
            (Some(n), Some(v)) if !n.is_empty() && !v.is_empty() => Some((n, v)),
            _ => None,
        };
    }

    pub fn custom_header(&self) -> Option<(&str, &str)> {
        self.custom_header
            .as_ref()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn set_extract_header(&mut self, extract_header: String) {
        self.extract_header = extract_header;
    }

    pub fn extract_header(&self) -> &str {
        &self.extract_header
    }

    pub fn set_pattern(&mut self, pattern: String) {
        self.pattern = pattern;
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    pub fn reverse(&self) -> bool {
        self.reverse
    }

    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn set_feed_delay_ms(&mut self, feed_delay_ms: u64) {
        self.feed_delay_ms = feed_delay_ms;
    }

    pub fn feed_delay_ms(&self) -> u64 {
        self.feed_delay_ms
    }

    pub fn set_workers(&mut self, workers: usize) {
        self.workers = workers.max(1);
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn set_timeout(&mut self, timeout: u64) {
        self.timeout = timeout;
    }

    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    pub fn set_header_frequency(&mut self, header_frequency: bool) {
        self.header_frequency = header_frequency;
    }

    pub fn header_frequency(&self) -> bool {
        self.header_frequency
    }

    pub fn set_top_rare(&mut self, top_rare: usize) {
        self.top_rare = top_rare;
    }

    pub fn top_rare(&self) -> usize {
        self.top_rare
    }
}
