// File: httpinner.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use reqwest::header::HeaderMap;

/// Snapshot of one response as seen by the analysis stage: status and the
/// full header map, taken before the body is drained. Repeated header names
/// keep all their values.
#[derive(Debug)]
pub struct HttpInner {
    headers: HeaderMap,
    status: u16,
}

impl HttpInner {
    pub fn new() -> Self {
        HttpInner {
            headers: HeaderMap::new(),
            status: 0,
        }
    }

    pub fn new_with_all(headers: HeaderMap, status: u16) -> Self {
        HttpInner { headers, status }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn status(&self) -> u16 {
        self.status
    }
}
