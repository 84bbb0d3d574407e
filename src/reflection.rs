// File: reflection.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::httpinner::HttpInner;
use reqwest::Url;
use std::fmt;

/// Query parameter values shorter than this are skipped; short fragments
/// show up in header values far too often to be a useful signal.
const MIN_VALUE_LEN: usize = 4;

/// One request query parameter found verbatim inside a response header
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflection {
    pub parameter: String,
    pub value: String,
    pub header: String,
}

impl fmt::Display for Reflection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Alert! Parameter {} with value {} is reflected in header: {}",
            self.parameter, self.value, self.header
        )
    }
}

/// Cross-references the target URL's query parameters against every response
/// header value. A `Location` header on a 301/302 response is exempt: a
/// redirect target echoing a query value is expected, not a reflection
/// signal.
pub fn find_reflections(url: &Url, inner: &HttpInner) -> Vec<Reflection> {
    let mut reflections = Vec::new();

    for (parameter, value) in url.query_pairs() {
        if value.len() < MIN_VALUE_LEN {
            continue;
        }
        for (name, header_value) in inner.headers().iter() {
            let header_str = String::from_utf8_lossy(header_value.as_bytes());
            if !header_str.contains(value.as_ref()) {
                continue;
            }
            if *name == reqwest::header::LOCATION && matches!(inner.status(), 301 | 302) {
                continue;
            }
            reflections.push(Reflection {
                parameter: parameter.to_string(),
                value: value.to_string(),
                header: name.as_str().to_string(),
            });
        }
    }

    reflections
}
