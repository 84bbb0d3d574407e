// File: analyzer.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::httpinner::HttpInner;
use crate::reflection;
use colored::Colorize;
use regex::Regex;
use reqwest::header::HeaderMap;
use reqwest::Url;

/// Hit predicate for one response: a pattern tested against the value of a
/// configured header, optionally inverted. A pattern that fails to compile
/// behaves as a permanent non-match rather than an error.
#[derive(Debug)]
pub struct MatchRule {
    regex: Option<Regex>,
    extract_header: String,
    reverse: bool,
}

impl MatchRule {
    pub fn new(pattern: &str, extract_header: &str, reverse: bool) -> Self {
        let regex = match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                log::debug!("header pattern did not compile: {}", e);
                None
            }
        };
        Self {
            regex,
            extract_header: extract_header.to_string(),
            reverse,
        }
    }

    pub fn extract_header(&self) -> &str {
        &self.extract_header
    }

    pub fn is_hit(&self, value: &str) -> bool {
        let matched = self
            .regex
            .as_ref()
            .map_or(false, |re| re.is_match(value));
        (!self.reverse && matched) || (self.reverse && !matched)
    }
}

/// Evaluates the match rule against each response and prints the per-URL
/// output. Full headers are dumped only for rule hits so that filtered scans
/// over many targets stay scannable; non-hits print the bare URL.
#[derive(Debug)]
pub struct Analyzer {
    rule: MatchRule,
    quiet: bool,
}

impl Analyzer {
    pub fn new(rule: MatchRule, quiet: bool) -> Self {
        Self { rule, quiet }
    }

    pub fn classify(&self, inner: &HttpInner) -> bool {
        let value = extract_header_value(inner.headers(), self.rule.extract_header());
        self.rule.is_hit(&value)
    }

    pub fn process(&self, url: &Url, inner: &HttpInner) {
        if self.classify(inner) && !self.quiet {
            println!("\n\n{}", url.as_str().blue());
            for name in inner.headers().keys() {
                let values: Vec<String> = inner
                    .headers()
                    .get_all(name)
                    .iter()
                    .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
                    .collect();
                println!("{}: {}", name.as_str().green(), values.join(", "));
            }
        } else {
            println!("{}", url.as_str().blue());
        }

        for alert in reflection::find_reflections(url, inner) {
            println!("\n{}", alert.to_string().red());
        }
    }
}

/// First value of the named header, or the empty string when the header is
/// absent or no header name was configured.
pub fn extract_header_value(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default()
}
