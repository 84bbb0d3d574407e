// File: frequency.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use colored::Colorize;
use reqwest::header::HeaderMap;
use std::collections::HashMap;
use std::sync::Mutex;

/// Tally of which header names appear across all observed responses. Each
/// response contributes at most one count per header name, however many
/// values that name carries.
#[derive(Debug)]
pub struct HeaderFrequency {
    counts: Mutex<HashMap<String, u64>>,
}

impl HeaderFrequency {
    pub fn new() -> Self {
        Self {
            counts: Mutex::new(HashMap::new()),
        }
    }

    pub fn record(&self, headers: &HeaderMap) {
        if let Ok(mut counts) = self.counts.lock() {
            for name in headers.keys() {
                *counts.entry(name.as_str().to_string()).or_insert(0) += 1;
            }
        }
    }

    /// The `k` least common header names, ascending by count. Ties break on
    /// header name ascending, so the order is stable across runs.
    pub fn rarest(&self, k: usize) -> Vec<(String, u64)> {
        let counts = match self.counts.lock() {
            Ok(counts) => counts,
            Err(_) => return Vec::new(),
        };
        let mut entries: Vec<(String, u64)> = counts
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(k);
        entries
    }

    pub fn print_report(&self, k: usize) {
        println!("\n\n----------------------------");
        println!("Header frequency statistics:");
        println!("----------------------------");
        for (name, count) in self.rarest(k) {
            println!("{}: {}", name.green(), count.to_string().blue());
        }
    }
}
