// File: getstate.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::sync::atomic::{AtomicU64, Ordering};

/// Run counters shared by all fetch workers. Every dispatched line ends up
/// in exactly one of the two counters.
#[derive(Debug, Default)]
pub struct GetState {
    successful_requests: AtomicU64,
    failed_requests: AtomicU64,
}

impl GetState {
    pub fn new() -> GetState {
        GetState {
            successful_requests: AtomicU64::new(0),
            failed_requests: AtomicU64::new(0),
        }
    }

    pub fn add_success(&self) {
        self.successful_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_failure(&self) {
        self.failed_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn successful_requests(&self) -> u64 {
        self.successful_requests.load(Ordering::Relaxed)
    }

    pub fn failed_requests(&self) -> u64 {
        self.failed_requests.load(Ordering::Relaxed)
    }

    pub fn total_requests(&self) -> u64 {
        self.successful_requests() + self.failed_requests()
    }
}
