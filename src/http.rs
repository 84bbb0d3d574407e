// File: http.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::analyzer::Analyzer;
use crate::config::ScanConfig;
use crate::frequency::HeaderFrequency;
use crate::getstate::GetState;
use crate::httpinner::HttpInner;
use futures::stream::{FuturesUnordered, StreamExt};
use governor::{clock::DefaultClock, state::InMemoryState, state::NotKeyed, Quota, RateLimiter};
use reqwest::redirect;
use reqwest::{Method, Url};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36";

/// Connection reuse cap per host. The total number of open connections is
/// bounded by the worker semaphore.
const POOL_MAX_IDLE_PER_HOST: usize = 20;

/// Dispatcher and fetch workers. `work` consumes the input lines, shapes the
/// launch rate, caps in-flight requests with a semaphore, and waits for
/// every spawned worker before returning. All results flow out through the
/// shared counters, the analyzer's console output, and the optional
/// frequency table.
#[derive(Debug, Clone)]
pub struct Http {
    pub state_ptr: Arc<GetState>,
    pub config_ptr: ScanConfig,
    rate_limiter: Option<Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>>,
    semaphore: Arc<Semaphore>,
    analyzer: Arc<Analyzer>,
    frequency: Option<Arc<HeaderFrequency>>,
    client: reqwest::Client,
}

impl Http {
    pub fn new(
        state_ptr: Arc<GetState>,
        config_ptr: ScanConfig,
        analyzer: Arc<Analyzer>,
        frequency: Option<Arc<HeaderFrequency>>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config_ptr.timeout()))
            .danger_accept_invalid_certs(true)
            .redirect(redirect::Policy::none())
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build reqwest client");

        let rate_limiter = Quota::with_period(Duration::from_millis(config_ptr.feed_delay_ms()))
            .map(|quota| Arc::new(RateLimiter::direct(quota)));
        let semaphore = Arc::new(Semaphore::new(config_ptr.workers()));

        Http {
            state_ptr,
            config_ptr,
            rate_limiter,
            semaphore,
            analyzer,
            frequency,
            client,
        }
    }

    /// Runs the whole scan over a lazy sequence of raw input lines. Lines
    /// that do not parse as absolute URLs are counted as errors and never
    /// dispatched. A read error stops the intake; it is returned only after
    /// every already-launched worker has finished, so the counters are
    /// complete when the caller reports it.
    pub async fn work<I>(&self, lines: I) -> std::io::Result<()>
    where
        I: IntoIterator<Item = std::io::Result<String>>,
    {
        let mut tasks = FuturesUnordered::new();
        let mut read_error = None;

        for line in lines {
            let raw = match line {
                Ok(raw) => raw,
                Err(e) => {
                    read_error = Some(e);
                    break;
                }
            };

            if let Some(rate_limiter) = &self.rate_limiter {
                rate_limiter.until_ready().await;
            }

            let url = match Url::parse(&raw) {
                Ok(url) => url,
                Err(e) => {
                    log::debug!("skipping line {:?}: {}", raw, e);
                    self.state_ptr.add_failure();
                    continue;
                }
            };

            let permit = self
                .semaphore
                .clone()
                .acquire_owned()
                .await
                .expect("semaphore closed");
            let client = self.client.clone();
            let config = self.config_ptr.clone();
            let state = Arc::clone(&self.state_ptr);
            let analyzer = Arc::clone(&self.analyzer);
            let frequency = self.frequency.clone();

            tasks.push(tokio::spawn(async move {
                // Holding the permit for the task lifetime is what bounds
                // concurrent in-flight requests to the worker count.
                let _permit = permit;
                Self::process_url(client, config, state, analyzer, frequency, url).await;
            }));
        }

        while tasks.next().await.is_some() {}

        match read_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// One request/response cycle: build, send, analyze, drain, count.
    /// Headers and status are available before the body is read, so the
    /// analysis runs first and the drain only serves connection reuse.
    async fn process_url(
        client: reqwest::Client,
        config: ScanConfig,
        state: Arc<GetState>,
        analyzer: Arc<Analyzer>,
        frequency: Option<Arc<HeaderFrequency>>,
        url: Url,
    ) {
        let method = match Method::from_bytes(config.method().as_bytes()) {
            Ok(method) => method,
            Err(_) => {
                state.add_failure();
                return;
            }
        };

        let mut request = client.request(method, url.clone());
        if let Some((name, value)) = config.custom_header() {
            request = request.header(name, value);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                log::debug!("request to {} failed: {}", url, e);
                state.add_failure();
                return;
            }
        };

        let inner =
            HttpInner::new_with_all(response.headers().clone(), response.status().as_u16());

        analyzer.process(&url, &inner);
        if let Some(frequency) = &frequency {
            frequency.record(inner.headers());
        }

        // Body content is never inspected; reading it to exhaustion hands
        // the connection back to the pool. A failed drain is not an error.
        let _ = response.bytes().await;
        state.add_success();
    }
}
