// File: main.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;
use colored::Colorize;
use hprobe::analyzer::{Analyzer, MatchRule};
use hprobe::cli::Cli;
use hprobe::config::ScanConfig;
use hprobe::frequency::HeaderFrequency;
use hprobe::getstate::GetState;
use hprobe::http::Http;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(&cli.log_level);

    let input: Box<dyn BufRead> = match &cli.input_file {
        Some(path) => match File::open(path) {
            Ok(file) => Box::new(BufReader::new(file)),
            Err(e) => {
                eprintln!("Failed to open file: {}", e);
                std::process::exit(1);
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let mut config = ScanConfig::new();
    config.set_method(cli.method);
    config.set_custom_header(cli.header, cli.header_value);
    config.set_extract_header(cli.extract_header);
    config.set_pattern(cli.pattern);
    config.set_reverse(cli.reverse);
    config.set_quiet(cli.quiet);
    config.set_feed_delay_ms(cli.feed_delay);
    config.set_workers(cli.workers);
    config.set_header_frequency(cli.header_frequency);
    config.set_top_rare(cli.top_rare);

    let state = Arc::new(GetState::new());
    let rule = MatchRule::new(config.pattern(), config.extract_header(), config.reverse());
    let analyzer = Arc::new(Analyzer::new(rule, config.quiet()));
    let frequency = if config.header_frequency() {
        Some(Arc::new(HeaderFrequency::new()))
    } else {
        None
    };

    let http = Http::new(
        Arc::clone(&state),
        config.clone(),
        analyzer,
        frequency.clone(),
    );
    let read_result = http.work(input.lines()).await;

    print_counters(&state, config.quiet());

    if let Err(e) = read_result {
        eprintln!("\nError: {}", e);
    }

    if let Some(frequency) = frequency {
        frequency.print_report(config.top_rare());
    }
}

fn init_logger(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Warn,
    };
    let _ = SimpleLogger::new().with_level(level).init();
}

fn print_counters(state: &GetState, quiet: bool) {
    let errors = format!("Errors: {}", state.failed_requests()).red();
    if quiet {
        print!(
            "\r(Total requests: {}  {})",
            state.successful_requests(),
            errors
        );
    } else {
        print!(
            "\r(Total requests: {}  {})\n\x1b[A",
            state.successful_requests(),
            errors
        );
    }
    let _ = io::stdout().flush();
}
