// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[arg(help = "File with URLs to probe, one per line (reads standard input when absent)")]
    pub input_file: Option<String>,

    #[arg(
        short = 'r',
        long = "reverse",
        help = "Match anything other than the supplied pattern"
    )]
    pub reverse: bool,

    #[arg(
        short = 'q',
        long = "quiet",
        help = "Don't print the full header dump on a match"
    )]
    pub quiet: bool,

    #[arg(
        short = 'f',
        long = "feed-delay",
        default_value_t = 50,
        help = "Delay between successive request launches in milliseconds"
    )]
    pub feed_delay: u64,

    #[arg(
        short = 'H',
        long = "header",
        help = "Custom request header name (attached only together with --header-value)"
    )]
    pub header: Option<String>,

    #[arg(
        long = "header-value",
        help = "Custom request header value (attached only together with --header)"
    )]
    pub header_value: Option<String>,

    #[arg(
        short = 'm',
        long = "method",
        default_value = "GET",
        value_parser = ["GET", "HEAD"],
        help = "Request method"
    )]
    pub method: String,

    #[arg(
        short = 'e',
        long = "extract-header",
        default_value = "",
        help = "Header whose value feeds the match pattern"
    )]
    pub extract_header: String,

    #[arg(
        short = 'p',
        long = "pattern",
        default_value = "",
        help = "Regular expression tested against the extracted header value"
    )]
    pub pattern: String,

    #[arg(
        long = "header-frequency",
        help = "Show header frequency statistics after the scan"
    )]
    pub header_frequency: bool,

    #[arg(
        long = "top-rare",
        default_value_t = 10,
        help = "Number of rarest header names to display"
    )]
    pub top_rare: usize,

    #[arg(
        short = 'w',
        long = "workers",
        default_value_t = 20,
        help = "Maximum number of concurrent requests"
    )]
    pub workers: usize,

    #[arg(
        long = "log-level",
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}
