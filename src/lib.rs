// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]
#![allow(clippy::new_without_default)]

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod frequency;
pub mod getstate;
pub mod http;
pub mod httpinner;
pub mod reflection;
