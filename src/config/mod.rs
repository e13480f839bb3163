// ABOUTME: Configuration management for the bodytrack client
// ABOUTME: Environment-based settings parsed once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

//! Configuration management, environment-variable driven.

/// Environment-based configuration parsing
pub mod environment;
