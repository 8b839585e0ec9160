// ABOUTME: Re-exports command modules for unidancing-cli
// ABOUTME: Provides access to exercise, format, and playlist commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

pub mod exercises;
pub mod format;
pub mod playlist;
