// ABOUTME: Helper modules for unidancing-cli
// ABOUTME: Provides output formatting shared by the commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 UniDancing Contributors

pub mod display;
