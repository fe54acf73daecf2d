// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods
// ABOUTME: Helper utilities for mycoblend-cli
// ABOUTME: Provides output formatting for reports and analysis matrices

pub mod display;
