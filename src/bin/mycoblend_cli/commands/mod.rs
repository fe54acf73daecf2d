// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods
// ABOUTME: Re-exports command modules for mycoblend-cli
// ABOUTME: Provides access to the recommend and matrix commands

pub mod matrix;
pub mod recommend;
