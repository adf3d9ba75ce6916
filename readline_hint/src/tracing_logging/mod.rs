// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in `tracing` subscriber setup for binaries. The library only emits events, it
//! never installs a subscriber. The editor owns the terminal in raw mode while a read is
//! in progress, so logging to a file is usually what you want.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_setup;

// Re-export.
pub use tracing_config::*;
pub use tracing_setup::*;
