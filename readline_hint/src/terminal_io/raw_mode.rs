// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Puts the terminal in raw mode for as long as it is alive. Dropping it restores cooked
/// mode, also when the read ends with an error or a panic unwinds through it.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// # Errors
    ///
    /// Returns an error if the terminal refuses to enter raw mode.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        tracing::debug!(message = "raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = disable_raw_mode() {
            tracing::error!(message = "failed to disable raw mode", error = %error);
        } else {
            tracing::debug!(message = "raw mode disabled");
        }
    }
}
