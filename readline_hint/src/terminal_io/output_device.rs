// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::{Arc, MutexGuard, PoisonError};

use crate::{SafeRawTerminal, SendRawTerminal, StdMutex};

/// This struct represents an output device that the line editor writes to.
/// - It is safe to clone.
/// - To write to it, call [`Self::lock()`] in its own block scope and use the guard as a
///   [`crate::LineOutput`].
#[derive(Clone)]
#[allow(missing_debug_implementations)]
pub struct OutputDevice {
    pub resource: SafeRawTerminal,
    pub is_mock: bool,
}

impl Default for OutputDevice {
    fn default() -> Self { Self::new_stdout() }
}

impl OutputDevice {
    #[must_use]
    pub fn new_stdout() -> Self {
        Self {
            resource: Arc::new(StdMutex::new(std::io::stdout())),
            is_mock: false,
        }
    }

    /// Lock the device for writing. Don't call this again while the guard is alive, it
    /// will deadlock.
    ///
    /// A poisoned lock is recovered rather than propagated. The guarded value is a plain
    /// writer with no invariants of its own that a panic could have broken.
    pub fn lock(&self) -> MutexGuard<'_, SendRawTerminal> {
        self.resource.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
