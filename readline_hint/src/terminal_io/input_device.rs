// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, EventStream};
use futures_util::{FutureExt, StreamExt};

use crate::{CrosstermEventResult, PinnedInputStream, ReadlineError};

/// This struct represents an input device that delivers terminal events one at a time.
/// See [`crate::InputDeviceExtMock`] for testing features.
#[allow(missing_debug_implementations)]
pub struct InputDevice {
    pub resource: PinnedInputStream<CrosstermEventResult>,
}

impl InputDevice {
    #[must_use]
    pub fn new_event_stream() -> InputDevice {
        InputDevice {
            resource: Box::pin(EventStream::new()),
        }
    }

    /// Wait for the next event.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::IO`] if the underlying source failed.
    /// - [`ReadlineError::InputClosed`] if the stream has ended.
    pub async fn next(&mut self) -> Result<Event, ReadlineError> {
        match self.resource.next().fuse().await {
            Some(it) => Ok(it?),
            None => Err(ReadlineError::InputClosed),
        }
    }
}
