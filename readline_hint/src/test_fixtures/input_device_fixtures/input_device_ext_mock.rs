// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use super::{gen_input_stream, gen_input_stream_with_delay};
use crate::{CrosstermEventResult, InputDevice};

pub trait InputDeviceExtMock {
    fn new_mock(generator_vec: Vec<CrosstermEventResult>) -> InputDevice;

    fn new_mock_with_delay(
        generator_vec: Vec<CrosstermEventResult>,
        delay: Duration,
    ) -> InputDevice;
}

impl InputDeviceExtMock for InputDevice {
    fn new_mock(generator_vec: Vec<CrosstermEventResult>) -> InputDevice {
        InputDevice {
            resource: gen_input_stream(generator_vec),
        }
    }

    fn new_mock_with_delay(
        generator_vec: Vec<CrosstermEventResult>,
        delay: Duration,
    ) -> InputDevice {
        InputDevice {
            resource: gen_input_stream_with_delay(generator_vec, delay),
        }
    }
}

/// Key press events for every character of `text`, with no modifiers.
#[must_use]
pub fn gen_typing_events(text: &str) -> Vec<CrosstermEventResult> {
    text.chars().map(|ch| gen_key_event(KeyCode::Char(ch))).collect()
}

/// A single key press event with no modifiers.
#[must_use]
pub fn gen_key_event(code: KeyCode) -> CrosstermEventResult {
    Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}
