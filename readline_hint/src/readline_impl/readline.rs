// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::ControlFlow;

use crate::{InputDevice, KeyListener, KeyOutcome, Keypress, LineOutput, OutputDevice,
            ReadOptions, ReadOutcome, ReadlineError, validate_prompt};

/// # Mental model and overview
///
/// One [`Readline`] reads one line. [`Self::readline()`] writes the prompt, then pulls
/// events from the [`InputDevice`] one at a time and hands key presses to the
/// [`KeyListener`]. Each event is fully processed (all terminal writes issued and
/// flushed) before the next one is pulled, so there is never more than one handler
/// running. The loop ends when the listener finalizes.
///
/// # Inputs and dependency injection
///
/// Both resources are passed into [`Self::new()`]:
/// 1. [`InputDevice`] wraps a [`crate::PinnedInputStream`]. In production it is
///    crossterm's `EventStream`, in tests it is [`crate::gen_input_stream`].
/// 2. [`OutputDevice`] wraps a [`crate::SafeRawTerminal`]. In production it is
///    [`std::io::Stdout`], in tests it is [`crate::StdoutMock`].
///
/// Raw mode is not managed here, see [`crate::read_line()`].
#[allow(missing_debug_implementations)]
pub struct Readline {
    pub output_device: OutputDevice,
    pub input_device: InputDevice,
    key_listener: KeyListener,
    prompt: Option<String>,
    newline_on_finalize: bool,
}

impl Readline {
    /// # Errors
    ///
    /// Returns [`ReadlineError::InvalidArgument`] if the prompt can't be shown on a
    /// single line.
    pub fn new(
        prompt: Option<&str>,
        options: &ReadOptions,
        output_device: OutputDevice,
        input_device: InputDevice,
    ) -> Result<Self, ReadlineError> {
        validate_prompt(prompt)?;
        Ok(Self {
            output_device,
            input_device,
            key_listener: KeyListener::new(options),
            prompt: prompt.map(ToOwned::to_owned),
            newline_on_finalize: options.newline_on_finalize,
        })
    }

    /// Run the read to completion.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::IO`] if writing to the output device or reading from the input
    ///   device fails.
    /// - [`ReadlineError::InputClosed`] if the input ends before the line is finalized.
    pub async fn readline(mut self) -> Result<ReadOutcome, ReadlineError> {
        if let Some(prompt) = &self.prompt {
            let mut term = self.output_device.lock();
            term.write_text(prompt)?;
            term.flush_output()?;
        }

        loop {
            let event = self.input_device.next().await?;
            let control_flow = readline_internal::apply_event_and_render(
                event,
                &mut self.key_listener,
                &mut *self.output_device.lock(),
                self.newline_on_finalize,
            )?;
            if let ControlFlow::Break(line) = control_flow {
                return Ok(ReadOutcome {
                    line,
                    history: self.key_listener.into_history().into_entries(),
                });
            }
        }
    }
}

pub mod readline_internal {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// Feed one terminal event to the listener and flush whatever it wrote. Events other
    /// than key presses (resize, mouse, focus, paste) and key releases are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::IO`] if writing to `term` fails.
    pub fn apply_event_and_render<O: LineOutput + ?Sized>(
        event: crossterm::event::Event,
        key_listener: &mut KeyListener,
        term: &mut O,
        newline_on_finalize: bool,
    ) -> Result<ControlFlow<String>, ReadlineError> {
        let crossterm::event::Event::Key(key_event) = event else {
            tracing::trace!(message = "non key event skipped", event = ?event);
            return Ok(ControlFlow::Continue(()));
        };
        let Some(keypress) = Keypress::from_key_event(key_event) else {
            return Ok(ControlFlow::Continue(()));
        };

        let outcome = key_listener.on_keypress(&keypress, term)?;
        if let KeyOutcome::Finalize(_) = &outcome
            && newline_on_finalize
        {
            term.write_text("\r\n")?;
        }
        term.flush_output()?;

        Ok(match outcome {
            KeyOutcome::Continue => ControlFlow::Continue(()),
            KeyOutcome::Finalize(line) => ControlFlow::Break(line),
        })
    }
}


#[cfg(test)]
mod test_readline {
    use std::time::Duration;

    use crossterm::event::{Event, KeyCode};
    use pretty_assertions::assert_eq;

    use super::{ReadOptions, Readline, ReadlineError, readline_test_fixtures::*};
    use crate::{InputDevice, InputDeviceExtMock, OutputDevice, OutputDeviceExt,
                gen_key_event, gen_typing_events};

    #[tokio::test]
    async fn test_readline_type_and_return() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let input_device = InputDevice::new_mock(get_input_vec());
        let readline =
            Readline::new(Some("> "), &ReadOptions::default(), output_device, input_device)
                .unwrap();

        let outcome = readline.readline().await.unwrap();

        assert_eq!(outcome.line, "foo");
        assert_eq!(outcome.history, vec!["foo"]);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string(), "> foo\r\n");
    }

    #[tokio::test]
    async fn test_readline_returns_updated_history_without_touching_seed() {
        let seed = vec!["cmd1".to_string(), "cmd2".to_string()];
        let options = ReadOptions::default()
            .with_history(seed.clone())
            .with_newline_on_finalize(false);

        let mut events = vec![gen_key_event(KeyCode::Up), gen_key_event(KeyCode::Up)];
        events.extend(gen_typing_events(" x"));
        events.push(gen_key_event(KeyCode::Enter));

        let (output_device, _) = OutputDevice::new_mock();
        let readline =
            Readline::new(None, &options, output_device, InputDevice::new_mock(events))
                .unwrap();
        let outcome = readline.readline().await.unwrap();

        assert_eq!(outcome.line, "cmd1 x");
        assert_eq!(outcome.history, vec!["cmd1", "cmd2", "cmd1 x"]);
        assert_eq!(options.history, seed);
    }

    #[tokio::test]
    async fn test_readline_autocomplete_with_tab() {
        let options = ReadOptions::default().with_autocomplete(["test1", "test2"]);
        let mut events = gen_typing_events("t");
        events.push(gen_key_event(KeyCode::Tab));
        events.push(gen_key_event(KeyCode::Esc));

        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let readline =
            Readline::new(None, &options, output_device, InputDevice::new_mock(events))
                .unwrap();
        let outcome = readline.readline().await.unwrap();

        assert_eq!(outcome.line, "test1");
        assert!(
            stdout_mock
                .get_copy_of_buffer_as_string_strip_ansi()
                .starts_with("test1")
        );
    }

    #[tokio::test]
    async fn test_readline_skips_releases_and_other_events() {
        let events = vec![
            Ok(Event::FocusGained),
            gen_key_event(KeyCode::Char('a')),
            release_of('a'),
            Ok(Event::Resize(80, 24)),
            gen_key_event(KeyCode::Enter),
        ];
        let (output_device, _) = OutputDevice::new_mock();
        let readline = Readline::new(
            None,
            &ReadOptions::default(),
            output_device,
            InputDevice::new_mock(events),
        )
        .unwrap();

        let outcome = readline.readline().await.unwrap();
        assert_eq!(outcome.line, "a");
    }

    #[tokio::test]
    async fn test_readline_with_slow_input() {
        let options = ReadOptions::default()
            .with_autocomplete(["status"])
            .with_newline_on_finalize(false);
        let mut events = gen_typing_events("st");
        events.push(gen_key_event(KeyCode::Tab));
        events.push(gen_key_event(KeyCode::Enter));

        let (output_device, _) = OutputDevice::new_mock();
        let input_device = InputDevice::new_mock_with_delay(events, Duration::from_millis(5));
        let readline = Readline::new(Some("$ "), &options, output_device, input_device).unwrap();

        let outcome = readline.readline().await.unwrap();
        assert_eq!(outcome.line, "status");
        assert_eq!(outcome.history, vec!["status"]);
    }

    #[tokio::test]
    async fn test_readline_input_closed() {
        let (output_device, _) = OutputDevice::new_mock();
        let readline = Readline::new(
            None,
            &ReadOptions::default(),
            output_device,
            InputDevice::new_mock(gen_typing_events("abc")),
        )
        .unwrap();

        let result = readline.readline().await;
        assert!(matches!(result, Err(ReadlineError::InputClosed)));
    }

    #[tokio::test]
    async fn test_readline_stream_error() {
        let (output_device, _) = OutputDevice::new_mock();
        let readline = Readline::new(
            None,
            &ReadOptions::default(),
            output_device,
            InputDevice::new_mock(vec![Err(std::io::Error::other("tty gone"))]),
        )
        .unwrap();

        let result = readline.readline().await;
        assert!(matches!(result, Err(ReadlineError::IO(_))));
    }

    #[test]
    fn test_readline_rejects_multi_line_prompt() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let result = Readline::new(
            Some("line one\nline two"),
            &ReadOptions::default(),
            output_device,
            InputDevice::new_mock(vec![]),
        );
        assert!(matches!(result, Err(ReadlineError::InvalidArgument { .. })));
        assert!(stdout_mock.get_copy_of_buffer().is_empty());
    }
}
