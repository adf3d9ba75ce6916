// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use futures_util::FutureExt as _;

use crate::{InputDevice, OutputDevice, RawModeGuard, ReadOptions, ReadOutcome, Readline,
            ReadlineError, TTYResult, is_fully_interactive_terminal, ok, validate_prompt};

/// Read one line from the terminal.
///
/// 1. The arguments are checked before anything touches the terminal. A prompt that
///    can't be shown on one line is [`ReadlineError::InvalidArgument`], and a stdin or
///    stdout that isn't a TTY is [`ReadlineError::NotInteractive`].
/// 2. Raw mode is enabled, `prompt` (if any) is written verbatim, and key presses are
///    processed until <kbd>Enter</kbd>, <kbd>Esc</kbd>, or <kbd>Ctrl+C</kbd>.
/// 3. Raw mode is disabled again on every exit path, including errors.
///
/// The returned [`ReadOutcome::history`] is `options.history` with the submitted line
/// pushed, ready to be passed to the next call. There is no timeout and no way to cancel
/// a read from inside. To abandon it, drop the future.
///
/// Don't run two reads at the same time. Both would receive every key press.
///
/// # Errors
///
/// See [`ReadlineError`].
pub async fn read_line(
    prompt: Option<&str>,
    options: ReadOptions,
) -> miette::Result<ReadOutcome> {
    validate_prompt(prompt)?;
    if let TTYResult::IsNotInteractive = is_fully_interactive_terminal() {
        return Err(ReadlineError::NotInteractive.into());
    }

    let readline = Readline::new(
        prompt,
        &options,
        OutputDevice::new_stdout(),
        InputDevice::new_event_stream(),
    )?;

    let _raw_mode_guard = RawModeGuard::new().map_err(ReadlineError::from)?;
    tracing::debug!(
        message = "read_line start",
        history_len = options.history.len(),
        candidates_len = options.autocomplete.len()
    );

    let outcome = readline.readline().fuse().await?;
    ok!(outcome)
}
