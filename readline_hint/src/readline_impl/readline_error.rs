// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

/// Errors from one read.
///
/// | Variant               | Raised                                  | When                                          |
/// | :-------------------- | :-------------------------------------- | :-------------------------------------------- |
/// | [`InvalidArgument`]   | before any key is read                  | the prompt can't be shown on a single line    |
/// | [`NotInteractive`]    | before any key is read                  | stdin or stdout is not a terminal             |
/// | [`IO`]                | while editing                           | writing to the output device failed           |
/// | [`InputClosed`]       | while editing                           | the key event stream ended before a finalize  |
///
/// None of these are produced by the editing logic itself. Every key press is absorbed
/// by some handler of [`crate::KeyListener`].
///
/// [`InvalidArgument`]: Self::InvalidArgument
/// [`NotInteractive`]: Self::NotInteractive
/// [`IO`]: Self::IO
/// [`InputClosed`]: Self::InputClosed
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ReadlineError {
    #[error("Invalid prompt: {reason}")]
    #[diagnostic(
        code(r3bl_readline_hint::invalid_argument),
        help("The prompt is written verbatim on the line being edited, so it must not contain line breaks or control characters")
    )]
    InvalidArgument { reason: String },

    #[error("Current stdin and stdout must be a TTY")]
    #[diagnostic(
        code(r3bl_readline_hint::not_interactive),
        help("Run this program in an interactive terminal, not with piped input or output")
    )]
    NotInteractive,

    #[error("Terminal I/O error: {0}")]
    #[diagnostic(code(r3bl_readline_hint::io))]
    IO(#[from] io::Error),

    #[error("Input stream closed before the line was finalized")]
    #[diagnostic(code(r3bl_readline_hint::input_closed))]
    InputClosed,
}

/// Reject prompts that would break the single line layout. A prompt with a line break
/// would put the editable text on a different row than where the prompt started, and
/// control characters would move the caret in ways the editor can't track.
///
/// # Errors
///
/// Returns [`ReadlineError::InvalidArgument`] naming the offending character.
pub fn validate_prompt(prompt: Option<&str>) -> Result<(), ReadlineError> {
    let Some(prompt) = prompt else {
        return Ok(());
    };

    let Some(ch) = prompt
        .chars()
        .find(|ch| ch.is_control() && *ch != '\x1b')
    else {
        return Ok(());
    };

    let reason = match ch {
        '\n' | '\r' => "it contains a line break".to_string(),
        other => format!("it contains the control character {other:?}"),
    };
    Err(ReadlineError::InvalidArgument { reason })
}
