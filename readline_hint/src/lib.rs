// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words readline keypress

//! # Single line editor with history and inline completion hints
//!
//! This crate reads exactly one line of text from a terminal in raw mode. While the
//! user types, it keeps four pieces of state consistent on every key press:
//!
//! 1. The text buffer ([`InputBuffer`]).
//! 2. The cursor position inside that buffer ([`Cursor`]).
//! 3. A navigable list of previously submitted lines ([`History`]).
//! 4. A dim inline suggestion for the rest of the line ([`Hint`], owned by
//!    [`Completion`]).
//!
//! When the user presses <kbd>Enter</kbd>, <kbd>Esc</kbd>, or <kbd>Ctrl+C</kbd>, the
//! trimmed buffer is returned to the caller along with the updated history.
//!
//! # Architecture
//!
//! | Module            | Responsibility                                                |
//! |-------------------|---------------------------------------------------------------|
//! | [`line_editor`]   | Pure, synchronous editor state and the key dispatcher         |
//! | [`readline_impl`] | Async loop that feeds key events into the dispatcher          |
//! | [`terminal_io`]   | Input and output devices, TTY detection, raw mode             |
//! | [`tracing_logging`] | Optional `tracing` subscriber setup for binaries            |
//! | [`test_fixtures`] | Mocks for output devices and input event streams              |
//!
//! Every terminal side effect goes through three primitives defined by [`LineOutput`]:
//! write text, move the cursor by a relative delta, and clear to the end of the line.
//! Any [`std::io::Write`] implements [`LineOutput`] using [`crossterm`] commands, so the
//! editor can write to [`std::io::Stdout`] or to a [`StdoutMock`] in tests.
//!
//! # Example
//!
//! ```no_run
//! use r3bl_readline_hint::{ReadOptions, read_line};
//!
//! async fn ask() -> miette::Result<()> {
//!     let options = ReadOptions::default()
//!         .with_history(["git status", "git log"])
//!         .with_autocomplete(["git status", "git stash", "git log"]);
//!     let outcome = read_line(Some("> "), options).await?;
//!     println!("you typed: {}", outcome.line);
//!     Ok(())
//! }
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to use
// .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod line_editor;
pub mod readline_impl;
pub mod terminal_io;
pub mod test_fixtures;
pub mod tracing_logging;

// Re-export.
pub use line_editor::*;
pub use readline_impl::*;
pub use terminal_io::*;
pub use test_fixtures::*;
pub use tracing_logging::*;

/// Simple macro to create a [`Result`] with an [`Ok`] variant. It is just syntactic sugar
/// that helps having to write `Ok(())`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}
