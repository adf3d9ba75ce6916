// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Synchronous line editing state for one read.
//!
//! Nothing in this module awaits or owns a terminal. Each operation takes the output as
//! a `&mut O where O: LineOutput` argument and issues the minimal set of terminal
//! primitives needed to keep the screen in sync with the state.
//!
//! | Module          | Responsibility                                                |
//! |-----------------|---------------------------------------------------------------|
//! | `line_output`   | [`LineOutput`] primitives, blanket impl for [`std::io::Write`]  |
//! | `grapheme`      | Grapheme cluster counting and slicing for cursor math         |
//! | `cursor`        | [`Cursor`] column tracking and left / right bounds            |
//! | `input_buffer`  | [`InputBuffer`] insert, delete, replace with delta repaint    |
//! | `history`       | [`History`] entries, navigation index, preserved draft       |
//! | `hint`          | [`Hint`] raw and styled suggestion suffix                     |
//! | `completion`    | [`Completion`] fuzzy prefix lookup against candidates         |
//! | `keypress`      | [`Keypress`] shape and normalization into [`KeyAction`]       |
//! | `key_listener`  | [`KeyListener`] flat dispatcher over [`KeyAction`]            |

// Attach sources.
pub mod completion;
pub mod cursor;
pub mod grapheme;
pub mod hint;
pub mod history;
pub mod input_buffer;
pub mod key_listener;
pub mod keypress;
pub mod line_output;

// Re-export.
pub use completion::*;
pub use cursor::*;
pub use grapheme::*;
pub use hint::*;
pub use history::*;
pub use input_buffer::*;
pub use key_listener::*;
pub use keypress::*;
pub use line_output::*;
