// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use crate::LineOutput;

/// Logical caret position inside the line, in grapheme clusters.
///
/// - `position` is where the caret is, `0` is before the first grapheme.
/// - `offset` is the length of the line as of the last sync. [`crate::KeyListener`]
///   refreshes it before every key dispatch, so [`Cursor::right`] is always bounded by
///   the current line length.
///
/// The terminal caret column (relative to the start of the editable text) always equals
/// `position`. Both moves keep it that way by emitting a one column delta.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub position: usize,
    pub offset: usize,
}

impl Cursor {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Refresh the right bound from the buffer's current length.
    pub fn sync_offset(&mut self, line_len: usize) { self.offset = line_len; }

    /// Move one column left. Returns `false` (and emits nothing) at column 0.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn left<O: LineOutput + ?Sized>(&mut self, out: &mut O) -> io::Result<bool> {
        if self.position == 0 {
            return Ok(false);
        }
        out.move_cursor(-1, 0)?;
        self.position -= 1;
        Ok(true)
    }

    /// Move one column right. Returns `false` (and emits nothing) at the end of the line.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn right<O: LineOutput + ?Sized>(&mut self, out: &mut O) -> io::Result<bool> {
        if self.position >= self.offset {
            return Ok(false);
        }
        out.move_cursor(1, 0)?;
        self.position += 1;
        Ok(true)
    }
}
