// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt, io};

use crate::{Cursor, LineOutput, as_delta, grapheme_len, ok, pop_grapheme, split_at_grapheme};

/// Returned by the edit operations of [`InputBuffer`] to tell the caller whether it is
/// safe to look for a completion hint now. Hints only make sense when the caret sits at
/// the end of the text, so any edit in the middle of the line suppresses the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintSearch {
    Allowed,
    Suppressed,
}

/// Options for [`InputBuffer::replace`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOptions {
    /// Erase the currently rendered line before writing the new text.
    pub clear_output: bool,
}

/// Owns the text of the line being edited and its [`Cursor`].
///
/// Every operation writes only what changed on screen. A full repaint of the line only
/// happens for [`InputBuffer::replace`] with [`ReplaceOptions::clear_output`] and for a
/// backspace at the end of the line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    value: String,
    pub cursor: Cursor,
}

impl fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.value) }
}

impl InputBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.value }

    /// Length of the text in grapheme clusters.
    #[must_use]
    pub fn len(&self) -> usize { grapheme_len(&self.value) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.value.is_empty() }

    #[must_use]
    pub fn cursor_is_at_end(&self) -> bool { self.cursor.position >= self.len() }

    /// Insert `input` at the caret.
    ///
    /// - At the end of the line the text is appended but **nothing is written**. The
    ///   caller either renders it together with a hint or writes it itself, see
    ///   [`crate::Completion::find_hint`]. Returns [`HintSearch::Allowed`].
    /// - In the middle of the line, `input` and everything right of the caret is
    ///   rewritten, then the terminal caret is moved back over the remainder. Returns
    ///   [`HintSearch::Suppressed`].
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn append_char<O: LineOutput + ?Sized>(
        &mut self,
        input: &str,
        out: &mut O,
    ) -> io::Result<HintSearch> {
        if self.cursor_is_at_end() {
            self.value.push_str(input);
            // Combining marks can merge into the previous grapheme, so re-measure.
            self.cursor.position = self.len();
            return Ok(HintSearch::Allowed);
        }

        let (left, right) = split_at_grapheme(&self.value, self.cursor.position);
        let (left, right) = (format!("{left}{input}"), right.to_owned());
        self.cursor.position = grapheme_len(&left);
        self.value = format!("{left}{right}");

        out.write_text(&format!("{input}{right}"))?;
        out.move_cursor(-as_delta(grapheme_len(&right)), 0)?;

        Ok(HintSearch::Suppressed)
    }

    /// Delete the grapheme left of the caret.
    ///
    /// - At the end of the line: drop the last grapheme, move back to the start of the
    ///   text, clear, and write the shortened text. On an empty line this clears and
    ///   writes nothing. Returns [`HintSearch::Allowed`].
    /// - In the middle of the line (caret past column 0): step back one column, clear to
    ///   the end, rewrite the remainder, and move back over it. Returns
    ///   [`HintSearch::Suppressed`].
    /// - At column 0 of a non empty line: nothing happens.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn remove_char<O: LineOutput + ?Sized>(
        &mut self,
        out: &mut O,
    ) -> io::Result<HintSearch> {
        if self.cursor_is_at_end() {
            let rendered_len = self.cursor.position;
            pop_grapheme(&mut self.value);
            self.cursor.position = self.len();

            out.move_cursor(-as_delta(rendered_len), 0)?;
            out.clear_to_line_end()?;
            out.write_text(&self.value)?;

            return Ok(HintSearch::Allowed);
        }

        if self.cursor.position == 0 {
            return Ok(HintSearch::Suppressed);
        }

        let (left, right) = split_at_grapheme(&self.value, self.cursor.position);
        let mut left = left.to_owned();
        let right = right.to_owned();
        pop_grapheme(&mut left);
        self.cursor.position -= 1;
        self.value = format!("{left}{right}");

        out.move_cursor(-1, 0)?;
        out.clear_to_line_end()?;
        out.write_text(&right)?;
        out.move_cursor(-as_delta(grapheme_len(&right)), 0)?;

        Ok(HintSearch::Suppressed)
    }

    /// Swap the whole line for `input` (used for history recall). The caret ends up at
    /// the end of the new text.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn replace<O: LineOutput + ?Sized>(
        &mut self,
        input: &str,
        options: ReplaceOptions,
        out: &mut O,
    ) -> io::Result<()> {
        if options.clear_output {
            self.clear_rendered(out)?;
        }
        out.write_text(input)?;

        self.value = input.to_owned();
        self.cursor.position = self.len();
        self.cursor.sync_offset(self.cursor.position);

        ok!()
    }

    /// Append `input` at the end of the line and write it (used to accept a hint). If the
    /// caret was left of the end, it is first moved to the end so the screen and the
    /// buffer stay in sync.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn append<O: LineOutput + ?Sized>(
        &mut self,
        input: &str,
        out: &mut O,
    ) -> io::Result<()> {
        self.move_to_end(out)?;
        out.write_text(input)?;

        self.value.push_str(input);
        self.cursor.position = self.len();
        self.cursor.sync_offset(self.cursor.position);

        ok!()
    }

    /// Move the terminal caret and the cursor to the end of the text.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn move_to_end<O: LineOutput + ?Sized>(&mut self, out: &mut O) -> io::Result<()> {
        let len = self.len();
        if self.cursor.position < len {
            out.move_cursor(as_delta(len - self.cursor.position), 0)?;
        }
        self.cursor.position = len;
        ok!()
    }

    /// Move the terminal caret back to the start of the text and erase the line from
    /// there. The buffer itself is left untouched.
    fn clear_rendered<O: LineOutput + ?Sized>(&self, out: &mut O) -> io::Result<()> {
        out.move_cursor(-as_delta(self.cursor.position), 0)?;
        out.clear_to_line_end()
    }
}
