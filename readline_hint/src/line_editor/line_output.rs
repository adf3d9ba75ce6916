// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

use crossterm::{QueueableCommand,
                cursor::{MoveDown, MoveLeft, MoveRight, MoveUp},
                style::Print,
                terminal::{Clear, ClearType}};

use crate::ok;

/// The only terminal operations the line editor needs. Everything the editor shows on
/// screen is expressed as a sequence of these calls, relative to wherever the terminal
/// caret currently is.
///
/// There is a blanket implementation for every [`Write`], which queues [`crossterm`]
/// commands. Nothing is flushed until [`LineOutput::flush_output`] is called, which is
/// done once per key press by [`crate::Readline`].
pub trait LineOutput {
    /// Write `text` at the caret. Empty text is allowed and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Move the caret by a relative number of columns and rows. Negative values move
    /// left / up. A zero delta on an axis emits nothing for that axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn move_cursor(&mut self, delta_cols: isize, delta_rows: isize) -> io::Result<()>;

    /// Erase everything from the caret to the end of the current line.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn clear_to_line_end(&mut self) -> io::Result<()>;

    /// Push any queued output to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn flush_output(&mut self) -> io::Result<()>;
}

/// Terminals can't move by more than [`u16::MAX`] cells in one command, clamp to that.
fn as_cells(delta: isize) -> u16 { u16::try_from(delta.unsigned_abs()).unwrap_or(u16::MAX) }

impl<W: Write + ?Sized> LineOutput for W {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return ok!();
        }
        self.queue(Print(text))?;
        ok!()
    }

    fn move_cursor(&mut self, delta_cols: isize, delta_rows: isize) -> io::Result<()> {
        // CSI with a count of 0 is treated as 1 by terminals, so skip zero deltas.
        match delta_cols.signum() {
            -1 => {
                self.queue(MoveLeft(as_cells(delta_cols)))?;
            }
            1 => {
                self.queue(MoveRight(as_cells(delta_cols)))?;
            }
            _ => {}
        }
        match delta_rows.signum() {
            -1 => {
                self.queue(MoveUp(as_cells(delta_rows)))?;
            }
            1 => {
                self.queue(MoveDown(as_cells(delta_rows)))?;
            }
            _ => {}
        }
        ok!()
    }

    fn clear_to_line_end(&mut self) -> io::Result<()> {
        self.queue(Clear(ClearType::UntilNewLine))?;
        ok!()
    }

    fn flush_output(&mut self) -> io::Result<()> { self.flush() }
}
