// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use crate::{LineOutput, ok};

/// One call made on a [`RecordingTerminal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermOp {
    Write(String),
    MoveCursor(isize, isize),
    ClearToLineEnd,
    Flush,
}

/// A [`LineOutput`] that records every primitive instead of producing bytes. Unlike
/// [`crate::StdoutMock`], zero length moves and empty writes are kept, so tests can assert
/// the exact deltas an operation issued.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingTerminal {
    pub ops: Vec<TermOp>,
}

impl LineOutput for RecordingTerminal {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.ops.push(TermOp::Write(text.to_owned()));
        ok!()
    }

    fn move_cursor(&mut self, delta_cols: isize, delta_rows: isize) -> io::Result<()> {
        self.ops.push(TermOp::MoveCursor(delta_cols, delta_rows));
        ok!()
    }

    fn clear_to_line_end(&mut self) -> io::Result<()> {
        self.ops.push(TermOp::ClearToLineEnd);
        ok!()
    }

    fn flush_output(&mut self) -> io::Result<()> {
        self.ops.push(TermOp::Flush);
        ok!()
    }
}
