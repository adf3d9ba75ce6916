// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Devices the async read loop talks to. Production code uses stdout and crossterm's
//! [`EventStream`](crossterm::event::EventStream). Tests swap in
//! [`crate::StdoutMock`] and [`crate::gen_input_stream`].

// Private modules (hide internal structure).
mod input_device;
mod output_device;
mod raw_mode;
mod term;
mod terminal_io_type_aliases;

// Re-exports for flat public API.
pub use input_device::*;
pub use output_device::*;
pub use raw_mode::*;
pub use term::*;
pub use terminal_io_type_aliases::*;
