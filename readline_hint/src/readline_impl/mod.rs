// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The async side of a read: [`read_line()`] checks preconditions and manages raw mode,
//! [`Readline`] runs the event loop over injected devices.

// Attach sources.
pub mod read_options;
pub mod readline;
pub mod readline_api;
pub mod readline_error;

// Re-export.
pub use read_options::*;
pub use readline::*;
pub use readline_api::*;
pub use readline_error::*;
