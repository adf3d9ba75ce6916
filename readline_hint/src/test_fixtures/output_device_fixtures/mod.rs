// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod output_device_ext;
pub mod recording_terminal;
pub mod stdout_mock;

// Re-export.
pub use output_device_ext::*;
pub use recording_terminal::*;
pub use stdout_mock::*;
