// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::Stylize;

use crate::visual_len;

/// How a hint suffix is painted after the typed text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HintStyle {
    /// Dark grey foreground (SGR 90), reset to the default foreground afterwards.
    #[default]
    Dim,
    /// No styling at all. Useful for terminals or logs that don't render ANSI.
    Plain,
}

impl HintStyle {
    #[must_use]
    pub fn paint(self, raw: &str) -> String {
        match self {
            HintStyle::Dim => raw.dark_grey().to_string(),
            HintStyle::Plain => raw.to_owned(),
        }
    }
}

/// The suggested suffix currently shown after the caret. `raw` is what gets appended to
/// the buffer when accepted, `styled` is what gets written to the terminal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Hint {
    raw: String,
    styled: String,
    style: HintStyle,
}

impl Hint {
    #[must_use]
    pub fn new(style: HintStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    pub fn set_value(&mut self, raw: &str) {
        self.raw = raw.to_owned();
        self.styled = self.style.paint(raw);
    }

    pub fn clear(&mut self) {
        self.raw.clear();
        self.styled.clear();
    }

    #[must_use]
    pub fn is_active(&self) -> bool { !self.raw.is_empty() }

    #[must_use]
    pub fn raw(&self) -> &str { &self.raw }

    #[must_use]
    pub fn styled(&self) -> &str { &self.styled }

    /// Columns the styled hint occupies on screen.
    #[must_use]
    pub fn visual_len(&self) -> usize { visual_len(&self.styled) }

    /// The text to write when rendering: `prefix` (the character just typed, if the
    /// caller wants it written in the same call) followed by the styled hint.
    #[must_use]
    pub fn prefixed(&self, prefix: Option<&str>) -> String {
        match prefix {
            Some(prefix) => format!("{prefix}{}", self.styled),
            None => self.styled.clone(),
        }
    }
}
