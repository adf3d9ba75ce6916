// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{HintStyle, MatchPolicy};

/// Configuration for one read.
///
/// `history` is a seed. It is copied into the editor and never changed in place. The
/// list as it stands after the read (with the submitted line pushed) is handed back in
/// [`ReadOutcome::history`], so the caller decides whether to keep it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    pub history: Vec<String>,
    pub autocomplete: Vec<String>,
    pub match_policy: MatchPolicy,
    pub hint_style: HintStyle,
    /// Write `"\r\n"` after the line is finalized, so subsequent output starts on a fresh
    /// row.
    pub newline_on_finalize: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            history: vec![],
            autocomplete: vec![],
            match_policy: MatchPolicy::default(),
            hint_style: HintStyle::default(),
            newline_on_finalize: true,
        }
    }
}

impl ReadOptions {
    #[must_use]
    pub fn with_history(mut self, history: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.history = history.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_autocomplete(
        mut self,
        autocomplete: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.autocomplete = autocomplete.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_match_policy(mut self, match_policy: MatchPolicy) -> Self {
        self.match_policy = match_policy;
        self
    }

    #[must_use]
    pub fn with_hint_style(mut self, hint_style: HintStyle) -> Self {
        self.hint_style = hint_style;
        self
    }

    #[must_use]
    pub fn with_newline_on_finalize(mut self, newline_on_finalize: bool) -> Self {
        self.newline_on_finalize = newline_on_finalize;
        self
    }
}

/// Result of a successful read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOutcome {
    /// The trimmed line. Empty if the user finalized without typing anything.
    pub line: String,
    /// The history seed, normalized, with `line` appended if it was new and non empty.
    pub history: Vec<String>,
}
