// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Ordered list of previously submitted lines, plus a navigation index and the draft that
/// was being typed before the user started browsing.
///
/// - `index == len()` means no entry is selected and [`History::current`] is the draft.
/// - Entries are trimmed, non empty, and unique unless [`History::push`] is forced.
/// - Navigation only moves `index` and captures the draft. It never edits entries.
///
/// The seed passed to [`History::new`] is copied, so the caller's list is never changed.
/// Use [`History::into_entries`] to get the updated list back.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
    draft: Option<String>,
    /// Set when the last move started from the draft slot, so that [`History::keep`]
    /// knows the text on screen is the user's own and not a recalled entry.
    left_draft: bool,
}

impl History {
    /// Build from a seed list, normalizing it the same way [`History::push`] would.
    pub fn new(seed: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut it = Self::default();
        for entry in seed {
            it.push(entry.as_ref(), false);
        }
        it
    }

    /// Trim `command` and append it if it is non empty and either `no_duplicate_check`
    /// is set or it is not already present. Returns the trimmed text either way.
    ///
    /// Pushing resets navigation: the index goes back to the draft slot and the draft
    /// is dropped.
    pub fn push(&mut self, command: &str, no_duplicate_check: bool) -> String {
        let trimmed = command.trim();

        if !trimmed.is_empty()
            && (no_duplicate_check || !self.entries.iter().any(|it| it == trimmed))
        {
            self.entries.push(trimmed.to_owned());
        }

        self.index = self.entries.len();
        self.draft = None;
        self.left_draft = false;

        trimmed.to_owned()
    }

    /// Stash `command` as the draft if there is none yet, or if the user just moved
    /// away from the draft slot (so the text on screen is what they typed). Returns
    /// whether a draft was captured.
    pub fn keep(&mut self, command: &str) -> bool {
        if self.draft.is_some() && !self.left_draft {
            return false;
        }
        self.draft = Some(command.trim().to_owned());
        self.left_draft = false;
        true
    }

    /// Entry at the navigation index, or the draft (empty if none) in the draft slot.
    #[must_use]
    pub fn current(&self) -> &str {
        match self.entries.get(self.index) {
            Some(entry) => entry,
            None => self.draft.as_deref().unwrap_or_default(),
        }
    }

    /// Move toward older entries. Returns `false` at the oldest entry.
    pub fn up(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.left_draft = self.index == self.entries.len();
        self.index -= 1;
        tracing::debug!(message = "history up", index = self.index);
        true
    }

    /// Move toward newer entries and finally the draft slot. Returns `false` when already
    /// in the draft slot.
    pub fn down(&mut self) -> bool {
        if self.index >= self.entries.len() {
            return false;
        }
        self.left_draft = false;
        self.index += 1;
        tracing::debug!(message = "history down", index = self.index);
        true
    }

    #[must_use]
    pub fn index(&self) -> usize { self.index }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn entries(&self) -> &[String] { &self.entries }

    #[must_use]
    pub fn into_entries(self) -> Vec<String> { self.entries }
}
