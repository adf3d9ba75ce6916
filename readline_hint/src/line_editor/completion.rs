// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io;

use unicode_segmentation::UnicodeSegmentation;

use crate::{Hint, HintStyle, LineOutput, as_delta, grapheme_len, ok, skip_graphemes,
            take_graphemes};

/// Threshold for what counts as a "local match". The input is compared with the
/// candidate's prefix of the same length, and the pair matches when their edit distance is
/// at most `max_cost`. The default `0` means the prefix must equal the input exactly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    pub max_cost: usize,
}

impl MatchPolicy {
    #[must_use]
    pub fn exact() -> Self { Self::default() }

    #[must_use]
    pub fn with_max_cost(max_cost: usize) -> Self { Self { max_cost } }
}

/// Whether [`Completion::find_hint`] wrote a hint to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintRender {
    /// A hint (and the caller supplied prefix, if any) was written. The caller must not
    /// write its character again.
    Rendered,
    /// Nothing was written. The caller still has to echo its own input.
    NotRendered,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FindHintOptions<'a> {
    /// Skip the first matching candidate. Used right after a hint was accepted, so the
    /// next suggestion is a different candidate sharing the same prefix.
    pub force_next_match: bool,
    /// Text to write in front of the hint in the same call, usually the character that
    /// was just typed at the end of the line.
    pub current_input: Option<&'a str>,
}

/// Levenshtein distance counted in grapheme clusters.
#[must_use]
pub fn edit_distance(lhs: &str, rhs: &str) -> usize {
    let lhs: Vec<&str> = lhs.graphemes(true).collect();
    let rhs: Vec<&str> = rhs.graphemes(true).collect();
    strsim::generic_levenshtein(&lhs, &rhs)
}

/// Scan `candidates` in order for the first local match of `input` and return the part
/// of the candidate after the input's length.
///
/// - The suffix can be empty (the candidate is already fully typed). That still ends the
///   scan, and the caller treats it as "no hint".
/// - With `force_next_match` the first match is skipped.
#[must_use]
pub fn local_match_of<'a>(
    candidates: &'a [String],
    input: &str,
    force_next_match: bool,
    policy: MatchPolicy,
) -> Option<&'a str> {
    let input_len = grapheme_len(input);
    let mut is_first_match = true;

    for candidate in candidates {
        let cost = edit_distance(input, take_graphemes(candidate, input_len));
        if cost > policy.max_cost {
            continue;
        }
        if force_next_match && is_first_match {
            is_first_match = false;
            continue;
        }
        return Some(skip_graphemes(candidate, input_len));
    }

    None
}

/// Fixed candidate list for one read, and the [`Hint`] it produces.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Completion {
    candidates: Vec<String>,
    policy: MatchPolicy,
    pub hint: Hint,
}

impl Completion {
    pub fn new(
        candidates: impl IntoIterator<Item = impl Into<String>>,
        policy: MatchPolicy,
        style: HintStyle,
    ) -> Self {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
            policy,
            hint: Hint::new(style),
        }
    }

    #[must_use]
    pub fn candidates(&self) -> &[String] { &self.candidates }

    /// Look for a hint for `input` (the whole line so far) and render it.
    ///
    /// When a non empty suffix is found, any previous hint is cleared, the new one is
    /// written after [`FindHintOptions::current_input`], and the terminal caret is moved
    /// back over the styled hint so it sits right after the real text.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn find_hint<O: LineOutput + ?Sized>(
        &mut self,
        input: &str,
        options: FindHintOptions<'_>,
        out: &mut O,
    ) -> io::Result<HintRender> {
        if self.candidates.is_empty() {
            return Ok(HintRender::NotRendered);
        }

        let found = local_match_of(
            &self.candidates,
            input,
            options.force_next_match,
            self.policy,
        )
        .map(str::to_owned);

        self.clear_hint(false, out)?;

        match found {
            Some(suffix) if !suffix.is_empty() => {
                self.hint.set_value(&suffix);
                out.write_text(&self.hint.prefixed(options.current_input))?;
                out.move_cursor(-as_delta(self.hint.visual_len()), 0)?;
                tracing::debug!(
                    message = "hint rendered",
                    force_next_match = options.force_next_match,
                    hint_len = self.hint.visual_len()
                );
                Ok(HintRender::Rendered)
            }
            _ => Ok(HintRender::NotRendered),
        }
    }

    /// Erase the rendered hint (everything right of the caret) and drop it. With `force`
    /// the line tail is erased even when no hint is active.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn clear_hint<O: LineOutput + ?Sized>(
        &mut self,
        force: bool,
        out: &mut O,
    ) -> io::Result<()> {
        if self.hint.is_active() {
            out.clear_to_line_end()?;
            self.hint.clear();
            tracing::debug!(message = "hint cleared");
        } else if force {
            out.clear_to_line_end()?;
        }
        ok!()
    }
}
