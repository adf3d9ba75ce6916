// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Completion, FindHintOptions, HintRender, HintSearch, History, InputBuffer,
            KeyAction, Keypress, LineOutput, ReadOptions, ReplaceOptions, ReadlineError, ok};

/// What the caller should do after a key press was dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Keep feeding key presses.
    Continue,
    /// The read is over. Carries the trimmed line. Further key presses are ignored.
    Finalize(String),
}

/// Owns all the editor state for one read and dispatches each [`Keypress`] to exactly one
/// handler. Every handler is a no-op when its precondition doesn't hold (left at column
/// 0, up at the oldest entry, and so on), so no key press is ever an error. The only
/// errors are I/O failures from the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyListener {
    history: History,
    completion: Completion,
    input_buffer: InputBuffer,
    finalized: bool,
}

impl KeyListener {
    #[must_use]
    pub fn new(options: &ReadOptions) -> Self {
        Self {
            history: History::new(&options.history),
            completion: Completion::new(
                options.autocomplete.iter().cloned(),
                options.match_policy,
                options.hint_style,
            ),
            input_buffer: InputBuffer::new(),
            finalized: false,
        }
    }

    #[must_use]
    pub fn history(&self) -> &History { &self.history }

    #[must_use]
    pub fn into_history(self) -> History { self.history }

    #[must_use]
    pub fn input_buffer(&self) -> &InputBuffer { &self.input_buffer }

    #[must_use]
    pub fn completion(&self) -> &Completion { &self.completion }

    #[must_use]
    pub fn is_finalized(&self) -> bool { self.finalized }

    /// Wrap this listener in a closure that calls `on_finalize` with the trimmed line
    /// exactly once, when a finalizing key is pressed.
    pub fn create_listener<O, F>(
        mut self,
        mut on_finalize: F,
    ) -> impl FnMut(&Keypress, &mut O) -> Result<(), ReadlineError>
    where
        O: LineOutput + ?Sized,
        F: FnMut(String),
    {
        move |keypress, out| {
            if let KeyOutcome::Finalize(line) = self.on_keypress(keypress, out)? {
                on_finalize(line);
            }
            ok!()
        }
    }

    /// Dispatch one key press.
    ///
    /// # Errors
    ///
    /// Returns [`ReadlineError::IO`] if writing to `out` fails.
    pub fn on_keypress<O: LineOutput + ?Sized>(
        &mut self,
        keypress: &Keypress,
        out: &mut O,
    ) -> Result<KeyOutcome, ReadlineError> {
        if self.finalized {
            return ok!(KeyOutcome::Continue);
        }

        self.input_buffer.cursor.sync_offset(self.input_buffer.len());

        let action = keypress.normalize();
        tracing::trace!(message = "key normalized", keypress = ?keypress, action = ?action);

        match action {
            KeyAction::CtrlC | KeyAction::Return | KeyAction::Escape => {
                return self.finalize(out).map(KeyOutcome::Finalize);
            }
            KeyAction::Left => {
                self.input_buffer.cursor.left(out)?;
            }
            KeyAction::Right => {
                if !self.input_buffer.cursor.right(out)? {
                    self.complete(out)?;
                }
            }
            KeyAction::Tab => self.complete(out)?,
            KeyAction::Up => self.historize(History::up, out)?,
            KeyAction::Down => self.historize(History::down, out)?,
            KeyAction::Backspace => self.backspace(out)?,
            KeyAction::Insert(Some(input)) if !input.is_empty() => self.insert(&input, out)?,
            KeyAction::Insert(_) => {
                tracing::debug!(message = "key ignored", name = %keypress.name);
            }
        }

        ok!(KeyOutcome::Continue)
    }

    fn finalize<O: LineOutput + ?Sized>(&mut self, out: &mut O) -> Result<String, ReadlineError> {
        self.input_buffer.move_to_end(out)?;
        self.completion.clear_hint(false, out)?;
        let line = self.history.push(self.input_buffer.as_str(), false);
        self.finalized = true;
        tracing::debug!(message = "finalize", line_len = line.len());
        ok!(line)
    }

    /// Accept the active hint (if any), then look for the next candidate that shares the
    /// now longer prefix.
    fn complete<O: LineOutput + ?Sized>(&mut self, out: &mut O) -> Result<(), ReadlineError> {
        if !self.completion.hint.is_active() {
            return ok!();
        }

        let suffix = self.completion.hint.raw().to_owned();
        self.input_buffer.append(&suffix, out)?;
        self.completion.clear_hint(false, out)?;
        tracing::debug!(message = "hint accepted", cursor = self.input_buffer.cursor.position);

        self.completion.find_hint(
            self.input_buffer.as_str(),
            FindHintOptions {
                force_next_match: true,
                current_input: None,
            },
            out,
        )?;
        ok!()
    }

    fn historize<O: LineOutput + ?Sized>(
        &mut self,
        navigate: fn(&mut History) -> bool,
        out: &mut O,
    ) -> Result<(), ReadlineError> {
        let current_text = self.input_buffer.as_str().to_owned();

        if self.history.is_empty() {
            self.history.keep(&current_text);
            return ok!();
        }

        if !navigate(&mut self.history) {
            return ok!();
        }

        self.completion.clear_hint(false, out)?;
        self.history.keep(&current_text);

        let recalled = self.history.current().to_owned();
        self.input_buffer
            .replace(&recalled, ReplaceOptions { clear_output: true }, out)?;
        ok!()
    }

    fn backspace<O: LineOutput + ?Sized>(&mut self, out: &mut O) -> Result<(), ReadlineError> {
        // Nothing left of the caret to delete, and nothing would repaint the text.
        if self.input_buffer.cursor.position == 0 && !self.input_buffer.is_empty() {
            return ok!();
        }

        self.completion.clear_hint(false, out)?;

        if self.input_buffer.remove_char(out)? == HintSearch::Allowed {
            self.completion.find_hint(
                self.input_buffer.as_str(),
                FindHintOptions::default(),
                out,
            )?;
        }
        ok!()
    }

    fn insert<O: LineOutput + ?Sized>(
        &mut self,
        input: &str,
        out: &mut O,
    ) -> Result<(), ReadlineError> {
        // A hint is only ever rendered after the end of the text. Typing mid-line has
        // to wipe it before the remainder is rewritten.
        if !self.input_buffer.cursor_is_at_end() {
            self.completion.clear_hint(true, out)?;
        }

        if self.input_buffer.append_char(input, out)? == HintSearch::Suppressed {
            return ok!();
        }

        let rendered = self.completion.find_hint(
            self.input_buffer.as_str(),
            FindHintOptions {
                force_next_match: false,
                current_input: Some(input),
            },
            out,
        )?;
        if rendered == HintRender::NotRendered {
            out.write_text(input)?;
        }
        ok!()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HintStyle, RecordingTerminal, StdoutMock, TermOp};
    use pretty_assertions::assert_eq;

    fn plain_options() -> ReadOptions {
        ReadOptions::default().with_hint_style(HintStyle::Plain)
    }

    fn type_text<O: LineOutput + ?Sized>(listener: &mut KeyListener, text: &str, out: &mut O) {
        for ch in text.chars() {
            let outcome = listener.on_keypress(&Keypress::char(ch), out).unwrap();
            assert_eq!(outcome, KeyOutcome::Continue);
        }
    }

    fn press<O: LineOutput + ?Sized>(
        listener: &mut KeyListener,
        name: &str,
        out: &mut O,
    ) -> KeyOutcome {
        listener.on_keypress(&Keypress::named(name), out).unwrap()
    }

    #[test]
    fn test_type_and_return() {
        let mut term = RecordingTerminal::default();
        let mut listener = KeyListener::new(&plain_options());

        type_text(&mut listener, "foo", &mut term);
        let outcome = press(&mut listener, "return", &mut term);

        assert_eq!(outcome, KeyOutcome::Finalize("foo".into()));
        assert_eq!(listener.history().entries(), ["foo"]);
        assert!(listener.is_finalized());
    }

    #[test]
    fn test_ctrl_c_and_escape_finalize_trimmed() {
        let mut term = RecordingTerminal::default();

        let mut listener = KeyListener::new(&plain_options());
        type_text(&mut listener, " hi ", &mut term);
        let outcome = listener.on_keypress(&Keypress::ctrl("c"), &mut term).unwrap();
        assert_eq!(outcome, KeyOutcome::Finalize("hi".into()));

        let mut listener = KeyListener::new(&plain_options());
        let outcome = press(&mut listener, "escape", &mut term);
        assert_eq!(outcome, KeyOutcome::Finalize(String::new()));
        assert!(listener.history().is_empty());
    }

    #[test]
    fn test_keys_after_finalize_are_ignored() {
        let mut term = RecordingTerminal::default();
        let mut listener = KeyListener::new(&plain_options());
        press(&mut listener, "return", &mut term);
        term.ops.clear();

        type_text(&mut listener, "x", &mut term);
        assert_eq!(press(&mut listener, "return", &mut term), KeyOutcome::Continue);
        assert!(term.ops.is_empty());
        assert_eq!(listener.input_buffer().as_str(), "");
    }

    #[test]
    fn test_typing_renders_hint_and_tab_accepts() {
        let mut term = RecordingTerminal::default();
        let options = plain_options().with_autocomplete(["test1", "test2"]);
        let mut listener = KeyListener::new(&options);

        type_text(&mut listener, "t", &mut term);
        assert_eq!(listener.completion().hint.raw(), "est1");
        assert_eq!(
            term.ops,
            vec![TermOp::Write("test1".into()), TermOp::MoveCursor(-4, 0)]
        );
        term.ops.clear();

        press(&mut listener, "tab", &mut term);
        assert_eq!(listener.input_buffer().as_str(), "test1");
        assert_eq!(listener.input_buffer().cursor.position, 5);
        // "test1" is a full match and nothing else shares that prefix.
        assert!(!listener.completion().hint.is_active());
        assert_eq!(
            term.ops,
            vec![
                TermOp::Write("est1".into()),
                TermOp::ClearToLineEnd,
            ]
        );
    }

    #[test]
    fn test_accept_then_cycle_to_next_candidate() {
        let mut term = RecordingTerminal::default();
        let options =
            plain_options().with_autocomplete(["hello", "hello world", "hello everyone"]);
        let mut listener = KeyListener::new(&options);

        type_text(&mut listener, "hel", &mut term);
        assert_eq!(listener.completion().hint.raw(), "lo");

        press(&mut listener, "right", &mut term);
        assert_eq!(listener.input_buffer().as_str(), "hello");
        // The first match ("hello") is skipped, the next one is suggested.
        assert_eq!(listener.completion().hint.raw(), " world");

        press(&mut listener, "tab", &mut term);
        assert_eq!(listener.input_buffer().as_str(), "hello world");
        let outcome = press(&mut listener, "return", &mut term);
        assert_eq!(outcome, KeyOutcome::Finalize("hello world".into()));
    }

    #[test]
    fn test_tab_without_hint_is_noop() {
        let mut term = RecordingTerminal::default();
        let mut listener = KeyListener::new(&plain_options());
        type_text(&mut listener, "ab", &mut term);
        term.ops.clear();

        press(&mut listener, "tab", &mut term);
        assert!(term.ops.is_empty());
        assert_eq!(listener.input_buffer().as_str(), "ab");
    }

    #[test]
    fn test_right_moves_before_accepting() {
        let mut term = RecordingTerminal::default();
        let mut listener = KeyListener::new(&plain_options());
        type_text(&mut listener, "ab", &mut term);
        press(&mut listener, "left", &mut term);
        press(&mut listener, "left", &mut term);
        press(&mut listener, "left", &mut term);
        assert_eq!(listener.input_buffer().cursor.position, 0);

        term.ops.clear();
        press(&mut listener, "right", &mut term);
        assert_eq!(listener.input_buffer().cursor.position, 1);
        assert_eq!(term.ops, vec![TermOp::MoveCursor(1, 0)]);
    }

    #[test]
    fn test_insert_mid_line_clears_tail_and_skips_hint() {
        let mut term = RecordingTerminal::default();
        let options = plain_options().with_autocomplete(["abc"]);
        let mut listener = KeyListener::new(&options);
        type_text(&mut listener, "ac", &mut term);
        press(&mut listener, "left", &mut term);
        term.ops.clear();

        type_text(&mut listener, "b", &mut term);

        assert_eq!(listener.input_buffer().as_str(), "abc");
        assert_eq!(listener.input_buffer().cursor.position, 2);
        assert!(!listener.completion().hint.is_active());
        assert_eq!(
            term.ops,
            vec![
                TermOp::ClearToLineEnd,
                TermOp::Write("bc".into()),
                TermOp::MoveCursor(-1, 0),
            ]
        );
    }

    #[test]
    fn test_backspace_searches_again() {
        let mut term = RecordingTerminal::default();
        let options = plain_options().with_autocomplete(["foo bar"]);
        let mut listener = KeyListener::new(&options);
        type_text(&mut listener, "fx", &mut term);
        assert!(!listener.completion().hint.is_active());
        term.ops.clear();

        press(&mut listener, "backspace", &mut term);

        assert_eq!(listener.input_buffer().as_str(), "f");
        assert_eq!(listener.completion().hint.raw(), "oo bar");
        assert_eq!(
            term.ops,
            vec![
                TermOp::MoveCursor(-2, 0),
                TermOp::ClearToLineEnd,
                TermOp::Write("f".into()),
                TermOp::Write("oo bar".into()),
                TermOp::MoveCursor(-6, 0),
            ]
        );
    }

    #[test]
    fn test_backspace_at_line_start_keeps_text_and_hint_on_screen() {
        let mut term = RecordingTerminal::default();
        let options = plain_options().with_autocomplete(["hello world"]);
        let mut listener = KeyListener::new(&options);
        type_text(&mut listener, "h", &mut term);
        press(&mut listener, "left", &mut term);
        assert_eq!(listener.input_buffer().cursor.position, 0);
        term.ops.clear();

        press(&mut listener, "backspace", &mut term);

        assert_eq!(listener.input_buffer().as_str(), "h");
        assert_eq!(listener.input_buffer().cursor.position, 0);
        assert_eq!(listener.completion().hint.raw(), "ello world");
        assert_eq!(term.ops, vec![]);

        // Submitting the line still clears the hint first.
        let outcome = press(&mut listener, "return", &mut term);
        assert_eq!(outcome, KeyOutcome::Finalize("h".into()));
    }

    #[test]
    fn test_history_navigation_round_trip() {
        let mut term = RecordingTerminal::default();
        let options = plain_options().with_history(["cmd1", "cmd2"]);
        let mut listener = KeyListener::new(&options);
        type_text(&mut listener, "dra", &mut term);

        press(&mut listener, "up", &mut term);
        assert_eq!(listener.input_buffer().as_str(), "cmd2");
        press(&mut listener, "up", &mut term);
        assert_eq!(listener.input_buffer().as_str(), "cmd1");
        press(&mut listener, "up", &mut term);
        assert_eq!(listener.input_buffer().as_str(), "cmd1");

        press(&mut listener, "down", &mut term);
        assert_eq!(listener.input_buffer().as_str(), "cmd2");
        press(&mut listener, "down", &mut term);
        assert_eq!(listener.input_buffer().as_str(), "dra");
        assert_eq!(listener.input_buffer().cursor.position, 3);
        press(&mut listener, "down", &mut term);
        assert_eq!(listener.input_buffer().as_str(), "dra");

        let outcome = press(&mut listener, "return", &mut term);
        assert_eq!(outcome, KeyOutcome::Finalize("dra".into()));
        assert_eq!(listener.into_history().into_entries(), vec!["cmd1", "cmd2", "dra"]);
    }

    #[test]
    fn test_up_with_empty_history_keeps_text() {
        let mut term = RecordingTerminal::default();
        let mut listener = KeyListener::new(&plain_options());
        type_text(&mut listener, "abc", &mut term);
        term.ops.clear();

        press(&mut listener, "up", &mut term);

        assert!(term.ops.is_empty());
        assert_eq!(listener.input_buffer().as_str(), "abc");
        assert_eq!(listener.history().current(), "abc");
    }

    #[test]
    fn test_unknown_key_without_character_is_ignored() {
        let mut term = RecordingTerminal::default();
        let mut listener = KeyListener::new(&plain_options());
        press(&mut listener, "home", &mut term);
        press(&mut listener, "f1", &mut term);
        assert!(term.ops.is_empty());
        assert!(listener.input_buffer().is_empty());
    }

    #[test]
    fn test_create_listener_calls_back_once() {
        let mut stdout_mock = StdoutMock::default();
        let mut results = vec![];
        {
            let mut listener = KeyListener::new(&ReadOptions::default())
                .create_listener::<StdoutMock, _>(|line| results.push(line));
            for keypress in [
                Keypress::char('o'),
                Keypress::char('k'),
                Keypress::named("return"),
                Keypress::named("return"),
            ] {
                listener(&keypress, &mut stdout_mock).unwrap();
            }
        }
        assert_eq!(results, vec!["ok".to_string()]);
        assert_eq!(stdout_mock.get_copy_of_buffer_as_string_strip_ansi(), "ok");
    }

    #[test]
    fn test_dim_hint_is_stripped_on_screen() {
        let mut stdout_mock = StdoutMock::default();
        let options = ReadOptions::default().with_autocomplete(["hello world"]);
        let mut listener = KeyListener::new(&options);
        type_text(&mut listener, "h", &mut stdout_mock);
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string_strip_ansi(),
            "hello world"
        );
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut term = RecordingTerminal::default();
        let options = plain_options()
            .with_history(["first", "second entry"])
            .with_autocomplete(["alpha", "alphabet"]);
        let mut listener = KeyListener::new(&options);

        let keys = [
            Keypress::char('a'),
            Keypress::named("tab"),
            Keypress::named("left"),
            Keypress::named("left"),
            Keypress::char('x'),
            Keypress::named("backspace"),
            Keypress::named("backspace"),
            Keypress::named("up"),
            Keypress::named("left"),
            Keypress::named("down"),
            Keypress::named("right"),
            Keypress::named("right"),
            Keypress::named("backspace"),
            Keypress::named("up"),
            Keypress::named("up"),
            Keypress::named("backspace"),
            Keypress::named("tab"),
        ];
        for keypress in &keys {
            listener.on_keypress(keypress, &mut term).unwrap();
            let buffer = listener.input_buffer();
            assert!(buffer.cursor.position <= buffer.len());
        }
    }
}
