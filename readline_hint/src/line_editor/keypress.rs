// Copyright (c) 2025-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use strum_macros::{Display, EnumString};

/// One key press, in the shape terminals conventionally report it: an optional printable
/// `character`, a lowercase key `name` (`"return"`, `"left"`, `"a"`, ...) and the modifier
/// flags.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Keypress {
    pub character: Option<String>,
    pub name: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

/// Key names that have a dedicated branch in [`crate::KeyListener`].
#[derive(Debug, Display, EnumString, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum NamedKey {
    Return,
    #[strum(to_string = "escape", serialize = "esc")]
    Escape,
    Left,
    Right,
    Tab,
    Up,
    Down,
    Backspace,
}

/// Closed set of things a key press can do to the line editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    CtrlC,
    Return,
    Escape,
    Left,
    Right,
    Tab,
    Up,
    Down,
    Backspace,
    /// Catch-all for every other key. Carries the character to insert, or `None` for
    /// keys that produce no text (`home`, `f1`, ...), which are ignored.
    Insert(Option<String>),
}

impl KeyAction {
    #[must_use]
    pub fn is_finalize(&self) -> bool {
        matches!(self, KeyAction::CtrlC | KeyAction::Return | KeyAction::Escape)
    }
}

impl From<NamedKey> for KeyAction {
    fn from(key: NamedKey) -> Self {
        match key {
            NamedKey::Return => KeyAction::Return,
            NamedKey::Escape => KeyAction::Escape,
            NamedKey::Left => KeyAction::Left,
            NamedKey::Right => KeyAction::Right,
            NamedKey::Tab => KeyAction::Tab,
            NamedKey::Up => KeyAction::Up,
            NamedKey::Down => KeyAction::Down,
            NamedKey::Backspace => KeyAction::Backspace,
        }
    }
}

impl Keypress {
    /// A printable character with no modifiers.
    #[must_use]
    pub fn char(ch: char) -> Self {
        Self {
            character: Some(ch.to_string()),
            name: ch.to_lowercase().to_string(),
            shift: ch.is_uppercase(),
            ..Default::default()
        }
    }

    /// A named key such as `"return"` or `"up"`, with no character.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Default::default()
        }
    }

    /// Ctrl plus `name`.
    #[must_use]
    pub fn ctrl(name: &str) -> Self {
        Self {
            ctrl: true,
            ..Self::named(name)
        }
    }

    /// Map to the [`KeyAction`] the listener dispatches on. `ctrl` + `c` is checked first,
    /// then the named keys, and anything else becomes [`KeyAction::Insert`].
    #[must_use]
    pub fn normalize(&self) -> KeyAction {
        if self.ctrl && self.name == "c" {
            return KeyAction::CtrlC;
        }
        match NamedKey::from_str(&self.name) {
            Ok(named_key) => named_key.into(),
            Err(_) => KeyAction::Insert(self.character.clone()),
        }
    }

    /// Convert a [`crossterm`] key event. Returns `None` for release events, so a key is
    /// never dispatched twice on terminals that report both.
    ///
    /// A plain `Char` keeps its character. With exactly one of ctrl / alt held there is
    /// no character (ctrl+a is a command, not text). Ctrl + alt together is AltGr on
    /// many layouts, so the character is kept.
    #[must_use]
    pub fn from_key_event(event: KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let meta = event.modifiers.contains(KeyModifiers::ALT);
        let shift = event.modifiers.contains(KeyModifiers::SHIFT);

        let (name, character, shift) = match event.code {
            KeyCode::Char(ch) => {
                let character = (ctrl == meta).then(|| ch.to_string());
                (ch.to_lowercase().to_string(), character, shift || ch.is_uppercase())
            }
            KeyCode::Enter => (NamedKey::Return.to_string(), None, shift),
            KeyCode::Esc => (NamedKey::Escape.to_string(), None, shift),
            KeyCode::Left => (NamedKey::Left.to_string(), None, shift),
            KeyCode::Right => (NamedKey::Right.to_string(), None, shift),
            KeyCode::Up => (NamedKey::Up.to_string(), None, shift),
            KeyCode::Down => (NamedKey::Down.to_string(), None, shift),
            KeyCode::Tab => (NamedKey::Tab.to_string(), None, shift),
            KeyCode::BackTab => (NamedKey::Tab.to_string(), None, true),
            KeyCode::Backspace => (NamedKey::Backspace.to_string(), None, shift),
            KeyCode::Home => ("home".into(), None, shift),
            KeyCode::End => ("end".into(), None, shift),
            KeyCode::Delete => ("delete".into(), None, shift),
            KeyCode::Insert => ("insert".into(), None, shift),
            KeyCode::PageUp => ("pageup".into(), None, shift),
            KeyCode::PageDown => ("pagedown".into(), None, shift),
            KeyCode::F(n) => (format!("f{n}"), None, shift),
            _ => ("unknown".into(), None, shift),
        };

        Some(Self {
            character,
            name,
            ctrl,
            meta,
            shift,
        })
    }
}
