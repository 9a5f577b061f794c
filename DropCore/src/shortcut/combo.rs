//! Parsing combinations and matching them against key presses

use std::fmt;

use super::Platform;
use crate::error::{Error, Result};

/// Symbolic modifier token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Shift,
    Alt,
    Ctrl,
    Meta,
    /// Primary modifier: Meta on macOS, Ctrl elsewhere
    Mod,
}

impl Modifier {
    /// Recognize a modifier token. Anything else is a key name.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "shift" => Some(Self::Shift),
            "alt" => Some(Self::Alt),
            "ctrl" => Some(Self::Ctrl),
            "meta" => Some(Self::Meta),
            "mod" => Some(Self::Mod),
            _ => None,
        }
    }

    /// Resolve `Mod` to the concrete modifier for a platform.
    pub const fn resolve(self, platform: Platform) -> Self {
        match self {
            Self::Mod if platform.is_mac() => Self::Meta,
            Self::Mod => Self::Ctrl,
            other => other,
        }
    }
}

/// One `+`-separated segment of a combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Modifier(Modifier),
    Key(String),
}

/// Set of held modifier keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        alt: false,
        ctrl: false,
        meta: false,
    };

    fn insert(&mut self, modifier: Modifier, platform: Platform) {
        match modifier.resolve(platform) {
            Modifier::Shift => self.shift = true,
            Modifier::Alt => self.alt = true,
            Modifier::Ctrl => self.ctrl = true,
            Modifier::Meta | Modifier::Mod => self.meta = true,
        }
    }
}

/// A concrete key press: held modifiers plus a lowercased key name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub modifiers: Modifiers,
    pub key: String,
}

impl KeyChord {
    pub fn new(modifiers: Modifiers, key: impl AsRef<str>) -> Self {
        Self {
            modifiers,
            key: key.as_ref().to_lowercase(),
        }
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let held = [
            (self.modifiers.ctrl, "ctrl"),
            (self.modifiers.alt, "alt"),
            (self.modifiers.shift, "shift"),
            (self.modifiers.meta, "meta"),
        ];
        for (_, name) in held.iter().filter(|(on, _)| *on) {
            write!(f, "{name}+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// A parsed combination such as `mod+shift+v`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    source: String,
    tokens: Vec<Token>,
}

impl Shortcut {
    /// Parse a `+`-joined combination.
    ///
    /// Empty tokens are rejected, so `"mod++"` and `""` are errors. Key
    /// names are kept as written.
    pub fn parse(combo: &str) -> Result<Self> {
        let tokens = combo
            .split('+')
            .map(|raw| {
                let token = raw.trim();
                if token.is_empty() {
                    return Err(Error::InvalidShortcut(combo.to_string()));
                }
                Ok(Modifier::from_token(token)
                    .map_or_else(|| Token::Key(token.to_string()), Token::Modifier))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            source: combo.to_string(),
            tokens,
        })
    }

    /// The combination as it was written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Glyph text for menus, e.g. `⌘⇧V` on macOS.
    pub fn glyph(&self, platform: Platform) -> String {
        super::render_shortcut_glyph(&self.source, platform)
    }

    /// The chord a user has to press on `platform` to fire this shortcut.
    ///
    /// Multiple key tokens are joined with `+`; such a chord can never be
    /// produced by a single key press.
    pub fn chord(&self, platform: Platform) -> KeyChord {
        let mut modifiers = Modifiers::NONE;
        let mut keys = Vec::new();
        for token in &self.tokens {
            match token {
                Token::Modifier(m) => modifiers.insert(*m, platform),
                Token::Key(k) => keys.push(k.as_str()),
            }
        }
        KeyChord::new(modifiers, keys.join("+"))
    }

    /// Whether a key press fires this shortcut on `platform`.
    pub fn matches(&self, pressed: &KeyChord, platform: Platform) -> bool {
        let chord = self.chord(platform);
        !chord.key.is_empty() && chord == *pressed
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
