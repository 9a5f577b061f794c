//! Active shortcut bindings

use super::{KeyChord, Platform, Shortcut};
use crate::error::{Error, Result};

/// Bindings from shortcuts to targets, resolved for one platform.
///
/// Two shortcuts that resolve to the same chord conflict even if written
/// differently (`mod+o` and `ctrl+o` off macOS).
#[derive(Debug, Clone)]
pub struct ShortcutRegistry<T> {
    platform: Platform,
    bindings: Vec<(KeyChord, Shortcut, T)>,
}

impl<T: Clone + PartialEq> ShortcutRegistry<T> {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            bindings: Vec::new(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bind `shortcut` to `target`.
    pub fn register(&mut self, shortcut: Shortcut, target: T) -> Result<()> {
        let chord = shortcut.chord(self.platform);
        if self.bindings.iter().any(|(bound, _, _)| *bound == chord) {
            return Err(Error::ShortcutConflict {
                combo: shortcut.as_str().to_string(),
            });
        }
        tracing::debug!("Bound {} ({})", shortcut, chord);
        self.bindings.push((chord, shortcut, target));
        Ok(())
    }

    /// Drop every binding for `target`. Returns how many were removed.
    pub fn unregister(&mut self, target: &T) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|(_, _, bound)| bound != target);
        before - self.bindings.len()
    }

    /// Look up the target for a key press.
    pub fn lookup(&self, pressed: &KeyChord) -> Option<&T> {
        self.bindings
            .iter()
            .find(|(_, shortcut, _)| shortcut.matches(pressed, self.platform))
            .map(|(_, _, target)| target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcut::Modifiers;

    fn ctrl() -> Modifiers {
        Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        }
    }

    #[test]
    fn test_conflict_across_spellings() {
        let mut registry = ShortcutRegistry::new(Platform::Other);
        registry.register(Shortcut::parse("mod+o").unwrap(), "open").unwrap();

        let err = registry
            .register(Shortcut::parse("ctrl+o").unwrap(), "other")
            .unwrap_err();
        assert!(matches!(err, Error::ShortcutConflict { combo } if combo == "ctrl+o"));

        // On macOS mod is Command, so the two no longer collide
        let mut mac = ShortcutRegistry::new(Platform::Mac);
        mac.register(Shortcut::parse("mod+o").unwrap(), "open").unwrap();
        mac.register(Shortcut::parse("ctrl+o").unwrap(), "other").unwrap();
        assert_eq!(mac.len(), 2);
    }

    #[test]
    fn test_lookup_and_unregister() {
        let mut registry = ShortcutRegistry::new(Platform::Other);
        registry.register(Shortcut::parse("mod+q").unwrap(), 7).unwrap();

        assert_eq!(registry.lookup(&KeyChord::new(ctrl(), "q")), Some(&7));
        assert_eq!(registry.lookup(&KeyChord::new(Modifiers::NONE, "q")), None);

        assert_eq!(registry.unregister(&7), 1);
        assert!(registry.is_empty());
        assert_eq!(registry.lookup(&KeyChord::new(ctrl(), "q")), None);
    }
}
