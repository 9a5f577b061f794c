//! Glyph rendering for menu rows

use super::{Modifier, Platform};

/// Display glyph for a modifier on the given platform.
pub const fn modifier_glyph(modifier: Modifier, platform: Platform) -> &'static str {
    match (modifier, platform) {
        (Modifier::Shift, _) => "⇧",
        (Modifier::Ctrl, _) => "⌃",
        (Modifier::Alt, Platform::Mac) => "⌥",
        (Modifier::Alt, Platform::Other) => "⎇",
        (Modifier::Meta, Platform::Mac) => "⌘",
        (Modifier::Meta, Platform::Other) => "⊞",
        (Modifier::Mod, Platform::Mac) => "⌘",
        (Modifier::Mod, Platform::Other) => "⌃",
    }
}

/// Render a combination for display: modifiers become glyphs, every other
/// token is upper-cased, and the pieces are concatenated in written order.
///
/// Total over any input; malformed combinations render as well as they can.
pub fn render_shortcut_glyph(shortcut: &str, platform: Platform) -> String {
    shortcut
        .split('+')
        .map(|token| match Modifier::from_token(token) {
            Some(modifier) => modifier_glyph(modifier, platform).to_string(),
            None => token.trim().to_uppercase(),
        })
        .collect()
}
