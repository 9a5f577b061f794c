//! Keyboard shortcuts
//!
//! Combinations are written the way menu declarations write them: tokens
//! joined by `+`, e.g. `"mod+shift+v"`. `mod` is the platform's primary
//! modifier (Command on macOS, Control elsewhere).

mod combo;
mod glyph;
mod platform;
mod registry;

pub use combo::{KeyChord, Modifier, Modifiers, Shortcut, Token};
pub use glyph::{modifier_glyph, render_shortcut_glyph};
pub use platform::Platform;
pub use registry::ShortcutRegistry;
