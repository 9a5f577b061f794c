//! Tray window palettes and the theme signal behind them

use floem::prelude::*;

use crate::config::{EffectiveTheme, Theme};

/// Colors used by the drop zone, menu rows and settings panel
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    // Backgrounds
    pub bg_base: Color,
    pub bg_hover: Color,

    // Text
    pub text_primary: Color,
    pub text_muted: Color,

    // Borders
    pub border: Color,
    pub border_strong: Color,

    // Accents
    pub accent: Color,
    pub success: Color,
    pub error: Color,
}

impl ThemeColors {
    pub const fn dark() -> Self {
        Self {
            bg_base: Color::rgb8(39, 39, 42),
            bg_hover: Color::rgb8(139, 92, 246),

            text_primary: Color::rgb8(244, 244, 245),
            text_muted: Color::rgb8(128, 128, 128),

            border: Color::rgb8(63, 63, 70),
            border_strong: Color::rgb8(113, 113, 122),

            accent: Color::rgb8(139, 92, 246),
            success: Color::rgb8(46, 125, 50),
            error: Color::rgb8(239, 68, 68),
        }
    }

    pub const fn light() -> Self {
        Self {
            bg_base: Color::WHITE,
            bg_hover: Color::rgb8(221, 214, 254),

            text_primary: Color::rgb8(30, 30, 30),
            text_muted: Color::rgb8(128, 128, 128),

            border: Color::rgb8(220, 220, 220),
            border_strong: Color::rgb8(160, 160, 160),

            accent: Color::rgb8(124, 58, 237),
            success: Color::rgb8(46, 125, 50),
            error: Color::rgb8(180, 30, 30),
        }
    }

    pub const fn for_theme(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Dark => Self::dark(),
            EffectiveTheme::Light => Self::light(),
        }
    }
}

/// Theme chosen in the settings panel, shared by every style closure
static THEME_SIGNAL: std::sync::OnceLock<RwSignal<Theme>> = std::sync::OnceLock::new();

/// Create the theme signal for the window. Later calls keep the first
/// signal registered for styling.
pub fn init_theme(theme: Theme) -> RwSignal<Theme> {
    let signal = RwSignal::new(theme);
    if THEME_SIGNAL.set(signal).is_err() {
        tracing::debug!("Theme signal already initialized");
    }
    signal
}

/// Palette for the current theme; dark until the window has set one up.
pub fn colors() -> ThemeColors {
    THEME_SIGNAL
        .get()
        .map_or_else(ThemeColors::dark, |s| ThemeColors::for_theme(s.get().effective()))
}
