//! Shared components for the tray window

mod drop_zone;
mod progress;
pub mod theme;

pub use drop_zone::drop_zone;
pub use progress::progress_bar;
pub use theme::{ThemeColors, colors, init_theme};

use floem::prelude::*;

/// Thin horizontal rule between menu groups
pub fn separator() -> impl IntoView {
    empty().style(|s| {
        s.width_full()
            .height(1.0)
            .margin_vert(4.0)
            .background(colors().border)
    })
}
