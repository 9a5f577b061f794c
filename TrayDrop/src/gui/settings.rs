//! Settings panel, toggled from the menu

use floem::prelude::*;

use crate::config::Theme;
use crate::gui::shared::colors;
use crate::gui::state::ConfigState;

pub fn settings_panel(config: ConfigState) -> impl IntoView {
    let show = config.show_settings;

    dyn_container(
        move || show.get(),
        move |visible| {
            if visible {
                panel(config.clone()).into_any()
            } else {
                empty().into_any()
            }
        },
    )
    .style(|s| s.width_full())
}

fn panel(config: ConfigState) -> impl IntoView {
    let clear_config = config.clone();

    v_stack((
        label(|| "Theme").style(|s| s.font_size(12.0).color(colors().text_muted)),
        h_stack((
            theme_button("Dark", Theme::Dark, config.clone()),
            theme_button("Light", Theme::Light, config.clone()),
            theme_button("System", Theme::System, config),
        ))
        .style(|s| s.gap(6.0).margin_vert(6.0)),
        button("Clear recent uploads")
            .action(move || clear_config.clear_recent_uploads())
            .style(|s| s.font_size(12.0)),
    ))
    .style(|s| {
        let c = colors();
        s.width_full()
            .padding(10.0)
            .margin_top(8.0)
            .border(1.0)
            .border_color(c.border)
            .border_radius(6.0)
            .color(c.text_primary)
    })
}

fn theme_button(text: &'static str, theme: Theme, config: ConfigState) -> impl IntoView {
    let current = config.theme;
    button(text)
        .action(move || config.set_theme(theme))
        .style(move |s| {
            let c = colors();
            let s = s.font_size(12.0).padding_horiz(10.0).border_radius(4.0);
            if current.get() == theme {
                s.background(c.accent).color(Color::WHITE)
            } else {
                s
            }
        })
}
