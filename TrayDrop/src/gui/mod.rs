//! TrayDrop GUI
//!
//! A small always-available window: the upload drop zone on top, the tray
//! menu below it. Menu shortcuts work anywhere in the window.

mod menu;
mod scheduler;
mod settings;
pub mod shared;
pub mod state;
mod upload_zone;

use std::rc::Rc;

use dropcore::menu::Menu;
use dropcore::shortcut::{KeyChord, Modifiers};
use floem::Application;
use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, KeyEvent, Modifiers as KeyModifiers, NamedKey};
use floem::prelude::*;
use floem::window::WindowConfig;

pub use scheduler::FloemScheduler;

use crate::host::HostBridge;
use menu::{build_menu, menu_view};
use settings::settings_panel;
use shared::colors;
use state::{ConfigState, UploadState};
use upload_zone::upload_zone;

/// Run the TrayDrop window
pub fn run_app() {
    Application::new()
        .window(
            move |_| app_view(),
            Some(
                WindowConfig::default()
                    .size((300.0, 420.0))
                    .title("TrayDrop"),
            ),
        )
        .run();
}

fn app_view() -> impl IntoView {
    let config = ConfigState::new();

    // The host is the process itself: progress is logged, quit exits
    let host = HostBridge::spawn(|_| {}, || std::process::exit(0));
    let sink = host.sink();

    let upload = UploadState::new(&config, sink.clone());
    let menu = build_menu(&config, &upload, sink);

    let menu_for_keys = Rc::clone(&menu);
    let config_for_close = config.clone();

    v_stack((
        upload_zone(upload),
        empty().style(|s| s.height(8.0)),
        menu_view(menu),
        settings_panel(config),
    ))
    .style(|s| {
        let c = colors();
        s.width_full()
            .height_full()
            .padding(10.0)
            .background(c.bg_base)
            .color(c.text_primary)
    })
    .window_title(|| "TrayDrop".to_string())
    .on_event(EventListener::WindowClosed, move |_| {
        config_for_close.save();
        // quit_app() alone leaves the host thread running
        std::process::exit(0);
    })
    .on_event(EventListener::KeyDown, move |e| {
        if let Event::KeyDown(key_event) = e
            && dispatch_shortcut(&menu_for_keys, key_event)
        {
            return EventPropagation::Stop;
        }
        EventPropagation::Continue
    })
}

fn dispatch_shortcut(menu: &Menu, key_event: &KeyEvent) -> bool {
    key_chord(key_event).is_some_and(|chord| menu.dispatch(&chord))
}

/// Translate a key press into the chord the menu registry understands.
fn key_chord(key_event: &KeyEvent) -> Option<KeyChord> {
    let key = match &key_event.key.logical_key {
        Key::Character(c) => c.to_string(),
        Key::Named(NamedKey::Enter) => "enter".to_string(),
        Key::Named(NamedKey::Escape) => "escape".to_string(),
        Key::Named(NamedKey::Tab) => "tab".to_string(),
        Key::Named(NamedKey::Space) => "space".to_string(),
        _ => return None,
    };

    let m = key_event.modifiers;
    let mods = Modifiers {
        shift: m.contains(KeyModifiers::SHIFT),
        alt: m.contains(KeyModifiers::ALT),
        ctrl: m.contains(KeyModifiers::CONTROL),
        meta: m.contains(KeyModifiers::META),
    };
    Some(KeyChord::new(mods, key))
}
