//! Tray menu: wiring of menu actions and the row views

use std::fmt::Write as _;
use std::rc::Rc;
use std::sync::Arc;

use dropcore::events::{EventSink, HostEvent, emit_or_log};
use dropcore::menu::{Callback, Menu, MenuAction, MenuItem, default_menu};
use dropcore::shortcut::Platform;
use floem::AnyView;
use floem::prelude::*;

use crate::clipboard::read_clipboard_paths;
use crate::gui::shared::{colors, separator};
use crate::gui::state::{ConfigState, UploadState};

/// Build the tray menu with every action bound to the window state.
pub fn build_menu(config: &ConfigState, upload: &UploadState, sink: Arc<dyn EventSink>) -> Rc<Menu> {
    let menu = Menu::from_entries(default_menu(), config.platform, |action| {
        wire_action(action, config, upload, &sink)
    });
    Rc::new(menu)
}

fn wire_action(
    action: MenuAction,
    config: &ConfigState,
    upload: &UploadState,
    sink: &Arc<dyn EventSink>,
) -> Option<Callback> {
    let callback: Callback = match action {
        MenuAction::SelectFile => {
            let upload = upload.clone();
            Rc::new(move || select_files(&upload))
        }
        MenuAction::PasteFromClipboard => {
            let upload = upload.clone();
            Rc::new(move || paste_from_clipboard(&upload))
        }
        MenuAction::RecentUploads => {
            let config = config.clone();
            Rc::new(move || show_recent_uploads(&config))
        }
        MenuAction::About => Rc::new(show_about),
        MenuAction::Settings => {
            let show = config.show_settings;
            Rc::new(move || show.update(|v| *v = !*v))
        }
        MenuAction::Quit => {
            let config = config.clone();
            let sink = Arc::clone(sink);
            Rc::new(move || {
                config.save();
                emit_or_log(sink.as_ref(), HostEvent::Quit);
            })
        }
        // No update channel yet
        MenuAction::CheckForUpdates => return None,
    };
    Some(callback)
}

fn select_files(upload: &UploadState) {
    let picked = rfd::FileDialog::new().set_title("Select Files").pick_files();
    if let Some(paths) = picked {
        upload.accept_paths(paths);
    }
}

fn paste_from_clipboard(upload: &UploadState) {
    match read_clipboard_paths() {
        Ok(paths) if !paths.is_empty() => upload.accept_paths(paths),
        Ok(_) => tracing::info!("Clipboard holds no paths"),
        Err(e) => {
            tracing::warn!("Clipboard read failed: {}", e);
            rfd::MessageDialog::new()
                .set_title("Upload from clipboard")
                .set_description(e.to_string())
                .set_buttons(rfd::MessageButtons::Ok)
                .show();
        }
    }
}

fn show_recent_uploads(config: &ConfigState) {
    let entries = config.recent_uploads();
    let description = if entries.is_empty() {
        "No uploads yet.".to_string()
    } else {
        entries.iter().fold(String::new(), |mut out, entry| {
            let _ = writeln!(
                out,
                "{}  ({} bytes, {})",
                entry.name,
                entry.size,
                entry.uploaded_at.format("%Y-%m-%d %H:%M")
            );
            out
        })
    };

    rfd::MessageDialog::new()
        .set_title("Recent uploads")
        .set_description(description)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

fn show_about() {
    rfd::MessageDialog::new()
        .set_title("About TrayDrop")
        .set_description(format!(
            "TrayDrop v{}\n\nDrop files on the tray window to upload them.",
            env!("CARGO_PKG_VERSION")
        ))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Menu groups separated by rules
pub fn menu_view(menu: Rc<Menu>) -> impl IntoView {
    let platform = menu.platform();
    let mut rows: Vec<AnyView> = Vec::new();

    for (index, group) in menu.groups().iter().enumerate() {
        if index > 0 {
            rows.push(separator().into_any());
        }
        for item in group {
            rows.push(menu_row(item.clone(), platform).into_any());
        }
    }

    v_stack_from_iter(rows).style(|s| s.width_full())
}

fn menu_row(item: MenuItem, platform: Platform) -> impl IntoView {
    let enabled = item.is_enabled();
    let glyph = item.glyph(platform).unwrap_or_default();
    let title = item.label().to_string();

    h_stack((
        label(move || title.clone()).style(|s| s.flex_grow(1.0).font_size(13.0)),
        label(move || glyph.clone()).style(|s| s.font_size(12.0).color(colors().text_muted)),
    ))
    .on_click_stop(move |_| {
        item.activate();
    })
    .style(move |s| {
        let c = colors();
        let s = s
            .width_full()
            .items_center()
            .padding_horiz(10.0)
            .padding_vert(5.0)
            .border_radius(4.0);
        if enabled {
            s.color(c.text_primary)
                .hover(|s| s.background(c.bg_hover))
        } else {
            s.color(c.text_muted)
        }
    })
}
