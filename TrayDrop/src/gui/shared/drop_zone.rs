//! Shared drop zone component for drag-and-drop file operations

use std::path::PathBuf;

use dropcore::upload::ZoneStatus;
use floem::event::{Event, EventListener};
use floem::prelude::*;

use super::theme::colors;

/// Dashed drop target whose border follows the zone status.
///
/// Each dropped file arrives as its own event; `on_drop` is called once
/// per path. floem 0.2 does not forward OS file hover events, so nothing
/// here can move the zone to `Active`.
pub fn drop_zone(
    status: RwSignal<ZoneStatus>,
    content: impl IntoView + 'static,
    on_drop: impl Fn(PathBuf) + 'static,
) -> impl IntoView {
    container(content)
        .on_event_stop(EventListener::DroppedFile, move |e| {
            if let Event::DroppedFile(drop_event) = e {
                on_drop(drop_event.path.clone());
            }
        })
        .style(move |s| {
            let c = colors();
            let border = match status.get() {
                ZoneStatus::Pending => c.border_strong,
                ZoneStatus::Active => c.accent,
                ZoneStatus::Accepted => c.success,
            };
            s.width_full()
                .height(96.0)
                .padding_horiz(16.0)
                .items_center()
                .justify_center()
                .color(c.text_primary)
                .border(1.0)
                .border_color(border)
                .border_radius(6.0)
        })
}
