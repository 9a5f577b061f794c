//! Drop zone with its three faces: idle, hovered and uploading

use dropcore::upload::ZoneStatus;
use floem::prelude::*;

use crate::gui::shared::{colors, drop_zone, progress_bar};
use crate::gui::state::UploadState;

pub fn upload_zone(state: UploadState) -> impl IntoView {
    let status = state.status;
    let drop_state = state.clone();
    let content = dyn_container(
        move || status.get(),
        move |current| match current {
            ZoneStatus::Pending => hint("Drag files here...").into_any(),
            // Only reachable through UploadZoneController::drag_enter
            ZoneStatus::Active => hint("Start upload...").into_any(),
            ZoneStatus::Accepted => uploading_view(state.clone()).into_any(),
        },
    )
    .style(|s| s.width_full());

    drop_zone(status, content, move |path| drop_state.queue_dropped(path))
}

fn hint(text: &'static str) -> impl IntoView {
    label(move || text).style(|s| {
        s.width_full()
            .font_size(13.0)
            .justify_center()
            .color(colors().text_muted)
    })
}

fn uploading_view(state: UploadState) -> impl IntoView {
    let status_text = state.status_text;
    let cancel_state = state.clone();

    v_stack((
        h_stack((
            label(move || status_text.get()).style(|s| {
                s.flex_grow(1.0)
                    .font_size(12.0)
                    .text_ellipsis()
                    .color(colors().text_primary)
            }),
            button("Cancel")
                .action(move || cancel_state.cancel())
                .style(|s| {
                    s.font_size(11.0)
                        .padding_horiz(8.0)
                        .padding_vert(2.0)
                        .color(colors().error)
                }),
        ))
        .style(|s| s.width_full().items_center().gap(8.0).margin_bottom(8.0)),
        progress_bar(state.progress.clone(), state.session),
    ))
    .style(|s| s.width_full())
}
