//! Progress bar polled from the upload session's shared progress

use std::time::Duration;

use dropcore::upload::SharedProgress;
use floem::action::exec_after;
use floem::prelude::*;
use floem_reactive::create_effect;
use uuid::Uuid;

use super::theme::colors;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Whether the bar has to look at the shared value again. Progress never
/// moves past 100 within a session.
fn keep_polling(session_running: bool, pct: u8) -> bool {
    session_running && pct < 100
}

/// Horizontal progress bar with a percentage label.
///
/// While a session runs the shared value is polled every 50ms; timer steps
/// may raise it between frames. A new session id restarts polling.
pub fn progress_bar(shared: SharedProgress, session: RwSignal<Option<Uuid>>) -> impl IntoView {
    let polled_pct = RwSignal::new(0u8);
    let polling = RwSignal::new(false);

    fn poll_and_schedule(
        shared: SharedProgress,
        polled_pct: RwSignal<u8>,
        session: RwSignal<Option<Uuid>>,
        polling: RwSignal<bool>,
    ) {
        let pct = shared.get_pct();
        polled_pct.set(pct);

        if keep_polling(session.get_untracked().is_some(), pct) {
            exec_after(POLL_INTERVAL, move |_| {
                poll_and_schedule(shared, polled_pct, session, polling);
            });
        } else {
            polling.set(false);
        }
    }

    // Start polling for each new session
    create_effect(move |_| {
        if session.get().is_some() {
            if !polling.get_untracked() {
                polling.set(true);
                poll_and_schedule(shared.clone(), polled_pct, session, polling);
            }
        } else {
            polled_pct.set(0);
        }
    });

    v_stack((
        container(
            container(empty()).style(move |s| {
                let pct = polled_pct.get();
                s.height_full()
                    .width_pct(f64::from(pct))
                    .background(colors().accent)
                    .border_radius(4.0)
            }),
        )
        .style(|s| {
            s.width_full()
                .height(6.0)
                .background(colors().border)
                .border_radius(4.0)
        }),
        label(move || format!("{}%", polled_pct.get())).style(|s| {
            s.font_size(11.0)
                .margin_top(4.0)
                .color(colors().text_muted)
        }),
    ))
    .style(|s| s.width_full().items_center())
}
