use dropcore::prelude::*;
use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_cancel_after_any_number_of_steps() {
    for fired in 0..=10u32 {
        let scheduler = Arc::new(ManualScheduler::new());
        let sink = Arc::new(MemorySink::new());
        let mut zone = UploadZoneController::new(scheduler.clone(), sink.clone());

        zone.accept_drop(vec![UploadFile::new("report.pdf", 2048)]);
        scheduler.advance(Duration::from_millis(500) * fired);
        zone.cancel();
        scheduler.advance(Duration::from_secs(10));

        assert!(zone.queue().is_empty());
        assert_eq!(zone.status(), ZoneStatus::Pending);
        assert_eq!(sink.progress_values().len(), fired as usize);
    }
}

#[test]
fn test_thread_scheduler_over_channel() {
    let (tx, rx) = mpsc::channel();
    let mut zone = UploadZoneController::new(
        Arc::new(ThreadScheduler::new()),
        Arc::new(ChannelSink::new(tx)),
    )
    .with_schedule(ProgressSchedule::new(10, Duration::from_millis(20)));

    zone.accept_drop(vec![UploadFile::new("a.bin", 1), UploadFile::new("b.bin", 1)]);

    let mut seen = Vec::new();
    while seen.len() < 10 {
        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            HostEvent::Progress { progress } => seen.push(progress),
            HostEvent::Quit => unreachable!(),
        }
    }
    assert_eq!(seen, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
}

#[test]
fn test_accept_paths_skips_unreadable() {
    let dir = tempdir().unwrap();
    let real = dir.path().join("real.txt");
    std::fs::write(&real, b"hello").unwrap();

    let scheduler = Arc::new(ManualScheduler::new());
    let mut zone = UploadZoneController::new(scheduler, Arc::new(MemorySink::new()));
    zone.accept_paths([real.clone(), dir.path().join("ghost.txt"), dir.path().to_path_buf()]);

    assert_eq!(zone.queue().len(), 1);
    assert_eq!(zone.queue().files()[0].size, 5);
    assert_eq!(zone.status_text().as_deref(), Some("Uploading real.txt"));

    // Nothing readable at all leaves the zone alone
    let mut empty = UploadZoneController::new(
        Arc::new(ManualScheduler::new()),
        Arc::new(MemorySink::new()),
    );
    empty.accept_paths([dir.path().join("ghost.txt")]);
    assert_eq!(empty.status(), ZoneStatus::Pending);
}

#[test]
fn test_glyphs_for_platform() {
    assert_eq!(render_shortcut_glyph("mod+shift+v", Platform::Other), "⌃⇧V");
    assert_eq!(render_shortcut_glyph("mod+shift+v", Platform::Mac), "⌘⇧V");
}

#[test]
fn test_menu_shortcut_drives_upload_zone() {
    let scheduler = Arc::new(ManualScheduler::new());
    let sink = Arc::new(MemorySink::new());
    let zone = Rc::new(std::cell::RefCell::new(UploadZoneController::new(
        scheduler.clone(),
        sink.clone(),
    )));
    let quit_count = Rc::new(Cell::new(0));

    let menu = {
        let zone = zone.clone();
        let quit_count = quit_count.clone();
        let sink = sink.clone();
        dropcore::menu::Menu::from_entries(default_menu(), Platform::Mac, move |action| {
            match action {
                MenuAction::SelectFile => {
                    let zone = zone.clone();
                    Some(Rc::new(move || {
                        zone.borrow_mut().accept_drop(vec![UploadFile::new("picked.png", 9)]);
                    }) as dropcore::menu::Callback)
                }
                MenuAction::Quit => {
                    let quit_count = quit_count.clone();
                    let sink = sink.clone();
                    Some(Rc::new(move || {
                        quit_count.set(quit_count.get() + 1);
                        sink.emit(HostEvent::Quit).unwrap();
                    }) as dropcore::menu::Callback)
                }
                _ => None,
            }
        })
    };

    let cmd = Modifiers {
        meta: true,
        ..Modifiers::NONE
    };
    assert!(menu.dispatch(&KeyChord::new(cmd, "o")));
    assert_eq!(zone.borrow().status(), ZoneStatus::Accepted);

    scheduler.advance(Duration::from_secs(5));
    assert!(menu.dispatch(&KeyChord::new(cmd, "q")));

    assert_eq!(quit_count.get(), 1);
    assert_eq!(sink.events().last(), Some(&HostEvent::Quit));
    assert_eq!(sink.progress_values().len(), 10);
}
