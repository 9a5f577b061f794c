//! TrayDrop - tray window entry point

fn main() {
    tracing_subscriber::fmt::init();
    traydrop::gui::run_app();
}
