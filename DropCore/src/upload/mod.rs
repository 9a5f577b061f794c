//! Upload zone: queue, derived status, progress and session lifecycle

mod controller;
mod file;
mod progress;
mod queue;
mod schedule;
mod session;
mod status;

pub use controller::UploadZoneController;
pub use file::{DISPLAY_NAME_LIMIT, UploadFile};
pub use progress::SharedProgress;
pub use queue::UploadQueue;
pub use schedule::ProgressSchedule;
pub use session::{CancelToken, UploadSession};
pub use status::ZoneStatus;
