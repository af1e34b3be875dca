pub mod load_timer;
pub mod progress_event;
pub mod status_message;

pub use load_timer::{ElapsedReport, LoadTimer, DEFAULT_TIMER_LABEL};
pub use progress_event::{ProgressEvent, ProgressReading};
pub use status_message::{StatusLevel, StatusMessage};
