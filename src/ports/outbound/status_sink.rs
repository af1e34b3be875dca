use crate::loading::domain::StatusLevel;

/// StatusSink port for delivering status messages
///
/// This port abstracts the diagnostic output channel (stderr, a tracing
/// subscriber, ...) so the status reporter only decides *what* to say.
/// Implementations must not fail: a sink that cannot write drops the message.
pub trait StatusSink: Send + Sync {
    /// Emits one rendered message at the given level
    ///
    /// # Arguments
    /// * `level` - Info for normal progress, Warn for failures
    /// * `message` - The rendered message text
    fn emit(&self, level: StatusLevel, message: &str);
}

impl<S: StatusSink + ?Sized> StatusSink for Box<S> {
    fn emit(&self, level: StatusLevel, message: &str) {
        (**self).emit(level, message)
    }
}

impl<S: StatusSink + ?Sized> StatusSink for std::sync::Arc<S> {
    fn emit(&self, level: StatusLevel, message: &str) {
        (**self).emit(level, message)
    }
}
