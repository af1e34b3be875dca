use crate::loading::domain::{LoadTimer, ProgressEvent};
use crate::loading::services::StatusReporter;
use crate::ports::outbound::StatusSink;
use std::fmt::Debug;
use std::sync::Arc;

pub type StartHook = Box<dyn Fn() -> LoadTimer + Send + Sync>;
pub type ProgressHook = Box<dyn Fn(ProgressEvent) + Send + Sync>;
pub type CompleteHook = Box<dyn Fn(Option<LoadTimer>) + Send + Sync>;
pub type SuccessHook = Box<dyn Fn() + Send + Sync>;
pub type FailureHook = Box<dyn Fn(&dyn Debug) + Send + Sync>;

/// LoaderCallbacks - the capability record handed to a loader
///
/// Five independent hooks a loader invokes at its lifecycle points. The
/// record enforces no ordering; `on_start` hands out the timer that
/// `on_complete` reports on.
pub struct LoaderCallbacks {
    pub on_start: StartHook,
    pub on_progress: ProgressHook,
    pub on_complete: CompleteHook,
    pub on_success: SuccessHook,
    pub on_failure: FailureHook,
}

impl std::fmt::Debug for LoaderCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderCallbacks").finish_non_exhaustive()
    }
}

/// Factory for building loader callbacks
///
/// Wraps a `StatusReporter` in the five-hook record so loaders that only
/// understand callbacks can drive it.
pub struct CallbacksFactory;

impl CallbacksFactory {
    /// Creates the callback record backed by the given reporter
    ///
    /// # Examples
    /// ```
    /// use load_status::adapters::outbound::console::StderrStatusSink;
    /// use load_status::application::factories::CallbacksFactory;
    /// use load_status::loading::domain::ProgressEvent;
    /// use load_status::loading::services::StatusReporter;
    ///
    /// let callbacks = CallbacksFactory::create(StatusReporter::new(StderrStatusSink::new()));
    /// let timer = (callbacks.on_start)();
    /// (callbacks.on_progress)(ProgressEvent::new(50, Some(200)));
    /// (callbacks.on_complete)(Some(timer));
    /// (callbacks.on_success)();
    /// ```
    pub fn create<S>(reporter: StatusReporter<S>) -> LoaderCallbacks
    where
        S: StatusSink + 'static,
    {
        let reporter = Arc::new(reporter);

        let start = Arc::clone(&reporter);
        let progress = Arc::clone(&reporter);
        let complete = Arc::clone(&reporter);
        let success = Arc::clone(&reporter);
        let failure = reporter;

        LoaderCallbacks {
            on_start: Box::new(move || start.on_start()),
            on_progress: Box::new(move |event| progress.on_progress(event)),
            on_complete: Box::new(move |timer| complete.on_complete(timer)),
            on_success: Box::new(move || success.on_success()),
            on_failure: Box::new(move |error: &dyn Debug| failure.on_failure(error)),
        }
    }
}
