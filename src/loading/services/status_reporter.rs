use crate::loading::domain::{LoadTimer, ProgressEvent, StatusMessage, DEFAULT_TIMER_LABEL};
use crate::loading::policies::OverflowPolicy;
use crate::ports::outbound::StatusSink;
use std::fmt::Debug;

/// StatusReporter - turns loader lifecycle hooks into status messages
///
/// Each hook is independent: the reporter keeps no state between calls, so
/// a loader may invoke them in any order. The only thing carried across
/// hooks is the `LoadTimer` returned by `on_start`, which the caller hands
/// back to `on_complete`.
pub struct StatusReporter<S> {
    sink: S,
    label: String,
    overflow: OverflowPolicy,
}

impl<S: StatusSink> StatusReporter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            label: DEFAULT_TIMER_LABEL.to_string(),
            overflow: OverflowPolicy::default(),
        }
    }

    /// Sets the label used for the elapsed-time report
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_overflow_policy(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn on_start(&self) -> LoadTimer {
        self.send(StatusMessage::Started);
        LoadTimer::start(self.label.clone())
    }

    pub fn on_progress(&self, event: ProgressEvent) {
        let reading = self.overflow.apply(event.reading());
        self.send(StatusMessage::Progress(reading));
    }

    /// Reports completion; the elapsed time is reported only when a timer
    /// from `on_start` is supplied
    pub fn on_complete(&self, timer: Option<LoadTimer>) {
        self.send(StatusMessage::Done);
        if let Some(timer) = timer {
            self.send(StatusMessage::Elapsed(timer.finish()));
        }
    }

    pub fn on_success(&self) {
        self.send(StatusMessage::Succeeded);
    }

    pub fn on_failure(&self, error: &dyn Debug) {
        self.send(StatusMessage::Failed(format!("{:?}", error)));
    }

    fn send(&self, message: StatusMessage) {
        self.sink.emit(message.level(), &message.to_string());
    }
}
