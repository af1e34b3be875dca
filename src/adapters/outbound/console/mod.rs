mod stderr_status_sink;

pub use stderr_status_sink::StderrStatusSink;
