//! load-status - console status reporting for resource loaders
//!
//! This library builds the lifecycle callbacks (start, progress, completion,
//! success, failure) a loader invokes while it fetches a resource, and turns
//! them into human-readable status messages.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`loading`): Progress events, timers, messages and the status reporter
//! - **Application Layer** (`application`): Callback factory and the load use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use load_status::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let reporter = StatusReporter::new(StderrStatusSink::new());
//! let callbacks = CallbacksFactory::create(reporter);
//!
//! let source = FileResourceSource::new(PathBuf::from("app.wasm"));
//! let use_case = LoadResourceUseCase::new(source, callbacks);
//! let response = use_case.execute(LoadRequest::default())?;
//! println!("{} bytes", response.bytes_loaded);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod loading;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrStatusSink;
    pub use crate::adapters::outbound::filesystem::{FileResourceSource, StdinResourceSource};
    pub use crate::adapters::outbound::logging::TracingStatusSink;
    pub use crate::application::dto::{LoadRequest, LoadResponse, SinkKind};
    pub use crate::application::factories::{CallbacksFactory, LoaderCallbacks, SinkFactory};
    pub use crate::application::use_cases::LoadResourceUseCase;
    pub use crate::loading::domain::{
        LoadTimer, ProgressEvent, ProgressReading, StatusLevel, StatusMessage,
    };
    pub use crate::loading::policies::OverflowPolicy;
    pub use crate::loading::services::StatusReporter;
    pub use crate::ports::inbound::LoadResourcePort;
    pub use crate::ports::outbound::{OpenedResource, ResourceSource, StatusSink};
    pub use crate::shared::error::{ExitCode, LoadStatusError};
    pub use crate::shared::Result;
}
