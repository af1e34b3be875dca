use crate::application::dto::{LoadRequest, LoadResponse, MAX_CHUNK_SIZE};
use crate::application::factories::LoaderCallbacks;
use crate::loading::domain::ProgressEvent;
use crate::ports::inbound::LoadResourcePort;
use crate::ports::outbound::{OpenedResource, ResourceSource};
use crate::shared::error::LoadStatusError;
use crate::shared::Result;
use std::io::{ErrorKind, Read};

/// LoadResourceUseCase - streams a resource and drives the loader callbacks
///
/// This use case plays the loader: it calls `on_start`, reads the resource
/// chunk by chunk calling `on_progress` with the running byte count, then
/// `on_complete` followed by either `on_success` or `on_failure`.
///
/// # Type Parameters
/// * `RS` - ResourceSource implementation
pub struct LoadResourceUseCase<RS> {
    source: RS,
    callbacks: LoaderCallbacks,
}

impl<RS: ResourceSource> LoadResourceUseCase<RS> {
    /// Creates a new LoadResourceUseCase with injected dependencies
    pub fn new(source: RS, callbacks: LoaderCallbacks) -> Self {
        Self { source, callbacks }
    }

    /// Executes the load
    ///
    /// # Returns
    /// LoadResponse with the byte count and elapsed time
    pub fn execute(&self, request: LoadRequest) -> Result<LoadResponse> {
        let timer = (self.callbacks.on_start)();

        let outcome = self
            .source
            .open()
            .and_then(|opened| self.stream(opened, request.chunk_size));

        let elapsed = timer.elapsed();
        (self.callbacks.on_complete)(Some(timer));

        match outcome {
            Ok((bytes_loaded, size_hint, progress_events)) => {
                (self.callbacks.on_success)();
                Ok(LoadResponse {
                    resource: self.source.describe(),
                    bytes_loaded,
                    size_hint,
                    progress_events,
                    elapsed,
                })
            }
            Err(error) => {
                (self.callbacks.on_failure)(&error);
                Err(error)
            }
        }
    }

    /// Reads the whole stream, returning (bytes, size hint, progress events)
    fn stream(
        &self,
        opened: OpenedResource,
        chunk_size: usize,
    ) -> Result<(u64, Option<u64>, usize)> {
        let OpenedResource {
            mut reader,
            size_hint,
        } = opened;
        let mut buffer = vec![0u8; buffer_len(chunk_size, size_hint)];
        let mut loaded: u64 = 0;
        let mut events = 0usize;

        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => {
                    loaded += n as u64;
                    (self.callbacks.on_progress)(ProgressEvent::new(loaded, size_hint));
                    events += 1;
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(LoadStatusError::ReadFailed {
                        resource: self.source.describe(),
                        bytes_read: loaded,
                        source: e,
                    }
                    .into());
                }
            }
        }

        // An empty resource still gets one notification
        if events == 0 {
            (self.callbacks.on_progress)(ProgressEvent::new(0, size_hint));
            events = 1;
        }

        Ok((loaded, size_hint, events))
    }
}

/// Read buffer length: within `1..=MAX_CHUNK_SIZE`, and no larger than a known resource
fn buffer_len(chunk_size: usize, size_hint: Option<u64>) -> usize {
    let capped = chunk_size.clamp(1, MAX_CHUNK_SIZE);
    match size_hint {
        Some(hint) if hint > 0 => capped.min(usize::try_from(hint).unwrap_or(usize::MAX)),
        _ => capped,
    }
}

impl<RS: ResourceSource> LoadResourcePort for LoadResourceUseCase<RS> {
    fn load(&self, request: LoadRequest) -> Result<LoadResponse> {
        self.execute(request)
    }
}
