use crate::application::dto::{LoadRequest, LoadResponse};
use crate::shared::Result;

/// LoadResourcePort - Inbound port for the load resource use case
///
/// This port defines the interface that external adapters (the CLI)
/// use to trigger a load with status reporting.
pub trait LoadResourcePort {
    /// Loads the resource, reporting through the loader callbacks
    ///
    /// # Errors
    /// Returns an error if the resource cannot be opened or read to the
    /// end. The failure has already been reported through `on_failure`.
    fn load(&self, request: LoadRequest) -> Result<LoadResponse>;
}
