mod callbacks_factory;
mod sink_factory;

pub use callbacks_factory::{CallbacksFactory, LoaderCallbacks};
pub use sink_factory::SinkFactory;
