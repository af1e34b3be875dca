/// Loading domain - status reporting for resource loaders
///
/// Pure domain types (progress events, timers, messages), the overflow
/// policy, and the status reporter service that turns loader lifecycle
/// hooks into messages for a `StatusSink`.
pub mod domain;
pub mod policies;
pub mod services;
