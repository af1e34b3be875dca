/// Application layer - Use cases, factories and DTOs
///
/// This layer wires the status reporter into loader callbacks and
/// coordinates with infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
