//! Outbound seams of the filter subsystem.

pub mod resolver;

pub use resolver::FilterResolver;
