//! Default adapter implementations for the ports.

pub mod options_resolver;

pub use options_resolver::OptionsResolver;
