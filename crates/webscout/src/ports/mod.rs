//! Ports (Interfaces)
//!
//! Abstract interfaces for the external collaborators: the text-generation
//! model, the search/extract provider, and the tokenizer.
//!
//! Implementations live in the `services` layer.

pub mod generator;
pub mod provider;
pub mod token_counter;

// Re-exports
pub use generator::*;
pub use provider::*;
pub use token_counter::*;
