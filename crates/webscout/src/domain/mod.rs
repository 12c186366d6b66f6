//! Domain Layer
//!
//! Pure value records and validation logic, no infrastructure dependencies.

pub mod errors;
pub mod message;
pub mod options;
pub mod params;
pub mod response;
pub mod urls;

// Re-exports for convenience
pub use errors::*;
pub use message::*;
pub use options::*;
pub use params::*;
pub use response::*;
