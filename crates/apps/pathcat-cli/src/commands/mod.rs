//! CLI command implementations.

pub mod classify;
pub mod extract;
pub mod init;

// Re-export command handlers
pub use classify::classify;
pub use extract::{extract, ExtractRequest};
pub use init::init;
