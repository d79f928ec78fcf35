/// Shared kernel - errors, result alias and cross-cutting helpers
pub mod error;
pub mod result;
pub mod retry;
pub mod security;

pub use result::Result;
