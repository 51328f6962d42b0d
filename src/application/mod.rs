//! Application layer - orchestrates use cases and coordinates between domains

pub mod commands;
pub mod errors;
pub mod generate_license;
pub mod interactive;
pub mod traits;

pub use commands::*;
pub use errors::*;
pub use generate_license::*;
pub use interactive::*;
pub use traits::*;
