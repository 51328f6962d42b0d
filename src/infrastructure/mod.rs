//! Infrastructure layer - concrete implementations of domain ports

pub mod generation;
pub mod output;
pub mod templates;

pub use generation::TeraTemplateRenderer;
pub use output::FileSystemOutputService;
pub use templates::VariantRegistry;
