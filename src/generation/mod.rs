//! Generation domain module - turns license parameters into license text
//!
//! The workflow is normalize -> resolve -> render -> extract. Rendering is
//! behind the [`TemplateRenderer`] port and variant lookup behind
//! [`VariantResolver`]; the infrastructure layer provides the tera renderer
//! and the template registry.

pub mod context;
pub mod errors;
pub mod extractor;
pub mod normalizer;
pub mod orchestrator;
pub mod traits;
pub mod types;

pub use context::*;
pub use errors::*;
pub use normalizer::{DEFAULT_COPYRIGHT_HOLDER, DEFAULT_VARIANT, normalize, parse_year};
pub use orchestrator::*;
pub use traits::*;
pub use types::*;
