//! auto-mit: generate plain-text software license files
//!
//! Raw license parameters are normalized into a typed request, the requested
//! variant is resolved to an installed template, the template is rendered to
//! themed markup and the license body is extracted back out as plain text.
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod error;
pub mod generation;
pub mod infrastructure;
pub mod server;
