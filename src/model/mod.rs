//! Model loading and writing functionality
//!
//! Provides the file-system edges of generation: reading a project model from
//! YAML or JSON, and writing the generated documents back out.

pub mod loader;
pub mod writer;

pub use loader::{LoadError, ModelFormat, ModelLoader};
pub use writer::{ProjectWriter, WriteSummary, WriterOptions};
