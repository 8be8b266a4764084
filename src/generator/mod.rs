//! Generate catalog types from the Home Assistant MQTT integration documentation.
//!
//! Each `*.mqtt.markdown` document carries a YAML options table between
//! [`CONFIGURATION_START`] and [`CONFIGURATION_END`]. One run turns one document into one Rust
//! source file.

mod document;
mod error;
mod naming;
mod options;
mod render;
mod schema;
mod source;
mod types;

pub use document::*;
pub use error::*;
pub use naming::{field_ident, pascal_case};
pub use options::*;
pub use render::*;
pub use schema::*;
pub use source::*;
pub use types::*;

use std::path::{Path, PathBuf};

/// A generated source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    pub file_name: String,
    pub source: String,
}

impl Generated {
    /// Write the file into `dir`, returning its path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, Error> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.source).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Fetch, parse and render the document named by the options.
pub fn generate(options: &GeneratorOptions) -> Result<Generated, Error> {
    let content = fetch(&options.source, options.timeout)?;
    generate_from(stem(&options.source), &content, options.strict_types)
}

/// Parse and render a document which is already loaded.
pub fn generate_from(stem: &str, content: &[u8], strict: bool) -> Result<Generated, Error> {
    let document = Document::parse(stem, content)?;
    let schema = EntitySchema::from_document(&document, strict)?;
    let source = render(&schema)?;

    log::info!(
        "Generated {} with {} fields",
        schema.name,
        schema.fields.len()
    );

    Ok(Generated {
        file_name: schema.file_name(),
        source,
    })
}
