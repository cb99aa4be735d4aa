//! Navigation data formats and document parsing

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::entities::{NavContext, NavEntry};
use crate::domain::error::DomainError;

/// Serialization format of a navigation data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
    Toml,
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataFormat::Json => "json",
            DataFormat::Yaml => "yaml",
            DataFormat::Toml => "toml",
        };
        f.write_str(name)
    }
}

/// Top-level shape of a navigation document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentShape {
    /// Bare sequence of entries
    Entries,
    /// Mapping holding `collections.nav`
    Context,
    /// Empty document
    Empty,
}

impl DataFormat {
    /// Detect format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, DomainError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => Ok(DataFormat::Json),
            Some("yaml") | Some("yml") => Ok(DataFormat::Yaml),
            Some("toml") => Ok(DataFormat::Toml),
            _ => Err(DomainError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse document content into a data context.
    ///
    /// The top-level shape is inspected first, then the content is parsed
    /// straight into the matching type so errors keep their field path and
    /// position.
    pub fn parse(&self, content: &str) -> Result<NavContext, DomainError> {
        let shape = self.shape(content)?;
        debug!(
            "parse: format={}, shape={:?}, {} bytes",
            self,
            shape,
            content.len()
        );
        match shape {
            DocumentShape::Entries => self
                .typed::<Vec<NavEntry>>(content)
                .map(NavContext::from_entries),
            DocumentShape::Context => self.typed::<NavContext>(content),
            DocumentShape::Empty => Ok(NavContext::default()),
        }
    }

    fn shape(&self, content: &str) -> Result<DocumentShape, DomainError> {
        let shape = match self {
            DataFormat::Json => {
                let value: serde_json::Value =
                    serde_json::from_str(content).map_err(|e| self.malformed(e))?;
                match value {
                    serde_json::Value::Array(_) => DocumentShape::Entries,
                    serde_json::Value::Object(_) => DocumentShape::Context,
                    serde_json::Value::Null => DocumentShape::Empty,
                    other => return Err(self.unexpected_top_level(&other.to_string())),
                }
            }
            DataFormat::Yaml => {
                let value: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| self.malformed(e))?;
                match value {
                    serde_yaml::Value::Sequence(_) => DocumentShape::Entries,
                    serde_yaml::Value::Mapping(_) => DocumentShape::Context,
                    serde_yaml::Value::Null => DocumentShape::Empty,
                    other => return Err(self.unexpected_top_level(&format!("{other:?}"))),
                }
            }
            // A TOML document is always a table.
            DataFormat::Toml => DocumentShape::Context,
        };
        Ok(shape)
    }

    fn typed<T: DeserializeOwned>(&self, content: &str) -> Result<T, DomainError> {
        match self {
            DataFormat::Json => serde_json::from_str(content).map_err(|e| self.malformed(e)),
            DataFormat::Yaml => serde_yaml::from_str(content).map_err(|e| self.malformed(e)),
            DataFormat::Toml => toml::from_str(content).map_err(|e| self.malformed(e)),
        }
    }

    fn unexpected_top_level(&self, found: &str) -> DomainError {
        DomainError::Malformed {
            format: self.to_string(),
            message: format!("expected an entry list or a mapping at top level, found {found}"),
        }
    }

    fn malformed(&self, e: impl fmt::Display) -> DomainError {
        DomainError::Malformed {
            format: self.to_string(),
            message: e.to_string(),
        }
    }
}
