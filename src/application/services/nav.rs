//! Navigation rendering service
//!
//! Loads navigation data files, renders them with the configured renderer
//! and writes the resulting markup.

use std::path::Path;
use std::sync::Arc;

use termtree::Tree;
use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{outline, DataFormat, NavContext, NavTreeRenderer};
use crate::infrastructure::traits::FileSystem;

/// What part of the page to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Assets, menu toggle, nav tree and content frame
    #[default]
    Page,
    /// Only the nested `<ul>` tree
    NavOnly,
}

/// Service for turning navigation data files into markup.
pub struct NavService {
    fs: Arc<dyn FileSystem>,
    renderer: NavTreeRenderer,
}

impl NavService {
    /// Create a new navigation service.
    pub fn new(fs: Arc<dyn FileSystem>, renderer: NavTreeRenderer) -> Self {
        Self { fs, renderer }
    }

    /// Load a navigation data file.
    ///
    /// The format is detected from the extension unless given explicitly.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path, format: Option<DataFormat>) -> ApplicationResult<NavContext> {
        if !self.fs.is_file(path) {
            return Err(ApplicationError::InputNotFound(path.to_path_buf()));
        }
        let format = match format {
            Some(format) => format,
            None => DataFormat::from_path(path)?,
        };
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read navigation file", path)?;

        let ctx = format.parse(&content).map_err(|source| ApplicationError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("load: {} entries from {}", ctx.entry_count(), path.display());
        Ok(ctx)
    }

    pub fn render(&self, ctx: &NavContext, mode: RenderMode) -> String {
        match mode {
            RenderMode::Page => self.renderer.render(ctx),
            RenderMode::NavOnly => self.renderer.render_list(ctx.nav()),
        }
    }

    /// Load and render in one step.
    pub fn render_file(
        &self,
        path: &Path,
        format: Option<DataFormat>,
        mode: RenderMode,
    ) -> ApplicationResult<String> {
        let ctx = self.load(path, format)?;
        Ok(self.render(&ctx, mode))
    }

    /// Write rendered markup, creating parent directories as needed.
    #[instrument(level = "debug", skip(self, content))]
    pub fn write(&self, path: &Path, content: &str) -> ApplicationResult<()> {
        self.fs.ensure_parent(path).as_output_error(path)?;
        self.fs.write(path, content).as_output_error(path)?;
        info!("wrote {} bytes to {}", content.len(), path.display());
        Ok(())
    }

    /// Terminal outline of the tree, rooted at the data file name.
    pub fn outline(&self, path: &Path, ctx: &NavContext) -> Tree<String> {
        let root = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "nav".to_string());
        outline(&root, ctx.nav())
    }
}
